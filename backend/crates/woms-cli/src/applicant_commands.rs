use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ApplicantCommands {
    /// List applicants with their profiles
    List,

    /// Delete an applicant and everything it owns
    Delete {
        /// User ID
        user_id: i64,
    },
}
