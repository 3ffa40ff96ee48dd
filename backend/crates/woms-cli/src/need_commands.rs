use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum NeedCommands {
    /// File a need for an applicant
    Create {
        #[arg(long)]
        applicant_id: i64,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,
    },

    /// An applicant's needs
    List {
        applicant_id: i64,
    },
}
