use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SkillCommands {
    /// Record a skill for an applicant
    Add {
        #[arg(long)]
        applicant_id: i64,

        #[arg(long)]
        name: String,

        /// e.g. Beginner, Intermediate, Advanced
        #[arg(long)]
        level: String,
    },

    /// An applicant's skills
    List {
        applicant_id: i64,
    },

    /// Remove a skill
    Delete {
        skill_id: i64,
    },
}
