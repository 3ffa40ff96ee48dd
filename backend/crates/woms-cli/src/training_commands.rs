use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TrainingCommands {
    /// Create an active training program
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        duration_days: i64,

        /// Comma-separated skills taught
        #[arg(long, default_value = "")]
        skills: String,
    },

    /// List training programs
    List,

    /// Delete a program and its enrollments
    Delete {
        program_id: i64,
    },

    /// Enroll an applicant in a program
    Enroll {
        #[arg(long)]
        applicant_id: i64,

        #[arg(long)]
        program_id: i64,
    },

    /// Enrollments, newest first
    Enrollments {
        /// Only this applicant's enrollments
        #[arg(long)]
        applicant_id: Option<i64>,
    },
}
