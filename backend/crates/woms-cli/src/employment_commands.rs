use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum EmploymentCommands {
    /// Record that an applicant is employed, starting now
    Create {
        #[arg(long)]
        applicant_id: i64,

        #[arg(long)]
        job_id: i64,

        #[arg(long)]
        monthly_income: f64,
    },

    /// Employment records
    List {
        /// Only this applicant's records
        #[arg(long)]
        applicant_id: Option<i64>,
    },
}
