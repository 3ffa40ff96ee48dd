use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum InterviewCommands {
    /// List interviews by date and time
    List,

    /// Schedule an interview directly
    Schedule {
        #[arg(long)]
        application_id: i64,

        #[arg(long)]
        applicant_id: i64,

        #[arg(long)]
        job_id: i64,

        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// HH:MM:SS
        #[arg(long)]
        time: NaiveTime,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Set an interview's status: SCHEDULED, COMPLETED or CANCELLED
    Status {
        id: i64,

        #[arg(long)]
        status: String,
    },
}
