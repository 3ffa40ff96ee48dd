use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ApplicationCommands {
    /// List applications, newest first
    List {
        /// Only this applicant's applications
        #[arg(long)]
        applicant_id: Option<i64>,
    },

    /// Get an application
    Get {
        id: i64,
    },

    /// Submit an application. Without --first-name the profile fills the form.
    Submit {
        #[arg(long)]
        applicant_id: i64,

        #[arg(long)]
        job_id: i64,

        #[arg(long, requires_all = ["last_name", "age", "address", "experience"])]
        first_name: Option<String>,

        #[arg(long, default_value = "")]
        middle_name: String,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long, default_value = "")]
        gender: String,

        #[arg(long)]
        age: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        experience: Option<String>,
    },

    /// Set an application's status: PENDING, APPROVED or REJECTED
    Status {
        id: i64,

        #[arg(long)]
        status: String,
    },

    /// Approve an application and schedule its interview
    Approve {
        id: i64,

        /// Interview date (YYYY-MM-DD), default three days from today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Interview time (HH:MM:SS), default 10:00
        #[arg(long)]
        time: Option<NaiveTime>,
    },
}
