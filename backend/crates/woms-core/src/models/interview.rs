use crate::InterviewStatus;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: i64,
    pub application_id: i64,
    pub applicant_id: i64,
    pub job_id: i64,
    pub interview_date: NaiveDate,
    pub interview_time: NaiveTime,
    pub status: InterviewStatus,
    pub notes: String,
    pub created_date: NaiveDateTime,

    pub job_title: Option<String>,
    pub applicant_username: Option<String>,
    pub applicant_name: Option<String>,
}

impl Interview {
    pub const AUTO_SCHEDULE_NOTE: &'static str =
        "Interview scheduled automatically upon application approval.";
    pub const DEFAULT_LEAD_DAYS: u64 = 3;

    /// Slot offered when an application is approved: three days out at 10:00.
    pub fn default_slot(today: NaiveDate) -> (NaiveDate, NaiveTime) {
        let date = today
            .checked_add_days(Days::new(Self::DEFAULT_LEAD_DAYS))
            .unwrap_or(today);
        (
            date,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN),
        )
    }
}

/// Fields needed to book an interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInterview {
    pub application_id: i64,
    pub applicant_id: i64,
    pub job_id: i64,
    pub interview_date: NaiveDate,
    pub interview_time: NaiveTime,
    pub notes: String,
}
