use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingProgram {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration_days: i64,
    pub skills_taught: String,
    pub status: String,
}

impl TrainingProgram {
    pub const ACTIVE: &'static str = "ACTIVE";

    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(Self::ACTIVE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingEnrollment {
    pub enrollment_id: i64,
    pub applicant_id: i64,
    pub applicant_username: Option<String>,
    pub program_id: i64,
    pub program_title: Option<String>,
    pub enrollment_date: NaiveDateTime,
    pub completion_date: Option<NaiveDateTime>,
    pub status: String,
}

impl TrainingEnrollment {
    pub const ENROLLED: &'static str = "ENROLLED";
}
