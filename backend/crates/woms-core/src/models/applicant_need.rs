use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantNeed {
    pub id: i64,
    pub applicant_id: i64,
    pub description: String,
    pub category: String,
    pub status: String,
    pub submitted_date: NaiveDateTime,
}

impl ApplicantNeed {
    pub const PENDING: &'static str = "PENDING";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub applicant_id: i64,
    pub skill_name: String,
    pub skill_level: String,
}
