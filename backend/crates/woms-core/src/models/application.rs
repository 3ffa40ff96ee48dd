use crate::ApplicationStatus;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub status: ApplicationStatus,

    // Joined for display
    pub job_title: Option<String>,
    pub applicant_username: Option<String>,
    pub applicant_name: Option<String>,

    // Personal details captured by the form
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: i64,
    pub address: String,
    pub experience: String,
    pub submission_date: Option<NaiveDateTime>,
}

/// Job application form as submitted by an applicant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub job_id: i64,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: String,
    pub address: String,
    pub experience: String,
}

/// A validated form, ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    pub job_id: i64,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: i64,
    pub address: String,
    pub experience: String,
}

impl ApplicationDetails {
    pub const UNSPECIFIED: &'static str = "Not Specified";
    pub const NO_EXPERIENCE: &'static str = "No experience provided";

    /// Details derived from a profile name when the applicant skipped the form.
    ///
    /// Up to three words: first, optional middle, last. Anything past the
    /// third space stays in the last name.
    pub fn from_profile(job_id: i64, name: &str, age: i64) -> Self {
        let parts: Vec<&str> = name.splitn(3, ' ').collect();
        let first_name = parts.first().copied().unwrap_or_default();
        let middle_name = if parts.len() > 2 { parts[1] } else { "" };
        let last_name = if parts.len() > 1 {
            parts[parts.len() - 1]
        } else {
            ""
        };

        Self {
            job_id,
            first_name: first_name.to_string(),
            middle_name: middle_name.to_string(),
            last_name: last_name.to_string(),
            gender: Self::UNSPECIFIED.to_string(),
            age,
            address: Self::UNSPECIFIED.to_string(),
            experience: Self::NO_EXPERIENCE.to_string(),
        }
    }
}
