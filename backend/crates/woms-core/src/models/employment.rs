use crate::EmploymentState;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employment {
    pub id: i64,
    pub applicant_id: i64,
    pub applicant_name: Option<String>,
    pub job_id: i64,
    pub job_title: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub monthly_income: f64,
    pub status: EmploymentState,
}

impl Employment {
    pub fn is_employed(&self) -> bool {
        self.status == EmploymentState::Employed
    }
}
