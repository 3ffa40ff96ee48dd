use serde::{Deserialize, Serialize};

/// A user with the APPLICANT role and, when present, its person profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub user_id: i64,
    pub username: String,
    pub person_id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub phone: Option<String>,
}

/// Registration input collected from the applicant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplicant {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub age: String,
    pub phone: String,
}
