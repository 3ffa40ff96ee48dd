use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub salary: f64,
}

/// Ranking of one job against an applicant's recorded skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: i64,
    pub title: String,
    pub description: String,
    pub salary: f64,
    pub required_skills: i64,
    pub matched_skills: i64,
    pub match_percentage: i64,
}

impl JobMatch {
    /// Integer percentage, truncated. Zero when the job requires nothing.
    pub fn percentage(matched: i64, required: i64) -> i64 {
        if required > 0 {
            matched * 100 / required
        } else {
            0
        }
    }
}
