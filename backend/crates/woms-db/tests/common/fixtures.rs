use woms_core::{ApplicationDetails, Job};
use woms_db::JobRepository;

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

/// Fixed timestamp so date-dependent assertions stay stable
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

pub fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).unwrap()
}

pub async fn create_test_job(pool: &SqlitePool, title: &str) -> Job {
    JobRepository::new(pool.clone())
        .create(title, "Test job description", 20_000.0)
        .await
        .expect("Failed to create test job")
}

/// A filled-in application form for the given job
pub fn create_test_details(job_id: i64) -> ApplicationDetails {
    ApplicationDetails {
        job_id,
        first_name: "Maria".to_string(),
        middle_name: String::new(),
        last_name: "Santos".to_string(),
        gender: "Female".to_string(),
        age: 35,
        address: "123 Barangay Street, City".to_string(),
        experience: "3 years construction experience".to_string(),
    }
}
