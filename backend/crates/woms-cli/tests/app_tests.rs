mod common;

use common::{create_offline_app, create_test_app, run, run_at, run_json, test_now};

use woms_cli::{CliError, Output};
use woms_db::DbError;

use chrono::Duration;
use googletest::prelude::*;
use tempfile::TempDir;

const REGISTER_ANA: [&str; 14] = [
    "account",
    "register",
    "--username",
    "ana_reyes",
    "--password",
    "Secret#123",
    "--confirm-password",
    "Secret#123",
    "--name",
    "Ana Cruz Reyes",
    "--age",
    "27",
    "--phone",
    "09171234567",
];

#[tokio::test]
async fn given_reset_catalog_when_listing_jobs_then_ten_catalog_jobs_are_returned() {
    // Given
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&dir).await;
    run_json(&app, &["job", "reset-catalog"]).await;

    // When
    let jobs = run_json(&app, &["job", "list"]).await;

    // Then
    assert_that!(jobs.as_array().map(Vec::len), some(eq(10)));
}

#[tokio::test]
async fn given_registered_applicant_when_logging_in_then_granted_by_primary() {
    // Given
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&dir).await;
    let registered = run_json(&app, &REGISTER_ANA).await;

    // When
    let login = run_json(
        &app,
        &[
            "account", "login", "--role", "applicant", "--username", "ANA_REYES", "--password",
            "Secret#123",
        ],
    )
    .await;

    // Then
    assert_that!(registered["outcome"].as_str(), some(eq("stored")));
    assert_that!(login["outcome"].as_str(), some(eq("granted")));
    assert_that!(login["source"].as_str(), some(eq("primary")));
}

#[tokio::test]
async fn given_wrong_password_when_logging_in_then_denied() {
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&dir).await;
    run_json(&app, &REGISTER_ANA).await;

    let result = run(
        &app,
        &[
            "account", "login", "--role", "applicant", "--username", "ana_reyes", "--password",
            "nope",
        ],
    )
    .await;

    assert!(matches!(result, Err(CliError::Denied { .. })));
}

#[tokio::test]
async fn given_approved_application_when_approved_again_then_conflict() {
    // Given
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&dir).await;
    let jobs = run_json(&app, &["job", "reset-catalog"]).await;
    let job_id = jobs[0]["id"].as_i64().unwrap().to_string();
    let user_id = run_json(&app, &REGISTER_ANA).await["user_id"]
        .as_i64()
        .unwrap()
        .to_string();
    let application = run_json(
        &app,
        &["application", "submit", "--applicant-id", &user_id, "--job-id", &job_id],
    )
    .await;
    let application_id = application["id"].as_i64().unwrap().to_string();

    // When
    let interview = run_json(&app, &["application", "approve", &application_id]).await;
    let second = run(&app, &["application", "approve", &application_id]).await;

    // Then
    assert_that!(interview["status"].as_str(), some(eq("SCHEDULED")));
    assert_that!(interview["interview_date"].as_str(), some(eq("2026-03-13")));
    assert_that!(interview["interview_time"].as_str(), some(eq("10:00:00")));
    assert!(matches!(
        second,
        Err(CliError::Db {
            source: DbError::Conflict { .. }
        })
    ));
    let interviews = run_json(&app, &["interview", "list"]).await;
    assert_that!(interviews.as_array().map(Vec::len), some(eq(1)));
}

#[tokio::test]
async fn given_invalid_application_form_when_submitted_then_validation_error() {
    // Given
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&dir).await;
    let jobs = run_json(&app, &["job", "reset-catalog"]).await;
    let job_id = jobs[0]["id"].as_i64().unwrap().to_string();
    let user_id = run_json(&app, &REGISTER_ANA).await["user_id"]
        .as_i64()
        .unwrap()
        .to_string();

    // When
    let result = run(
        &app,
        &[
            "application", "submit", "--applicant-id", &user_id, "--job-id", &job_id,
            "--first-name", "Ana", "--last-name", "Reyes", "--age", "12", "--address", "Cebu",
            "--experience", "None",
        ],
    )
    .await;

    // Then
    assert!(matches!(result, Err(CliError::Core { .. })));
    let applications = run_json(&app, &["application", "list"]).await;
    assert_that!(applications.as_array().map(Vec::len), some(eq(0)));
}

#[tokio::test]
async fn given_time_in_when_timing_out_later_then_hours_are_recorded() {
    // Given
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&dir).await;
    let user_id = run_json(&app, &REGISTER_ANA).await["user_id"]
        .as_i64()
        .unwrap()
        .to_string();
    run_json(&app, &["attendance", "time-in", &user_id]).await;

    // When
    let later = test_now() + Duration::minutes(150);
    let output = run_at(&app, &["attendance", "time-out", &user_id], later)
        .await
        .unwrap();

    // Then
    let Output::Json(record) = output else {
        panic!("expected JSON");
    };
    assert_that!(record["hours_worked"].as_f64(), some(eq(2.5)));
}

#[tokio::test]
async fn given_export_all_when_run_then_five_csv_files_are_written() {
    // Given
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("exports");
    let app = create_test_app(&dir).await;
    run_json(&app, &REGISTER_ANA).await;

    // When
    let written = run_json(
        &app,
        &["report", "export", "all", "--output", out.to_str().unwrap()],
    )
    .await;

    // Then
    assert_that!(written["written"].as_array().map(Vec::len), some(eq(5)));
    let applicants = std::fs::read_to_string(out.join("applicants.csv")).unwrap();
    assert_that!(applicants, starts_with("userId,username,name,age,phone"));
    assert_that!(applicants, contains_substring("ana_reyes"));
}

#[tokio::test]
async fn given_single_export_without_output_when_run_then_csv_is_returned_as_text() {
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&dir).await;

    let output = run(&app, &["report", "export", "resources"]).await.unwrap();

    let Output::Text(csv) = output else {
        panic!("expected text");
    };
    assert_that!(csv, starts_with("resourceId,name,quantity"));
}

#[tokio::test]
async fn given_offline_app_when_running_database_command_then_offline_error() {
    let dir = TempDir::new().unwrap();
    let app = create_offline_app(&dir, "").await;

    let result = run(&app, &["job", "list"]).await;

    assert!(matches!(result, Err(CliError::Offline { .. })));
}

#[tokio::test]
async fn given_offline_app_when_logging_in_then_backup_grants_access() {
    // Given
    let dir = TempDir::new().unwrap();
    let app = create_offline_app(&dir, "ADMIN,admin,admin123,2025-01-01T00:00:00\n").await;

    // When
    let login = run_json(
        &app,
        &[
            "account", "login", "--role", "admin", "--username", "admin", "--password",
            "admin123",
        ],
    )
    .await;

    // Then
    assert_that!(login["source"].as_str(), some(eq("backup")));
}

#[tokio::test]
async fn given_backup_accounts_when_listed_then_passwords_are_not_shown() {
    let dir = TempDir::new().unwrap();
    let app = create_offline_app(&dir, "ADMIN,admin,admin123,2025-01-01T00:00:00\n").await;

    let listed = run_json(&app, &["account", "list"]).await;

    assert_that!(listed[0]["username"].as_str(), some(eq("admin")));
    assert!(listed[0].get("password").is_none());
}
