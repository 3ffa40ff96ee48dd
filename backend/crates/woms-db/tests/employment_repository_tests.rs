mod common;

use common::{create_test_applicant, create_test_job, create_test_pool, test_now};

use woms_core::EmploymentState;
use woms_db::EmploymentRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_placement_when_recorded_then_employed_with_joined_names() {
    // Given
    let pool = create_test_pool().await;
    let repo = EmploymentRepository::new(pool.clone());
    let applicant = create_test_applicant(&pool, "carlos").await;
    let job = create_test_job(&pool, "Security Guard").await;

    // When
    let id = repo.create(applicant, job.id, 23_000.0, test_now()).await.unwrap();

    // Then
    let records = repo.list_for_applicant(applicant).await.unwrap();
    assert_that!(records, len(eq(1)));
    assert_that!(records[0].id, eq(id));
    assert_that!(records[0].status, eq(EmploymentState::Employed));
    assert_that!(records[0].monthly_income, eq(23_000.0));
    assert_that!(records[0].job_title, some(eq("Security Guard")));
    assert_that!(records[0].applicant_name, some(eq("Test Person")));
    assert_that!(records[0].start_date, eq(test_now()));
    assert_that!(records[0].end_date, none());
}

#[tokio::test]
async fn given_records_for_two_applicants_when_listing_then_filtered_per_applicant() {
    let pool = create_test_pool().await;
    let repo = EmploymentRepository::new(pool.clone());
    let maria = create_test_applicant(&pool, "maria").await;
    let ana = create_test_applicant(&pool, "ana").await;
    let job = create_test_job(&pool, "Caregiver").await;
    repo.create(maria, job.id, 24_000.0, test_now()).await.unwrap();
    repo.create(ana, job.id, 24_000.0, test_now()).await.unwrap();

    assert_that!(repo.list_all().await.unwrap(), len(eq(2)));
    assert_that!(repo.list_for_applicant(ana).await.unwrap(), len(eq(1)));
}
