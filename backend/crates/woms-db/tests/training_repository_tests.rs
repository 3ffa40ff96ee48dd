mod common;

use common::{create_test_applicant, create_test_pool, test_now};

use woms_db::TrainingRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_new_program_when_listed_then_active() {
    let pool = create_test_pool().await;
    let repo = TrainingRepository::new(pool.clone());

    let id = repo
        .create_program("Basic Carpentry", "Hands-on carpentry", 14, "Carpentry, Measuring")
        .await
        .unwrap();

    let programs = repo.list_programs().await.unwrap();
    assert_that!(programs, len(eq(1)));
    assert_that!(programs[0].id, eq(id));
    assert_that!(programs[0].status, eq("ACTIVE"));
    assert_that!(programs[0].duration_days, eq(14));
}

#[tokio::test]
async fn given_enrollment_when_listing_then_joined_titles_present() {
    // Given
    let pool = create_test_pool().await;
    let repo = TrainingRepository::new(pool.clone());
    let applicant = create_test_applicant(&pool, "maria").await;
    let program = repo
        .create_program("Food Handling", "Safety basics", 5, "Hygiene")
        .await
        .unwrap();

    // When
    let enrollment = repo.enroll(applicant, program, test_now()).await.unwrap();

    // Then
    let mine = repo.list_for_applicant(applicant).await.unwrap();
    assert_that!(mine, len(eq(1)));
    assert_that!(mine[0].enrollment_id, eq(enrollment));
    assert_that!(mine[0].program_title, some(eq("Food Handling")));
    assert_that!(mine[0].status, eq("ENROLLED"));
    assert_that!(mine[0].completion_date, none());

    let all = repo.list_enrollments().await.unwrap();
    assert_that!(all, len(eq(1)));
    assert_that!(all[0].applicant_username, some(eq("maria")));
}

#[tokio::test]
async fn given_program_with_enrollments_when_deleted_then_enrollments_removed() {
    let pool = create_test_pool().await;
    let repo = TrainingRepository::new(pool.clone());
    let applicant = create_test_applicant(&pool, "juan").await;
    let program = repo.create_program("Driving", "Road safety", 3, "Driving").await.unwrap();
    repo.enroll(applicant, program, test_now()).await.unwrap();

    let deleted = repo.delete_program(program).await.unwrap();

    assert_that!(deleted, eq(true));
    assert_that!(repo.list_programs().await.unwrap(), is_empty());
    assert_that!(repo.list_for_applicant(applicant).await.unwrap(), is_empty());
    assert_that!(repo.delete_program(program).await.unwrap(), eq(false));
}
