mod common;

use common::{create_test_pool, open_test_store};

use woms_accounts::{pull_from_primary, push_to_primary};
use woms_db::UserRepository;

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_primary_accounts_when_pulled_then_backup_matches_primary() {
    // Given
    let dir = TempDir::new().unwrap();
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool);
    users.ensure_admin("admin", "admin123").await.unwrap();
    users
        .create_applicant("ana", "new", "Ana", 27, "09171234567")
        .await
        .unwrap();
    let store = open_test_store(&dir, Some("APPLICANT,ana,old,2025-01-01T00:00:00\n")).await;

    // When
    let pulled = pull_from_primary(&store, &users).await.unwrap();

    // Then
    assert_that!(pulled, eq(2));
    let ana = store.find("ana").await.unwrap();
    assert_that!(ana.password, eq("new"));
    assert_that!(ana.time_created, eq("2025-01-01T00:00:00"));
    assert!(store.find("admin").await.is_some());
}

#[tokio::test]
async fn given_backup_only_accounts_when_pushed_then_only_missing_names_are_created() {
    // Given
    let dir = TempDir::new().unwrap();
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool);
    users
        .create_applicant("ana", "primary-pw", "Ana", 27, "09171234567")
        .await
        .unwrap();
    let store = open_test_store(
        &dir,
        Some("APPLICANT,ANA,backup-pw,t1\n,zed,zed-pw,t2\n"),
    )
    .await;

    // When
    let created = push_to_primary(&store, &users).await.unwrap();

    // Then
    assert_that!(created, eq(&vec!["zed".to_string()]));
    let ana = users.find_credentials("ana").await.unwrap().unwrap();
    assert_that!(ana.password, eq("primary-pw"));
    let zed = users.find_credentials("zed").await.unwrap().unwrap();
    assert_that!(zed.role, eq("APPLICANT"));
    assert_that!(zed.password, eq("zed-pw"));
}

#[tokio::test]
async fn given_push_repeated_when_nothing_is_missing_then_nothing_is_created() {
    let dir = TempDir::new().unwrap();
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool);
    let store = open_test_store(&dir, Some("APPLICANT,zed,pw,t1\n")).await;
    push_to_primary(&store, &users).await.unwrap();

    let second = push_to_primary(&store, &users).await.unwrap();

    assert_that!(second, is_empty());
}
