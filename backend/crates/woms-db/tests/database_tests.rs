use woms_db::{Database, UserRepository};

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_file_path_when_opened_twice_then_data_persists() {
    // Given
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("woms.db");

    // When
    let db = Database::open(&path, 2).await.unwrap();
    UserRepository::new(db.pool().clone())
        .ensure_admin("teammad", "admin123")
        .await
        .unwrap();
    db.close().await;

    let reopened = Database::open(&path, 2).await.unwrap();

    // Then
    let accounts = UserRepository::new(reopened.pool().clone())
        .all_accounts_for_sync()
        .await
        .unwrap();
    assert_that!(accounts, len(eq(1)));
    assert_that!(accounts[0].username, eq("teammad"));
}

#[tokio::test]
async fn given_unwritable_location_when_opened_then_error_reported_as_connectivity() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"file").unwrap();

    let result = Database::open(&blocker.join("woms.db"), 1).await;

    let err = result.err().unwrap();
    assert!(err.is_connectivity(), "unexpected error: {err}");
}
