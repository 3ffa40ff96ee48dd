use woms_db::Database;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    db.pool().clone()
}

/// Inserts an applicant with a person profile and returns its user id
pub async fn create_test_applicant(pool: &SqlitePool, username: &str) -> i64 {
    woms_db::UserRepository::new(pool.clone())
        .create_applicant(username, "Secret#123", "Test Person", 30, "09170000000")
        .await
        .expect("Failed to create test applicant")
}
