#![allow(dead_code)]

use woms_accounts::AccountStore;
use woms_db::Database;

use std::path::PathBuf;

use sqlx::SqlitePool;
use tempfile::TempDir;

pub const ACCOUNT_FILE: &str = "accounts.txt";

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    db.pool().clone()
}

/// Path of the backup file inside a temp dir
pub fn account_file(dir: &TempDir) -> PathBuf {
    dir.path().join(ACCOUNT_FILE)
}

/// Opens a backup store in a temp dir, seeded with `content` when given
pub async fn open_test_store(dir: &TempDir, content: Option<&str>) -> AccountStore {
    let path = account_file(dir);
    if let Some(content) = content {
        std::fs::write(&path, content).expect("Failed to seed account file");
    }
    AccountStore::open(path).await
}

pub fn read_account_file(dir: &TempDir) -> String {
    std::fs::read_to_string(account_file(dir)).expect("Failed to read account file")
}
