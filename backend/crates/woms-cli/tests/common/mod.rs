#![allow(dead_code)]

use woms_accounts::{AccountService, AccountStore};
use woms_cli::{App, Cli, Output, Result as CliResult};
use woms_db::Database;

use std::env;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;

pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

/// App backed by an in-memory database and a backup file in `dir`
pub async fn create_test_app(dir: &TempDir) -> App {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let store = AccountStore::open(dir.path().join("accounts.txt")).await;
    let accounts = AccountService::new(Some(db.pool().clone()), Arc::new(store));
    App::new(Some(db), accounts)
}

/// App with no database, as after a failed open
pub async fn create_offline_app(dir: &TempDir, backup: &str) -> App {
    let path = dir.path().join("accounts.txt");
    std::fs::write(&path, backup).expect("Failed to seed account file");
    let store = AccountStore::open(path).await;
    App::new(None, AccountService::new(None, Arc::new(store)))
}

/// Parses `args` as a woms command line and runs it at `now`
pub async fn run_at(app: &App, args: &[&str], now: NaiveDateTime) -> CliResult<Output> {
    let cli = Cli::try_parse_from(std::iter::once("woms").chain(args.iter().copied()))
        .expect("Failed to parse test command");
    app.execute(cli.command, now).await
}

pub async fn run(app: &App, args: &[&str]) -> CliResult<Output> {
    run_at(app, args, test_now()).await
}

/// Runs a command that must succeed with JSON output
pub async fn run_json(app: &App, args: &[&str]) -> Value {
    match run(app, args).await.expect("Command failed") {
        Output::Json(value) => value,
        Output::Text(text) => panic!("expected JSON, got text: {text}"),
    }
}

/// RAII guard for environment variables - automatically restores on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}
