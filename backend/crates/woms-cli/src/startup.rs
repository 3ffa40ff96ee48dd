use crate::app::App;
use crate::error::Result as CliErrorResult;

use woms_accounts::{AccountService, AccountStore};
use woms_config::Config;
use woms_db::{Database, JobRepository, UserRepository, seed_sample_data};

use std::sync::Arc;

use chrono::NaiveDateTime;
use log::{error, info, warn};

/// Opens both stores and runs the configured startup steps.
///
/// Order: open database (migrations included), ensure admin, restore the
/// catalog on a database that never had it, seed, open backup file, pull,
/// push. Runs before every command, so nothing here may discard user data. A database that cannot be opened
/// leaves the app in offline mode with only the backup file.
pub async fn bootstrap(config: &Config, now: NaiveDateTime) -> CliErrorResult<App> {
    let database_path = config.database_path()?;
    let db = match Database::open(&database_path, config.database.max_connections).await {
        Ok(db) => Some(db),
        Err(e) => {
            error!(
                "Database {} unavailable, continuing with the backup file only: {}",
                database_path.display(),
                e
            );
            None
        }
    };

    if let Some(db) = &db {
        prepare_database(db, config, now).await?;
    }

    let store = Arc::new(AccountStore::open(config.accounts_path()?).await);
    let accounts = AccountService::new(db.as_ref().map(|d| d.pool().clone()), store);

    if accounts.is_online() {
        if config.startup.pull_accounts {
            if let Err(e) = accounts.pull().await {
                warn!("Startup pull failed: {e}");
            }
        }
        if config.startup.push_accounts {
            match accounts.push().await {
                Ok(created) => info!("Startup push created {} account(s)", created.len()),
                Err(e) => warn!("Startup push failed: {e}"),
            }
        }
    }

    Ok(App::new(db, accounts))
}

async fn prepare_database(db: &Database, config: &Config, now: NaiveDateTime) -> CliErrorResult<()> {
    let pool = db.pool().clone();

    if UserRepository::new(pool.clone())
        .ensure_admin(&config.admin.username, &config.admin.password)
        .await?
    {
        info!("Created bootstrap admin '{}'", config.admin.username);
    }

    if config.startup.reset_catalog
        && let Some(jobs) = JobRepository::new(pool.clone()).restore_catalog_once().await?
    {
        info!("Restored the livelihood catalog ({} jobs)", jobs.len());
    }

    if config.startup.seed_sample_data {
        seed_sample_data(&pool, now).await?;
    }

    Ok(())
}
