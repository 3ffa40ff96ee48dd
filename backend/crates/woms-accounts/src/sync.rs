//! Reconciliation between the primary store and the backup file.
//!
//! The two directions are deliberately unequal. A pull lets the primary
//! overwrite role and password in the backup. A push only ever creates
//! primary rows for usernames the primary has never seen; it never edits
//! an existing primary row.

use crate::{AccountStore, Result};

use woms_db::UserRepository;

/// Copies every primary account into the backup store. Returns how many
/// primary records were applied.
pub async fn pull_from_primary(store: &AccountStore, users: &UserRepository) -> Result<usize> {
    let records = users.all_accounts_for_sync().await?;
    store.sync_from_primary(&records).await;

    log::info!(
        "Pulled {} account(s) from the primary store into {}",
        records.len(),
        store.path().display()
    );
    Ok(records.len())
}

/// Creates minimal primary rows for backup accounts the primary lacks.
/// Returns the usernames that were actually inserted.
pub async fn push_to_primary(store: &AccountStore, users: &UserRepository) -> Result<Vec<String>> {
    let primary = users.all_accounts_for_sync().await?;
    let missing = store.sync_to_primary(&primary).await;

    let mut created = Vec::with_capacity(missing.len());
    for account in missing {
        if users
            .create_bare_account(&account.role, &account.username, &account.password)
            .await?
        {
            created.push(account.username);
        }
    }

    log::info!("Pushed {} backup account(s) to the primary store", created.len());
    Ok(created)
}
