use crate::account_file;

use woms_core::{Account, PrimaryAccount};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

/// Credential mirror kept in memory and persisted to a flat text file.
///
/// Every operation, persistence included, runs under one lock. File errors
/// are logged and swallowed; the in-memory list stays authoritative for the
/// life of the process.
pub struct AccountStore {
    path: PathBuf,
    accounts: Mutex<Vec<Account>>,
}

impl AccountStore {
    /// Loads the file eagerly. A missing or unreadable file yields an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let accounts = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let accounts = account_file::parse(&content);
                log::info!(
                    "Loaded {} backup account(s) from {}",
                    accounts.len(),
                    path.display()
                );
                accounts
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No backup account file at {}", path.display());
                Vec::new()
            }
            Err(e) => {
                log::error!("Failed to read {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Self {
            path,
            accounts: Mutex::new(accounts),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot in file order.
    pub async fn accounts(&self) -> Vec<Account> {
        self.accounts.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.accounts.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.lock().await.is_empty()
    }

    pub async fn find(&self, username: &str) -> Option<Account> {
        let accounts = self.accounts.lock().await;
        accounts.iter().find(|a| a.is_named(username)).cloned()
    }

    /// Inserts or updates by case-insensitive username, then persists.
    ///
    /// On update the role is always replaced, the password only when
    /// non-empty, and the timestamp only when one is supplied.
    pub async fn add_or_update(
        &self,
        role: &str,
        username: &str,
        password: &str,
        time_created: Option<String>,
    ) {
        let mut accounts = self.accounts.lock().await;

        match accounts.iter_mut().find(|a| a.is_named(username)) {
            Some(existing) => {
                existing.role = role.to_string();
                if !password.is_empty() {
                    existing.password = password.to_string();
                }
                if let Some(time_created) = time_created {
                    existing.time_created = time_created;
                }
            }
            None => accounts.push(Account::new(role, username, password, time_created)),
        }

        self.persist(&accounts).await;
    }

    /// Removes by case-insensitive username. The file is only rewritten
    /// when something was removed.
    pub async fn remove(&self, username: &str) -> bool {
        let mut accounts = self.accounts.lock().await;

        let before = accounts.len();
        accounts.retain(|a| !a.is_named(username));
        let removed = accounts.len() != before;

        if removed {
            self.persist(&accounts).await;
        }
        removed
    }

    /// Exact password match, plus a case-insensitive role match when a role
    /// is expected. Unknown usernames fail.
    pub async fn authenticate(
        &self,
        expected_role: Option<&str>,
        username: &str,
        password: &str,
    ) -> bool {
        let accounts = self.accounts.lock().await;

        let Some(account) = accounts.iter().find(|a| a.is_named(username)) else {
            return false;
        };

        let role_ok = expected_role.is_none_or(|role| account.has_role(role));
        role_ok && account.password == password
    }

    /// Pull policy: unseen usernames are added with a fresh timestamp; known
    /// ones get the primary's role and password but keep their timestamp.
    /// Persists once at the end.
    pub async fn sync_from_primary(&self, records: &[PrimaryAccount]) {
        let mut accounts = self.accounts.lock().await;

        for record in records {
            match accounts.iter_mut().find(|a| a.is_named(&record.username)) {
                Some(existing) => {
                    existing.role = record.role.clone();
                    existing.password = record.password.clone();
                }
                None => accounts.push(Account::new(
                    record.role.clone(),
                    record.username.clone(),
                    record.password.clone(),
                    None,
                )),
            }
        }

        self.persist(&accounts).await;
    }

    /// Local accounts the primary snapshot does not know about. Blank
    /// usernames are never offered.
    pub async fn sync_to_primary(&self, primary: &[PrimaryAccount]) -> Vec<Account> {
        let accounts = self.accounts.lock().await;

        accounts
            .iter()
            .filter(|a| !a.username.trim().is_empty())
            .filter(|a| !primary.iter().any(|p| p.is_named(&a.username)))
            .cloned()
            .collect()
    }

    /// Writes to a sibling temp file, then renames it over the target.
    async fn persist(&self, accounts: &[Account]) {
        let content = account_file::render(accounts);
        let tmp = self.temp_path();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                log::warn!("Failed to create {}: {}", parent.display(), e);
            }
        }

        if let Err(e) = tokio::fs::write(&tmp, content).await {
            log::error!("Failed to write {}: {}", tmp.display(), e);
            return;
        }

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            log::error!(
                "Failed to replace {} with {}: {}",
                self.path.display(),
                tmp.display(),
                e
            );
            let _ = tokio::fs::remove_file(&tmp).await;
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
