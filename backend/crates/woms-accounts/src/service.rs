use crate::{AccountStore, AccountsError, Result, sync};

use woms_core::{NewApplicant, Role, validate_registration};
use woms_db::UserRepository;

use std::sync::Arc;

use serde::Serialize;
use sqlx::SqlitePool;

/// Which store confirmed the credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    Primary,
    Backup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuthOutcome {
    Granted { source: CredentialSource },
    Denied,
}

impl AuthOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// Written to the primary store and mirrored to the backup.
    Stored { user_id: i64 },
    /// The primary store could not be reached; only the backup has the account.
    BackupOnly,
}

/// Authentication and registration across the primary store and the backup file.
///
/// `primary` is `None` when the database could not be opened; everything then
/// runs against the backup alone.
pub struct AccountService {
    primary: Option<SqlitePool>,
    backup: Arc<AccountStore>,
}

impl AccountService {
    pub fn new(primary: Option<SqlitePool>, backup: Arc<AccountStore>) -> Self {
        Self { primary, backup }
    }

    pub fn backup(&self) -> &AccountStore {
        &self.backup
    }

    pub fn is_online(&self) -> bool {
        self.primary.is_some()
    }

    fn users(&self) -> Result<UserRepository> {
        self.primary
            .clone()
            .map(UserRepository::new)
            .ok_or_else(AccountsError::primary_unavailable)
    }

    /// Checks the primary first. A primary row whose role differs from the
    /// requested one denies without consulting the backup. A missing row or
    /// an unreachable primary falls back to the backup file.
    pub async fn authenticate(&self, role: Role, username: &str, password: &str) -> AuthOutcome {
        let username = username.trim();

        if let Ok(users) = self.users() {
            match users.find_role(username, password).await {
                Ok(Some(stored)) if role.matches(&stored) => {
                    self.backup
                        .add_or_update(role.as_str(), username, password, None)
                        .await;
                    log::info!("{} '{}' signed in against the primary store", role, username);
                    return AuthOutcome::Granted {
                        source: CredentialSource::Primary,
                    };
                }
                Ok(Some(stored)) => {
                    log::info!(
                        "Sign-in for '{}' denied: stored role {} does not match {}",
                        username,
                        stored,
                        role
                    );
                    return AuthOutcome::Denied;
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Primary store unavailable during sign-in, using backup: {e}");
                }
            }
        }

        if self
            .backup
            .authenticate(Some(role.as_str()), username, password)
            .await
        {
            log::info!("{} '{}' signed in against the backup file", role, username);
            AuthOutcome::Granted {
                source: CredentialSource::Backup,
            }
        } else {
            log::info!("Sign-in for '{}' denied", username);
            AuthOutcome::Denied
        }
    }

    /// Validates, rejects taken usernames, then creates the applicant and
    /// mirrors it. When the primary is unreachable the account lands in the
    /// backup only.
    pub async fn register_applicant(&self, input: &NewApplicant) -> Result<RegistrationOutcome> {
        let registration = validate_registration(input)?;

        let Ok(users) = self.users() else {
            return self
                .register_backup_only(&registration.username, &registration.password)
                .await;
        };

        match users.username_exists(&registration.username).await {
            Ok(true) => return Err(AccountsError::username_taken(registration.username)),
            Ok(false) => {}
            Err(e) if e.is_connectivity() => {
                log::warn!("Primary store unavailable during registration: {e}");
                return self
                    .register_backup_only(&registration.username, &registration.password)
                    .await;
            }
            Err(e) => return Err(e.into()),
        }

        let created = users
            .create_applicant(
                &registration.username,
                &registration.password,
                &registration.name,
                registration.age,
                &registration.phone,
            )
            .await;

        match created {
            Ok(user_id) => {
                self.backup
                    .add_or_update(
                        Role::Applicant.as_str(),
                        &registration.username,
                        &registration.password,
                        None,
                    )
                    .await;
                log::info!("Registered applicant '{}' (user {})", registration.username, user_id);
                Ok(RegistrationOutcome::Stored { user_id })
            }
            Err(e) if e.is_connectivity() => {
                log::warn!("Primary store unavailable during registration: {e}");
                self.register_backup_only(&registration.username, &registration.password)
                    .await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn register_backup_only(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegistrationOutcome> {
        if self.backup.find(username).await.is_some() {
            return Err(AccountsError::username_taken(username));
        }
        self.backup
            .add_or_update(Role::Applicant.as_str(), username, password, None)
            .await;
        log::warn!("Applicant '{}' stored in the backup file only", username);
        Ok(RegistrationOutcome::BackupOnly)
    }

    /// Deletes the applicant and everything it owns, then drops it from the
    /// backup. Returns the removed username.
    pub async fn delete_applicant(&self, user_id: i64) -> Result<Option<String>> {
        let users = self.users()?;
        let username = users.delete_applicant(user_id).await?;

        if let Some(username) = &username {
            self.backup.remove(username).await;
            log::info!("Deleted applicant '{}' (user {})", username, user_id);
        }
        Ok(username)
    }

    pub async fn pull(&self) -> Result<usize> {
        let users = self.users()?;
        sync::pull_from_primary(&self.backup, &users).await
    }

    pub async fn push(&self) -> Result<Vec<String>> {
        let users = self.users()?;
        sync::push_to_primary(&self.backup, &users).await
    }
}
