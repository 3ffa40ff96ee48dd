use chrono::Local;
use serde::{Deserialize, Serialize};

/// Text layout used for `time_created`, e.g. `2025-03-14T09:26:53.589793`.
pub const ACCOUNT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Minimal identity record mirrored between the primary and backup stores.
///
/// `role` is kept as the raw stored text: the backup file may carry roles
/// written by older builds, and comparisons are always case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub role: String,
    pub username: String,
    pub password: String,
    pub time_created: String,
}

impl Account {
    pub fn new(
        role: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        time_created: Option<String>,
    ) -> Self {
        Self {
            role: role.into(),
            username: username.into(),
            password: password.into(),
            time_created: time_created.unwrap_or_else(Self::timestamp_now),
        }
    }

    pub fn timestamp_now() -> String {
        Local::now().naive_local().format(ACCOUNT_TIME_FORMAT).to_string()
    }

    pub fn is_named(&self, username: &str) -> bool {
        same_username(&self.username, username)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.trim().eq_ignore_ascii_case(role.trim())
    }
}

/// The primary store's view of an account, without a creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryAccount {
    pub role: String,
    pub username: String,
    pub password: String,
}

impl PrimaryAccount {
    pub fn new(
        role: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_named(&self, username: &str) -> bool {
        same_username(&self.username, username)
    }
}

/// Case-insensitive username comparison with full Unicode case folding,
/// so `Ñino` and `ñino` name the same account.
pub fn same_username(a: &str, b: &str) -> bool {
    a == b
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}
