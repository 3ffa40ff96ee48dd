use crate::{ConfigError, ConfigErrorResult, DEFAULT_ACCOUNTS_FILENAME};

use std::path::Path;

use serde::Deserialize;

/// Location of the flat-file credential backup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    pub file: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_ACCOUNTS_FILENAME),
        }
    }
}

impl AccountsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::accounts("accounts.file cannot be empty"));
        }

        if Path::new(&self.file).is_absolute() || self.file.contains("..") {
            return Err(ConfigError::accounts(
                "accounts.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
