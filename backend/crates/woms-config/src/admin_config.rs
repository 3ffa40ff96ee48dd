use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

use serde::Deserialize;

/// Bootstrap administrator inserted at startup when missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: String::from(DEFAULT_ADMIN_USERNAME),
            password: String::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

impl AdminConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::admin("admin.username cannot be empty"));
        }
        if self.username.contains(',') {
            return Err(ConfigError::admin("admin.username cannot contain ','"));
        }
        if self.password.is_empty() {
            return Err(ConfigError::admin("admin.password cannot be empty"));
        }
        Ok(())
    }
}
