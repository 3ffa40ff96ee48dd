use woms_accounts::AccountsError;
use woms_config::ConfigError;
use woms_core::CoreError;
use woms_db::DbError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("{source}")]
    Db {
        #[from]
        source: DbError,
    },

    #[error("{source}")]
    Accounts {
        #[from]
        source: AccountsError,
    },

    #[error("{source}")]
    Core {
        #[from]
        source: CoreError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("The database is offline; '{operation}' needs it {location}")]
    Offline {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Sign-in denied for '{username}' {location}")]
    Denied {
        username: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn offline(operation: &'static str) -> Self {
        Self::Offline {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn denied(username: impl Into<String>) -> Self {
        Self::Denied {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for the person at the terminal. Validation failures show the
    /// form message without source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::Core { source } => source.user_message(),
            Self::Accounts {
                source: AccountsError::Validation { source },
            } => source.user_message(),
            Self::Db {
                source: DbError::Core { source },
            } => source.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
