use woms_core::CoreError;
use woms_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountsError {
    #[error("{source}")]
    Validation {
        #[from]
        source: CoreError,
    },

    #[error("Primary store error: {source} {location}")]
    Primary {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Primary store is offline {location}")]
    PrimaryUnavailable { location: ErrorLocation },

    #[error("Username already taken: {username} {location}")]
    UsernameTaken {
        username: String,
        location: ErrorLocation,
    },
}

impl AccountsError {
    #[track_caller]
    pub fn primary_unavailable() -> Self {
        Self::PrimaryUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AccountsError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Primary {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountsError>;
