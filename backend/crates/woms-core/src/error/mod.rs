use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid application status: {value} {location}")]
    InvalidApplicationStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid interview status: {value} {location}")]
    InvalidInterviewStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid employment state: {value} {location}")]
    InvalidEmploymentState {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Validation failure tied to a single form field.
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message shown to the person filling the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidRole { value, .. } => format!("Unknown role: {value}"),
            Self::InvalidApplicationStatus { value, .. } => {
                format!("Unknown application status: {value}")
            }
            Self::InvalidInterviewStatus { value, .. } => {
                format!("Unknown interview status: {value}")
            }
            Self::InvalidEmploymentState { value, .. } => {
                format!("Unknown employment state: {value}")
            }
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
