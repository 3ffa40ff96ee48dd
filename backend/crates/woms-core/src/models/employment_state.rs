use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentState {
    #[default]
    Employed,
    Terminated,
    Resigned,
}

impl EmploymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "EMPLOYED",
            Self::Terminated => "TERMINATED",
            Self::Resigned => "RESIGNED",
        }
    }
}

impl fmt::Display for EmploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentState {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EMPLOYED" => Ok(Self::Employed),
            "TERMINATED" => Ok(Self::Terminated),
            "RESIGNED" => Ok(Self::Resigned),
            _ => Err(CoreError::InvalidEmploymentState {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
