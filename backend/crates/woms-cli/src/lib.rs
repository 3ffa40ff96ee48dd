//! woms-cli library
//!
//! Command definitions, startup bootstrap and command handlers, exported for
//! the binary and for tests.

pub mod account_commands;
pub mod app;
pub mod applicant_commands;
pub mod application_commands;
pub mod attendance_commands;
pub mod cli;
pub mod commands;
pub mod employment_commands;
pub mod error;
pub mod household_commands;
pub mod interview_commands;
pub mod job_commands;
pub mod logger;
pub mod need_commands;
pub mod report_commands;
pub mod resource_commands;
pub mod simulation_commands;
pub mod skill_commands;
pub mod startup;
pub mod training_commands;

#[cfg(test)]
mod tests;

pub use app::{App, Output};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
