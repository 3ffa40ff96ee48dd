use woms_core::Role;

use clap::{Subcommand, ValueEnum};

pub const PASSWORD_ENV: &str = "WOMS_PASSWORD";
pub const CONFIRM_PASSWORD_ENV: &str = "WOMS_CONFIRM_PASSWORD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Admin,
    Applicant,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::Admin,
            RoleArg::Applicant => Role::Applicant,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Sign in against the database, falling back to the backup file
    Login {
        #[arg(long, value_enum)]
        role: RoleArg,

        #[arg(long)]
        username: String,

        /// Read from WOMS_PASSWORD when omitted
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: String,
    },

    /// Register a new applicant
    Register {
        #[arg(long)]
        username: String,

        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: String,

        #[arg(long, env = CONFIRM_PASSWORD_ENV, hide_env_values = true)]
        confirm_password: String,

        /// Full name
        #[arg(long)]
        name: String,

        /// Age (18-60)
        #[arg(long)]
        age: String,

        /// Mobile number, 09 followed by 9 digits
        #[arg(long)]
        phone: String,
    },

    /// List accounts held in the backup file
    List,

    /// Reconcile the backup file with the database
    Sync {
        #[command(subcommand)]
        direction: SyncDirection,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Copy database accounts into the backup file
    Pull,
    /// Create database accounts for backup-only usernames
    Push,
}
