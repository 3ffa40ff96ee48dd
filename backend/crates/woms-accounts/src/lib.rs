//! Credential handling for WOMS: authentication against the primary store
//! with a flat-file backup, registration, and two-way account sync.

pub mod account_file;
pub mod backup_store;
pub mod error;
pub mod service;
pub mod sync;

pub use backup_store::AccountStore;
pub use error::{AccountsError, Result};
pub use service::{AccountService, AuthOutcome, CredentialSource, RegistrationOutcome};
pub use sync::{pull_from_primary, push_to_primary};
