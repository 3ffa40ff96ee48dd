mod accounts_config;
mod admin_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod startup_config;

pub use accounts_config::AccountsConfig;
pub use admin_config::AdminConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use startup_config::StartupConfig;

const CONFIG_DIR_ENV: &str = "WOMS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".woms";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "woms.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const MAX_MAX_CONNECTIONS: u32 = 64;
const DEFAULT_ACCOUNTS_FILENAME: &str = "accounts.txt";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
