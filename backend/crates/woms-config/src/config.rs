use crate::{
    AccountsConfig, AdminConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, StartupConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub accounts: AccountsConfig,
    pub admin: AdminConfig,
    pub startup: StartupConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for WOMS_CONFIG_DIR env var, else use ./.woms/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply WOMS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: WOMS_CONFIG_DIR env var > ./.woms/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.accounts.validate()?;
        self.admin.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn accounts_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.accounts.file))
    }

    /// None when logging to stderr.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
            None => Ok(None),
        }
    }

    /// Log configuration summary (never logs passwords).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!("  accounts: {}", self.accounts.file);
        info!("  admin: {}", self.admin.username);
        info!(
            "  startup: reset_catalog={}, seed={}, pull={}, push={}",
            self.startup.reset_catalog,
            self.startup.seed_sample_data,
            self.startup.pull_accounts,
            self.startup.push_accounts
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("WOMS_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "WOMS_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Accounts
        Self::apply_env_string("WOMS_ACCOUNTS_FILE", &mut self.accounts.file);

        // Admin
        Self::apply_env_string("WOMS_ADMIN_USERNAME", &mut self.admin.username);
        Self::apply_env_string("WOMS_ADMIN_PASSWORD", &mut self.admin.password);

        // Startup
        Self::apply_env_bool("WOMS_STARTUP_RESET_CATALOG", &mut self.startup.reset_catalog);
        Self::apply_env_bool(
            "WOMS_STARTUP_SEED_SAMPLE_DATA",
            &mut self.startup.seed_sample_data,
        );
        Self::apply_env_bool("WOMS_STARTUP_PULL_ACCOUNTS", &mut self.startup.pull_accounts);
        Self::apply_env_bool("WOMS_STARTUP_PUSH_ACCOUNTS", &mut self.startup.push_accounts);

        // Logging
        Self::apply_env_parse("WOMS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("WOMS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("WOMS_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
