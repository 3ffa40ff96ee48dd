use serde::Deserialize;

/// Steps run before every command.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Restore the livelihood catalog the first time a database is opened.
    /// Later runs leave jobs alone; `woms job reset-catalog` forces a reset.
    pub reset_catalog: bool,
    pub seed_sample_data: bool,
    pub pull_accounts: bool,
    pub push_accounts: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            reset_catalog: true,
            seed_sample_data: true,
            pull_accounts: true,
            push_accounts: false,
        }
    }
}
