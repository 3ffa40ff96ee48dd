use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.database.path.as_str(), eq("woms.db"));
    assert_that!(config.database.max_connections, eq(crate::DEFAULT_MAX_CONNECTIONS));
    assert_that!(config.accounts.file.as_str(), eq("accounts.txt"));
    assert_that!(config.admin.username.as_str(), eq("admin"));
    assert_that!(config.startup.reset_catalog, eq(true));
    assert_that!(config.startup.pull_accounts, eq(true));
    assert_that!(config.startup.push_accounts, eq(false));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".woms");
    let _guard = EnvGuard::set("WOMS_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [database]
              path = "data/records.db"
              max_connections = 8

              [accounts]
              file = "backup.txt"

              [startup]
              seed_sample_data = false
              push_accounts = true

              [logging]
              level = "debug"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path.as_str(), eq("data/records.db"));
    assert_that!(config.database.max_connections, eq(8));
    assert_that!(config.accounts.file.as_str(), eq("backup.txt"));
    assert_that!(config.startup.seed_sample_data, eq(false));
    assert_that!(config.startup.push_accounts, eq(true));
    assert_that!(config.startup.pull_accounts, eq(true));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[database\npath = 3").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(crate::ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[database]\npath = \"a.db\"").unwrap();
    let _path = EnvGuard::set("WOMS_DATABASE_PATH", "b.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path.as_str(), eq("b.db"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("WOMS_DATABASE_MAX_CONNECTIONS", "3");
    let _file = EnvGuard::set("WOMS_ACCOUNTS_FILE", "mirror.txt");
    let _push = EnvGuard::set("WOMS_STARTUP_PUSH_ACCOUNTS", "1");
    let _pull = EnvGuard::set("WOMS_STARTUP_PULL_ACCOUNTS", "false");
    let _colored = EnvGuard::set("WOMS_LOG_COLORED", "false");
    let _log_file = EnvGuard::set("WOMS_LOG_FILE", "woms.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.max_connections, eq(3));
    assert_that!(config.accounts.file.as_str(), eq("mirror.txt"));
    assert_that!(config.startup.push_accounts, eq(true));
    assert_that!(config.startup.pull_accounts, eq(false));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("woms.log")));
}

#[test]
#[serial]
fn given_unparseable_numeric_env_when_load_then_value_is_kept() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("WOMS_DATABASE_MAX_CONNECTIONS", "many");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.max_connections, eq(crate::DEFAULT_MAX_CONNECTIONS));
}

#[test]
#[serial]
fn given_config_dir_when_resolving_paths_then_paths_are_under_it() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let db = config.database_path().unwrap();
    let accounts = config.accounts_path().unwrap();
    let log_file = config.log_file_path().unwrap();

    // Then
    assert_that!(db, eq(&temp.path().join("woms.db")));
    assert_that!(accounts, eq(&temp.path().join("accounts.txt")));
    assert_that!(log_file, none());
}
