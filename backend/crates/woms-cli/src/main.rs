//! woms - Work Opportunity Management System CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the bootstrap admin, password taken from the environment
//! WOMS_PASSWORD=admin123 woms account login --role admin --username admin
//!
//! # Approve an application and book its interview
//! woms application approve 3 --pretty
//!
//! # Reconcile the backup file with the database
//! woms account sync push
//! ```

use woms_cli::logger::{self, LogTarget};
use woms_cli::{Cli, CliError, Output, startup};
use woms_config::Config;

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let target = LogTarget::new(log_file, config.logging.colored);
    if let Err(e) = logger::initialize(config.logging.level, target) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let app = match startup::bootstrap(&config, Local::now().naive_local()).await {
        Ok(app) => app,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let result = app.execute(cli.command, Local::now().naive_local()).await;
    let code = report(result, cli.pretty);
    app.shutdown().await;
    code
}

fn load_config() -> Result<Config, CliError> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

fn report(result: Result<Output, CliError>, pretty: bool) -> ExitCode {
    match result {
        Ok(Output::Text(text)) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Output::Json(value)) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("Command failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
