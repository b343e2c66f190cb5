//! SajaruBox MCP server
//!
//! Main entry point for the `sajarubox-mcp` binary.

use std::process::ExitCode;

use clap::Parser;
use sajarubox_common_config::{ConfigError, Environment};
use sajarubox_common_log::LogConfig;
use tracing::{debug, error, warn};

mod cli;
mod commands;
mod settings;

use cli::{Cli, Command};
use settings::Settings;

/// Application exit codes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

impl Exit {
    fn for_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<ConfigError>().is_some() {
            Self::ConfigError
        } else if err.downcast_ref::<sajarubox_server::ServerError>().is_some() {
            Self::IoError
        } else {
            Self::GeneralError
        }
    }
}

fn main() -> ExitCode {
    // Before parsing, so .env can feed env-backed flags.
    let dotenv = std::env::current_dir()
        .map_err(|e| e.to_string())
        .and_then(|dir| Environment::init(dir).map_err(|e| e.to_string()));

    let cli = Cli::parse();

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            let _ = sajarubox_common_log::init(LogConfig::from_env());
            error!("{e:#}");
            return Exit::for_error(&e).into();
        }
    };

    if let Err(e) = sajarubox_common_log::init(settings.log_config(&cli)) {
        eprintln!("{e}");
        return Exit::ConfigError.into();
    }

    match dotenv {
        Ok(env) => debug!(files = ?env.loaded_files(), "environment loaded"),
        Err(e) => warn!("{e}"),
    }

    // One request at a time; no worker threads needed.
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!("failed to create runtime: {e}");
            return Exit::GeneralError.into();
        }
    };

    match runtime.block_on(run(cli.selected_command(), &settings)) {
        Ok(exit) => exit.into(),
        Err(e) => {
            error!("{e:#}");
            Exit::for_error(&e).into()
        }
    }
}

async fn run(command: Command, settings: &Settings) -> anyhow::Result<Exit> {
    debug!(?command, root = %settings.root.display(), "starting");
    match command {
        Command::Serve => commands::serve(settings).await,
        Command::Topics => commands::topics(settings).await,
        Command::Check => commands::check(settings).await,
    }
}
