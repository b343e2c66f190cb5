//! Resolved runtime settings.

use std::path::PathBuf;

use anyhow::Context;
use sajarubox_catalog::Catalog;
use sajarubox_common_config::{ConfigLoader, SajaruboxConfig};
use sajarubox_common_log::{LogConfig, LogFormat, LogLevel};
use sajarubox_server::ServerInfo;
use sajarubox_tools::ToolContext;

use crate::cli::Cli;

/// Everything a command needs, after flags, environment and config file
/// have been merged.
#[derive(Debug)]
pub struct Settings {
    pub root: PathBuf,
    pub config: SajaruboxConfig,
}

impl Settings {
    /// Resolve settings.
    ///
    /// The configuration is looked up under `--root` (or the current
    /// directory); the root itself comes from `--root`, then the config
    /// `root` field, then the current directory.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        let base = cli.root.clone().unwrap_or_else(|| cwd.clone());

        let mut loader = ConfigLoader::new(&base);
        if let Some(file) = &cli.config {
            loader = loader.with_file(file);
        }
        let config = loader.load()?;

        let root = cli
            .root
            .clone()
            .or_else(|| config.root.clone())
            .unwrap_or(cwd);

        Ok(Self { root, config })
    }

    /// Logging config: file settings, then environment, then CLI flags.
    pub fn log_config(&self, cli: &Cli) -> LogConfig {
        let log = &self.config.log;
        let mut config = LogConfig::default()
            .level(LogLevel::parse(&log.level).unwrap_or_default())
            .format(LogFormat::parse(&log.format));
        if let Some(file) = &log.file {
            config = config.file(file);
        }

        let mut config = config.with_env();
        if let Some(level) = cli.level_override() {
            config.level = level;
        }
        config
    }

    /// Identity reported by `initialize`.
    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: self.config.server.name.clone(),
            version: self.config.server.version.clone(),
        }
    }

    /// Tool context over the root, with the configured catalog.
    pub fn tool_context(&self) -> anyhow::Result<ToolContext> {
        match &self.config.catalog {
            Some(path) => {
                let catalog = Catalog::load(path)
                    .with_context(|| format!("cannot load catalog {}", path.display()))?;
                Ok(ToolContext::with_catalog(&self.root, catalog))
            }
            None => Ok(ToolContext::new(&self.root)),
        }
    }
}
