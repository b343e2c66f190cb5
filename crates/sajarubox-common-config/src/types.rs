//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name reported to clients during the handshake.
pub const DEFAULT_SERVER_NAME: &str = "sajarubox-mcp";

/// Version reported to clients during the handshake.
pub const DEFAULT_SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SajaruboxConfig {
    /// Documentation root. Relative paths are resolved against the
    /// directory the configuration was loaded for.
    pub root: Option<PathBuf>,
    /// Server identity.
    pub server: ServerConfig,
    /// Logging settings.
    pub log: LogSettings,
    /// Catalog YAML replacing the built-in resource and topic tables.
    ///
    /// The override drives lookups and `check` only. Tool descriptions
    /// advertised by `tools/list`, including the topic keys named in
    /// `get_context`, stay the hand-written built-in text.
    pub catalog: Option<PathBuf>,
}

/// Server identity reported by `initialize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `serverInfo.name`.
    pub name: String,
    /// `serverInfo.version`.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_SERVER_VERSION.to_string(),
        }
    }
}

/// Logging settings; environment variables override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
    /// `pretty`, `compact` or `json`.
    pub format: String,
    /// Extra log file.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}
