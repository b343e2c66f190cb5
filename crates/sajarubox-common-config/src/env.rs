//! Environment variable handling.

use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A `.env` file exists but could not be parsed.
    #[error("failed to load {file}: {source}")]
    DotenvError {
        /// File name relative to the loaded directory.
        file: String,
        /// Parser error.
        #[source]
        source: dotenvy::Error,
    },
}

/// `.env` files read by [`Environment::init`], in load order.
pub const DOTENV_FILES: &[&str] = &[".env", ".env.local"];

/// Environment configuration.
pub struct Environment {
    loaded: Vec<String>,
}

impl Environment {
    /// Load `.env` then `.env.local` from a directory.
    ///
    /// Variables already set in the process are never overridden, and
    /// missing files are skipped. A file that exists but does not parse is
    /// an error.
    pub fn init(dir: impl AsRef<Path>) -> Result<Self, EnvError> {
        let dir = dir.as_ref();
        let mut loaded = Vec::new();

        for name in DOTENV_FILES {
            match dotenvy::from_path(dir.join(name)) {
                Ok(()) => {
                    debug!("loaded {}", name);
                    loaded.push((*name).to_string());
                }
                Err(e) if e.not_found() => {}
                Err(source) => {
                    return Err(EnvError::DotenvError {
                        file: (*name).to_string(),
                        source,
                    })
                }
            }
        }

        Ok(Self { loaded })
    }

    /// Files that were found and loaded.
    pub fn loaded_files(&self) -> &[String] {
        &self.loaded
    }
}
