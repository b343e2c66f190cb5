//! Configuration file loading and parsing.

use crate::types::SajaruboxConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory holding the configuration inside a root.
pub const CONFIG_DIR: &str = ".sajarubox";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly named file does not exist.
    #[error("config file not found: {}", path.display())]
    NotFound {
        /// Requested file.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read config: {source}")]
    ReadError {
        /// Underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The file is not valid YAML for [`SajaruboxConfig`].
    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError {
        /// One-based line of the error, when known.
        line: Option<usize>,
        /// Parser message.
        message: String,
    },

    /// Values parsed but are not usable.
    #[error("validation error: {message}")]
    ValidationError {
        /// What is wrong.
        message: String,
    },

    /// `${VAR}` referenced an unset variable without a default.
    #[error("environment variable not found: {var}")]
    EnvVarNotFound {
        /// Variable name.
        var: String,
    },
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
    file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader for the given documentation root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            base_path: root.as_ref().to_path_buf(),
            file: None,
        }
    }

    /// Read this file instead of `<root>/.sajarubox/config.yaml`.
    ///
    /// Unlike the default location, an explicit file must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Path the loader reads.
    pub fn config_path(&self) -> PathBuf {
        match &self.file {
            Some(file) => file.clone(),
            None => self.base_path.join(CONFIG_DIR).join(CONFIG_FILE),
        }
    }

    /// Load and validate the configuration.
    pub fn load(&self) -> Result<SajaruboxConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            if self.file.is_some() {
                return Err(ConfigError::NotFound { path: config_path });
            }
            debug!("no config at {:?}, using defaults", config_path);
            return Ok(SajaruboxConfig::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let expanded = expand_env_vars(&contents)?;

        let mut config: SajaruboxConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        validate(&config)?;
        self.resolve_paths(&mut config);
        debug!("loaded config from {:?}", config_path);
        Ok(config)
    }

    /// Anchor relative `root` and `catalog` paths.
    ///
    /// The default location anchors them at the root the loader was created
    /// for; an explicit file anchors them at the file's directory.
    fn resolve_paths(&self, config: &mut SajaruboxConfig) {
        let anchor = match &self.file {
            Some(file) => file.parent().map(Path::to_path_buf).unwrap_or_default(),
            None => self.base_path.clone(),
        };

        for path in [&mut config.root, &mut config.catalog].into_iter().flatten() {
            if path.is_relative() {
                *path = anchor.join(&*path);
            }
        }
    }
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
pub fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| ConfigError::ParseError {
        line: None,
        message: e.to_string(),
    })?;

    let mut result = String::with_capacity(content.len());
    let mut last = 0;

    for cap in re.captures_iter(content) {
        let Some(full) = cap.get(0) else { continue };
        let var_name = &cap[1];
        let default = cap.get(2).map(|m| m.as_str());

        let value = match (std::env::var(var_name), default) {
            (Ok(v), _) => v,
            (Err(_), Some(d)) => d.to_string(),
            (Err(_), None) => {
                return Err(ConfigError::EnvVarNotFound {
                    var: var_name.to_string(),
                })
            }
        };

        result.push_str(&content[last..full.start()]);
        result.push_str(&value);
        last = full.end();
    }

    result.push_str(&content[last..]);
    Ok(result)
}

/// Validate configuration values.
pub fn validate(config: &SajaruboxConfig) -> Result<(), ConfigError> {
    if config.server.name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "server.name must not be empty".to_string(),
        });
    }

    if config.server.version.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "server.version must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.log.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError {
            message: format!("log.level must be one of {}", LOG_LEVELS.join(", ")),
        });
    }

    if !LOG_FORMATS.contains(&config.log.format.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError {
            message: format!("log.format must be one of {}", LOG_FORMATS.join(", ")),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use test_case::test_case;

    fn write_config(root: &Path, yaml: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), yaml).unwrap();
    }

    #[test]
    fn test_load_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config, SajaruboxConfig::default());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = ConfigLoader::new(dir.path()).with_file(&missing).load().unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { path } if path == missing));
    }

    #[test]
    fn test_load_config_from_yaml_file() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
root: docs
server:
  name: sajarubox-dev
log:
  level: debug
  format: compact
catalog: /etc/sajarubox/catalog.yaml
"#,
        );

        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config.root, Some(dir.path().join("docs")));
        assert_eq!(config.server.name, "sajarubox-dev");
        assert_eq!(config.server.version, "1.17.0");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, "compact");
        assert_eq!(config.catalog, Some(PathBuf::from("/etc/sajarubox/catalog.yaml")));
    }

    #[test]
    fn test_explicit_file_anchors_relative_paths() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("conf/server.yaml");
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, "root: ../docs\ncatalog: catalog.yaml\n").unwrap();

        let config = ConfigLoader::new("/unused").with_file(&file).load().unwrap();
        assert_eq!(config.root, Some(dir.path().join("conf/../docs")));
        assert_eq!(config.catalog, Some(dir.path().join("conf/catalog.yaml")));
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("SAJARUBOX_TEST_NAME", "from-env");
        let result = expand_env_vars("name: ${SAJARUBOX_TEST_NAME}-${SAJARUBOX_TEST_UNSET:-x}").unwrap();
        assert_eq!(result, "name: from-env-x");
        std::env::remove_var("SAJARUBOX_TEST_NAME");
    }

    #[test]
    fn test_env_var_missing_error() {
        let err = expand_env_vars("key: ${SAJARUBOX_TEST_MISSING}").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarNotFound { var } if var == "SAJARUBOX_TEST_MISSING"));
    }

    #[test]
    fn test_env_var_expansion_in_config() {
        std::env::set_var("SAJARUBOX_TEST_LEVEL", "warn");
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            "log:\n  level: ${SAJARUBOX_TEST_LEVEL}\n  format: ${SAJARUBOX_TEST_FORMAT:-json}\n",
        );

        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, "json");
        std::env::remove_var("SAJARUBOX_TEST_LEVEL");
    }

    #[test_case("server:\n  name: \"\"\n", "server.name" ; "empty name")]
    #[test_case("server:\n  version: \" \"\n", "server.version" ; "blank version")]
    #[test_case("log:\n  level: loud\n", "log.level" ; "unknown level")]
    #[test_case("log:\n  format: xml\n", "log.format" ; "unknown format")]
    fn test_validation_errors(yaml: &str, field: &str) {
        let dir = tempdir().unwrap();
        write_config(dir.path(), yaml);

        match ConfigLoader::new(dir.path()).load().unwrap_err() {
            ConfigError::ValidationError { message } => assert!(message.contains(field), "{message}"),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_with_line_number() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "server:\n  name: x\n  bad: [unclosed\n");

        match ConfigLoader::new(dir.path()).load().unwrap_err() {
            ConfigError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }
}
