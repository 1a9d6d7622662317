//! TOML configuration for the `taxshare` command.
//!
//! ```toml
//! # taxshare.toml
//! data_dir = "data/2024"
//! default_filing_status = "married"
//!
//! [logging]
//! level = "debug"
//! file = "taxshare.log"
//! console = false
//! ```
//!
//! Every key is optional. Relative paths are resolved against the directory
//! holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use taxshare_core::FilingStatus;
use thiserror::Error;

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Reference data directory; the bundled snapshot is used when unset.
    pub data_dir: Option<PathBuf>,

    pub default_filing_status: Option<FilingStatus>,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `taxshare_core=debug`.
    pub level: Option<String>,

    /// Log file, opened in append mode.
    pub file: Option<PathBuf>,

    /// Whether log records are also printed to stderr.
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            console: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;

        Ok(match path.parent() {
            Some(base) => config.relative_to(base),
            None => config,
        })
    }

    /// Rebases relative paths onto `base`.
    fn relative_to(
        mut self,
        base: &Path,
    ) -> Self {
        let rebase = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.data_dir = self.data_dir.map(rebase);
        self.logging.file = self.logging.file.map(rebase);
        self
    }

    /// Data directory: command line first, then the config file.
    pub fn data_dir(
        &self,
        cli: Option<&Path>,
    ) -> Option<PathBuf> {
        cli.map(Path::to_path_buf).or_else(|| self.data_dir.clone())
    }

    /// Filing status: command line first, then the config file, then single.
    pub fn filing_status(
        &self,
        cli: Option<FilingStatus>,
    ) -> FilingStatus {
        cli.or(self.default_filing_status).unwrap_or_default()
    }
}
