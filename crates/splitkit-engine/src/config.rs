//! Engine Configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;
use splitkit_security::{Sanitizer, SanitizerConfig};

use crate::Combiner;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Engine configuration options
///
/// The auto-link filenames (`style.css`, `script.js`) are fixed and not
/// part of it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Run the input sanitizer before combining
    pub sanitize: bool,

    /// Name offered when saving a combined document
    pub download_filename: String,

    /// Sanitizer policy
    pub sanitizer: SanitizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            sanitize: true,
            download_filename: "index.html".to_string(),
            sanitizer: SanitizerConfig::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Combiner honouring `sanitize` and the sanitizer policy
    pub fn combiner(&self) -> Combiner {
        if self.sanitize {
            Combiner::with_sanitizer(Sanitizer::new(self.sanitizer.clone()))
        } else {
            Combiner::without_sanitizer()
        }
    }
}
