//! Client settings loading.
//!
//! Settings live in an optional YAML file. Every key has a default, so a
//! missing path and an empty file both yield `ClientSettings::default()`.

use std::path::{Path, PathBuf};

use netprov_domain::{ClientSettings, DomainError};
use tokio::fs;
use tracing::debug;

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid YAML for `ClientSettings`.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The settings parsed but are out of range.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Loads client settings from YAML.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository;

impl SettingsRepository {
    /// Creates a new settings repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Loads settings from `path`, or defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or holds
    /// invalid values.
    pub async fn load(&self, path: Option<&Path>) -> Result<ClientSettings, SettingsError> {
        let Some(path) = path else {
            return Ok(ClientSettings::default());
        };

        let content = fs::read_to_string(path)
            .await
            .map_err(|source| SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let settings = Self::parse(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;

        debug!(path = %path.display(), "Loaded client settings");
        Ok(settings)
    }

    /// Parses settings YAML; blank input yields defaults.
    fn parse(content: &str) -> Result<ClientSettings, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(ClientSettings::default());
        }
        serde_yaml::from_str(content)
    }
}
