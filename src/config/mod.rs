//! Configuration management for the Figma adapter
//!
//! The workflow host owns credential storage and refresh; this module only
//! covers the standalone case of reading a token and team id from a local
//! YAML file or the environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Environment variable holding the bearer token
pub const ACCESS_TOKEN_ENV: &str = "FIGMA_ACCESS_TOKEN";

/// Environment variable holding the default team id
pub const TEAM_ID_ENV: &str = "FIGMA_TEAM_ID";

/// Adapter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Figma personal access token or OAuth bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Default team id used when a call does not name one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".figma-adapter").join("config.yaml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Build a configuration from environment variables only
    pub fn from_env() -> Self {
        Config::default().overlay(
            std::env::var(ACCESS_TOKEN_ENV).ok(),
            std::env::var(TEAM_ID_ENV).ok(),
        )
    }

    /// Resolve the effective configuration: the default config file when it
    /// exists, with environment variables taking precedence.
    pub fn resolve() -> Result<Self> {
        let base = match Self::load() {
            Ok(config) => config,
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Config::default(),
            Err(err) => return Err(err),
        };

        Ok(base.overlay(
            std::env::var(ACCESS_TOKEN_ENV).ok(),
            std::env::var(TEAM_ID_ENV).ok(),
        ))
    }

    /// Apply overrides on top of this configuration. `None` leaves the
    /// existing value in place.
    fn overlay(mut self, access_token: Option<String>, team_id: Option<String>) -> Self {
        if access_token.is_some() {
            self.access_token = access_token;
        }
        if team_id.is_some() {
            self.team_id = team_id;
        }
        self
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Validate that required configuration is present
    pub fn validate_auth(&self) -> Result<()> {
        if self.access_token.is_none() {
            return Err(ConfigError::MissingAccessToken.into());
        }
        Ok(())
    }
}
