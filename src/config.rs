//! Configuration loading for Jizz
//!
//! Reads the Jackett and Transmission settings from a YAML file
//! (`jizz.yml` in the working directory unless overridden).
//! Every value is read as a plain string, so `password: 1234` stays `"1234"`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "jizz.yml";

/// Config loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't load {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't load {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub jackett: JackettConfig,
    pub transmission: TransmissionConfig,
}

/// Jackett search proxy settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JackettConfig {
    /// Search URL ending in the query parameter name, e.g.
    /// `http://host:9117/api/v2.0/indexers/all/results?apikey=KEY&Query`
    pub endpoint: String,
}

/// Transmission RPC settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransmissionConfig {
    /// `host:port` or a full RPC URL
    pub endpoint: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl TransmissionConfig {
    /// Basic auth credentials, if any were configured
    pub fn credentials(&self) -> Option<(String, String)> {
        if self.username.is_none() && self.password.is_none() {
            return None;
        }
        Some((
            self.username.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        ))
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from YAML text
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
