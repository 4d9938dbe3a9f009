//! Configuration module for transync
//!
//! Project settings live in `transync.toml` next to the translation sources.
//! Every key can be overridden with a `TRANSYNC_`-prefixed environment
//! variable, so CI can inject the API key without writing it to disk.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::discovery::MAX_DEPTH;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "transync.toml";

/// Default translation service endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.simplelocalize.io";

const ENV_PREFIX: &str = "TRANSYNC";

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    /// Display paths as discovered
    #[default]
    Relative,
    /// Display absolute paths
    Absolute,
}

/// Project configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// API key for the translation service
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the translation service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Template for files to upload, e.g. `locales/{language}/{namespace}.json`
    #[serde(default)]
    pub upload_path: Option<String>,

    /// Format of uploaded files
    #[serde(default)]
    pub upload_format: Option<String>,

    /// Template for downloaded files
    #[serde(default)]
    pub download_path: Option<String>,

    /// Format of downloaded files
    #[serde(default)]
    pub download_format: Option<String>,

    /// Restrict transfers to one language
    #[serde(default)]
    pub language_key: Option<String>,

    /// Restrict transfers to one namespace
    #[serde(default)]
    pub namespace: Option<String>,

    /// Extra options passed through to the service
    #[serde(default)]
    pub options: Vec<String>,

    /// Levels walked below the base directory during discovery
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for displaying paths
    #[serde(default)]
    pub path_format: PathFormat,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_max_depth() -> usize {
    MAX_DEPTH
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            upload_path: None,
            upload_format: None,
            download_path: None,
            download_format: None,
            language_key: None,
            namespace: None,
            options: Vec::new(),
            max_depth: MAX_DEPTH,
            quiet: false,
            path_format: PathFormat::default(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration from `path` (or `transync.toml`), layered with environment overrides.
    ///
    /// A missing file is not an error; defaults and environment values apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let config_path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);

        if config_path.exists() {
            tracing::info!(path = %config_path.display(), "loaded configuration file");
        } else if explicit {
            return Err(ConfigError::Message(format!(
                "Configuration file '{}' does not exist",
                config_path.display()
            )));
        } else {
            tracing::info!(path = %config_path.display(), "no configuration file, using defaults");
        }

        let settings = Config::builder()
            .add_source(
                File::from(config_path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Parse configuration from TOML text, without environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not valid TOML or a value has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Check the keys needed to plan uploads
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first missing key.
    pub fn validate_for_upload(&self) -> Result<(), ConfigError> {
        require(self.upload_path.as_ref(), "upload_path")?;
        require(self.upload_format.as_ref(), "upload_format")?;
        Ok(())
    }

    /// Check the keys needed to plan downloads
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first missing key.
    pub fn validate_for_download(&self) -> Result<(), ConfigError> {
        require(self.download_path.as_ref(), "download_path")?;
        require(self.download_format.as_ref(), "download_format")?;
        Ok(())
    }

    /// Copy with the API key masked, for display
    #[must_use]
    pub fn masked(&self) -> Self {
        let mut copy = self.clone();
        copy.api_key = self.api_key.as_deref().map(mask);
        copy
    }

    /// Render as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("options")
}

fn require(value: Option<&String>, key: &str) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ConfigError::Message(format!(
            "Missing required configuration key '{key}'"
        ))),
    }
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}
