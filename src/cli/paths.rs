//! Default paths and persistent configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::profile::ProfileKind;

/// File name of the dictionary looked for in the configuration directory.
pub const DEFAULT_DICT_FILE: &str = "cmudict.dict";

/// Get the configuration directory for poetics
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("poetics"))
}

/// Dictionary used when neither the command line nor the config names one
pub fn default_dict_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(DEFAULT_DICT_FILE))
}

/// Get the default user config path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Default dictionary path (if set by user)
    pub dict_path: Option<PathBuf>,
    /// Default language profile
    pub profile: Option<ProfileKind>,
    /// Verbose output by default
    pub verbose: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from custom path; a missing file yields defaults
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, cli: &PersistentConfig) -> Self {
        Self {
            dict_path: cli.dict_path.clone().or_else(|| self.dict_path.clone()),
            profile: cli.profile.or(self.profile),
            verbose: cli.verbose.or(self.verbose),
        }
    }
}
