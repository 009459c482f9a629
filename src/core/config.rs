// src/core/config.rs

//! # Configuration
//!
//! Help rendering can be tuned per project or per user with a TOML file:
//!
//! ```toml
//! ignored_tags = ["param", "return", "throws"]
//!
//! [[allow_tags]]
//! name = "description"
//!
//! [[allow_tags]]
//! name = "options"
//! align = true
//! ```
//!
//! The first file found wins: an explicit path, then `./annocmd.toml`, then
//! `annocmd/config.toml` under the user config directory. With no file the
//! built-in allow-list and ignore set are used.

use crate::{
    constants::{
        CONFIG_DIR_NAME, DEFAULT_IGNORED_TAGS, LOCAL_CONFIG_FILENAME, USER_CONFIG_FILENAME,
    },
    models::{AllowList, DefinitionConfig},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings that shape how comment tags become help text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HelpConfig {
    #[serde(default)]
    pub allow_tags: AllowList,
    #[serde(default = "default_ignored_tags")]
    pub ignored_tags: Vec<String>,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            allow_tags: AllowList::default(),
            ignored_tags: default_ignored_tags(),
        }
    }
}

fn default_ignored_tags() -> Vec<String> {
    DEFAULT_IGNORED_TAGS.iter().map(|s| s.to_string()).collect()
}

/// `annocmd/config.toml` under the platform config directory, if there is one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(USER_CONFIG_FILENAME))
}

/// Picks the help config file to use, following the lookup order above.
///
/// An explicit path is returned even if it does not exist, so that reading it
/// reports the mistake instead of silently falling back.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    cwd: &Path,
    user_path: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = cwd.join(LOCAL_CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }
    user_path.filter(|p| p.is_file())
}

/// Loads the help configuration, falling back to the defaults when no file is found.
pub fn load_help_config(explicit: Option<&Path>) -> Result<HelpConfig, ConfigError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match resolve_config_path(explicit, &cwd, user_config_path()) {
        Some(path) => {
            log::debug!("Loading help config from '{}'.", path.display());
            read_toml(&path)
        }
        None => {
            log::debug!("No help config found, using defaults.");
            Ok(HelpConfig::default())
        }
    }
}

/// Reads a command definition (`[[arguments]]` / `[[options]]` tables).
pub fn load_definition_config(path: &Path) -> Result<DefinitionConfig, ConfigError> {
    log::debug!("Loading definition from '{}'.", path.display());
    read_toml(path)
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
