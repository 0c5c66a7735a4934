//! Configuration for pathfind (stored in ~/.config/pathfind/config.toml)
//!
//! Every setting has a default, so a missing config file is not an error.
//! Command-line flags take precedence over anything loaded here.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PathfindError, Result};
use crate::format::OutputFormat;

const CONFIG_DIR: &str = "pathfind";
const CONFIG_FILE: &str = "config.toml";
/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV_VAR: &str = "PATHFIND_CONFIG_DIR";

/// In-memory graph representation used for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Adjacency map (default)
    #[default]
    Map,
    /// Square adjacency matrix
    Matrix,
}

impl FromStr for Representation {
    type Err = PathfindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "map" => Ok(Representation::Map),
            "matrix" => Ok(Representation::Matrix),
            other => Err(PathfindError::unsupported("representation", other, "map, matrix")),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Map => write!(f, "map"),
            Representation::Matrix => write!(f, "matrix"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Default graph representation
    #[serde(default)]
    pub representation: Representation,

    /// Default log filter (e.g. "debug" or "pathfind_core=trace")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Location of the user config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PathfindError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathfindError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), otherwise the default path
    /// if present, otherwise defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "config_dir_unavailable");
                return Ok(Self::default());
            }
        };

        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathfindError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PathfindError::io_operation("create", parent.display(), e))?;
        }
        fs::write(path, content)
            .map_err(|e| PathfindError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}
