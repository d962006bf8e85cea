//! Trajectory lookup table and analysis settings

use crate::error::{Result, TrajectoryError};
use crate::rules::ClassifierRules;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "trajlens.json";

/// Extension of SWE-agent trajectory files
pub const TRAJ_EXTENSION: &str = "traj";

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that relative trajectory entries resolve against
    pub base_dir: PathBuf,

    /// Directory receiving detector logs and transcripts
    pub output_dir: PathBuf,

    /// Identifier → trajectory file, or run directory holding `<name>.traj`
    pub trajectories: BTreeMap<String, PathBuf>,

    /// Identifiers analyzed when none are given
    pub analyze: Vec<String>,

    /// Classification tables
    pub rules: ClassifierRules,
}

impl Config {
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("trajectories"),
            output_dir: PathBuf::from("."),
            trajectories: BTreeMap::new(),
            analyze: Vec::new(),
            rules: ClassifierRules::new(),
        }
    }

    /// Read a config file. Relative directories are anchored at the file's
    /// own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TrajectoryError::io(path, e))?;
        let mut config: Config =
            serde_json::from_str(&content).map_err(|e| TrajectoryError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let anchor = path.parent().unwrap_or_else(|| Path::new(""));
        config.base_dir = anchor.join(&config.base_dir);
        config.output_dir = anchor.join(&config.output_dir);

        tracing::debug!(
            path = %path.display(),
            trajectories = config.trajectories.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Locate and load the config: an explicit path, then `./trajlens.json`,
    /// then the user config directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::discover_in(
            explicit,
            Path::new(LOCAL_CONFIG_FILE),
            user_config_path().as_deref(),
        )
    }

    fn discover_in(explicit: Option<&Path>, local: &Path, user: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if local.is_file() {
            return Self::load(local);
        }
        match user {
            Some(user) if user.is_file() => Self::load(user),
            _ => Err(TrajectoryError::NotFound(local.to_path_buf())),
        }
    }

    /// Map an identifier to its trajectory file
    pub fn resolve(&self, id: &str) -> Result<PathBuf> {
        let entry = self
            .trajectories
            .get(id)
            .ok_or_else(|| TrajectoryError::UnknownId(id.to_string()))?;

        let path = self.base_dir.join(entry);
        if path.is_dir() {
            // SWE-agent layout: <run>/<instance>/<instance>.traj
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Ok(path.join(format!("{name}.{TRAJ_EXTENSION}")));
        }
        Ok(path)
    }

    /// Identifiers to analyze: the given ones, or the configured list
    pub fn selected_ids(&self, requested: &[String]) -> Vec<String> {
        if requested.is_empty() {
            self.analyze.clone()
        } else {
            requested.to_vec()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// `<config dir>/trajlens/config.json`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("trajlens").join("config.json"))
}
