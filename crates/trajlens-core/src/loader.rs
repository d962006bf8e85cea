//! Trajectory loading from `.traj` JSON documents

use crate::config::Config;
use crate::error::{Result, TrajectoryError};
use crate::types::{Step, Trajectory};
use std::path::Path;

/// Top-level key holding the step list
pub const TRAJECTORY_KEY: &str = "trajectory";

/// Resolve `id` through the lookup table and load it
pub fn load_trajectory(config: &Config, id: &str) -> Result<Trajectory> {
    let path = config.resolve(id)?;
    load_from_path(&path)
}

/// Load a trajectory document from disk
pub fn load_from_path(path: &Path) -> Result<Trajectory> {
    let content = std::fs::read_to_string(path).map_err(|e| TrajectoryError::io(path, e))?;
    let trajectory =
        parse_trajectory(&content).map_err(|reason| TrajectoryError::malformed(path, reason))?;
    tracing::debug!(path = %path.display(), steps = trajectory.len(), "loaded trajectory");
    Ok(trajectory)
}

/// Parse the step list out of a trajectory document
pub fn parse_trajectory(content: &str) -> std::result::Result<Trajectory, String> {
    let mut doc: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

    let steps = doc
        .get_mut(TRAJECTORY_KEY)
        .map(serde_json::Value::take)
        .ok_or_else(|| format!("missing top-level key `{TRAJECTORY_KEY}`"))?;

    let steps: Vec<Step> =
        serde_json::from_value(steps).map_err(|e| format!("invalid step list: {e}"))?;

    Ok(Trajectory::new(steps))
}
