//! Trajectory loading, step classification and aggregation

mod aggregate;
mod classify;
mod config;
mod error;
mod loader;
mod rules;
mod types;

pub use aggregate::{
    reproduction_steps, search_steps, tool_hits, tool_usage, StepIndices, ToolUsage,
};
pub use classify::{is_reproduction_step, is_search_step, tools_in_step};
pub use config::{user_config_path, Config, LOCAL_CONFIG_FILE, TRAJ_EXTENSION};
pub use error::{Result, TrajectoryError};
pub use loader::{load_from_path, load_trajectory, parse_trajectory, TRAJECTORY_KEY};
pub use rules::{
    tool_key, ClassifierRules, ReproductionRule, ToolExclusion, CREATED_MARKER,
    MAX_CREATION_NOTICE_CHARS, REPRODUCE_MARKER, SEARCH_KEYWORDS, TOOLS,
};
pub use types::{first_line, Message, Step, StepState, Trajectory};
