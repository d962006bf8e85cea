//! Output file locations

use std::path::PathBuf;

pub const REPRODUCTION_LOG: &str = "locate_reproduction_code.log";
pub const SEARCH_LOG: &str = "locate_search.log";
pub const TOOL_USAGE_LOG: &str = "locate_tool_use.log";

/// Resolves output paths under a single directory
#[derive(Debug, Clone)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Log for reproduction-code findings
    pub fn reproduction_log(&self) -> PathBuf {
        self.root.join(REPRODUCTION_LOG)
    }

    /// Log for search-action findings
    pub fn search_log(&self) -> PathBuf {
        self.root.join(SEARCH_LOG)
    }

    /// Log for tool-usage counts
    pub fn tool_usage_log(&self) -> PathBuf {
        self.root.join(TOOL_USAGE_LOG)
    }

    /// Pretty transcript for one trajectory
    pub fn transcript(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}_pretty.txt"))
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::new(".")
    }
}
