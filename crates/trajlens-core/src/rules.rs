//! Declarative rule tables driving step classification

use serde::{Deserialize, Serialize};

/// Confirmation text an editor tool prints after writing a file
pub const CREATED_MARKER: &str = "created successfully";

/// Case-insensitive marker for reproduction scripts
pub const REPRODUCE_MARKER: &str = "reproduce";

/// Case-folded observations at or above this length are not creation notices
pub const MAX_CREATION_NOTICE_CHARS: usize = 200;

/// Search/navigation keywords matched against the command line.
/// A trailing space requires an argument after the command.
pub const SEARCH_KEYWORDS: &[&str] = &[
    "find_file",
    "search_file",
    "search_dir",
    "grep ",
    "cat ",
    "ls ",
    "cd ",
];

/// Known tools, in reporting order
pub const TOOLS: &[&str] = &[
    // editor
    "str_replace_editor",
    "filemap ",
    "exit_forfeit",
    "view_image ",
    "submit",
    // navigation
    "find_file ",
    "goto ",
    "open ",
    "create ",
    "scroll_up",
    "scroll_down",
    "edit ",
    "insert ",
    "search_dir ",
    "search_file ",
    "end_of_edit",
    // terminal
    "grep ",
    "ls ",
    "cd ",
    "find ",
    "python ",
    // no-op
    "do_nothing",
];

/// Rule for spotting a newly created reproduction script in an observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReproductionRule {
    pub created_marker: String,
    pub reproduce_marker: String,
    pub max_observation_chars: usize,
}

impl Default for ReproductionRule {
    fn default() -> Self {
        Self {
            created_marker: CREATED_MARKER.to_string(),
            reproduce_marker: REPRODUCE_MARKER.to_string(),
            max_observation_chars: MAX_CREATION_NOTICE_CHARS,
        }
    }
}

/// Suppresses `tool` on a line that also contains `unless_with`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolExclusion {
    pub tool: String,
    pub unless_with: String,
}

impl ToolExclusion {
    pub fn new(tool: impl Into<String>, unless_with: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            unless_with: unless_with.into(),
        }
    }

    /// `create` is an option of the editor, not the standalone tool
    pub fn editor_create() -> Self {
        Self::new("create ", "str_replace_editor ")
    }

    pub fn suppresses(&self, tool: &str, line: &str) -> bool {
        self.tool == tool && line.contains(&self.unless_with)
    }
}

/// All classification tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    pub reproduction: ReproductionRule,
    pub search_keywords: Vec<String>,
    pub tools: Vec<String>,
    pub exclusions: Vec<ToolExclusion>,
}

impl ClassifierRules {
    pub fn new() -> Self {
        Self {
            reproduction: ReproductionRule::default(),
            search_keywords: SEARCH_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            tools: TOOLS.iter().map(|s| s.to_string()).collect(),
            exclusions: vec![ToolExclusion::editor_create()],
        }
    }

    /// Whether any exclusion drops `tool` for this command line
    pub fn is_excluded(&self, tool: &str, line: &str) -> bool {
        self.exclusions.iter().any(|ex| ex.suppresses(tool, line))
    }
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Name a tool is reported under
pub fn tool_key(tool: &str) -> &str {
    tool.trim()
}
