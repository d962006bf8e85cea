//! Full analysis report for following an agent's debugging session

use crate::text::truncate_chars;
use chrono::NaiveDateTime;
use std::path::Path;
use trajlens_core::{Message, Step, Trajectory};

pub const SYSTEM_PROMPT_BUDGET: usize = 5000;
pub const PROBLEM_STATEMENT_BUDGET: usize = 3000;
pub const OBSERVATION_BUDGET: usize = 2000;
pub const RESPONSE_BUDGET: usize = 1000;

const WIDTH: usize = 100;

/// Report over one trajectory, rendered entirely in memory
pub struct AnalysisReport<'a> {
    trajectory: &'a Trajectory,
    source_name: String,
    generated: NaiveDateTime,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(
        trajectory: &'a Trajectory,
        source_name: impl Into<String>,
        generated: NaiveDateTime,
    ) -> Self {
        Self {
            trajectory,
            source_name: source_name.into(),
            generated,
        }
    }

    /// Report titled with the file name of `path`
    pub fn for_path(trajectory: &'a Trajectory, path: &Path, generated: NaiveDateTime) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(trajectory, name, generated)
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        self.push_title(&mut lines);
        self.push_initial_context(&mut lines);
        let total = self.trajectory.len();
        for (i, step) in self.trajectory.iter() {
            push_step(&mut lines, i + 1, total, step);
        }
        self.push_summary(&mut lines);
        lines.join("\n")
    }

    fn push_title(&self, lines: &mut Vec<String>) {
        lines.push(rule('='));
        lines.push(format!("TRAJECTORY ANALYSIS: {}", self.source_name));
        lines.push(rule('='));
        lines.push(format!("Total Steps: {}", self.trajectory.len()));
        lines.push(format!(
            "Generated: {}",
            self.generated.format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(rule('='));
        lines.push(String::new());
    }

    fn push_initial_context(&self, lines: &mut Vec<String>) {
        let messages = self.trajectory.initial_messages();
        if messages.is_empty() {
            return;
        }

        lines.push(String::new());
        lines.push(format!("╔{}╗", "═".repeat(WIDTH - 2)));
        lines.push(format!("║{}INITIAL CONTEXT{}║", " ".repeat(35), " ".repeat(48)));
        lines.push(format!("╚{}╝", "═".repeat(WIDTH - 2)));
        lines.push(String::new());

        if let Some(msg) = first_of_type(messages, "system_prompt") {
            push_box(lines, &format!("│ 🔧 SYSTEM PROMPT{}│", " ".repeat(80)));
            push_budgeted_content(lines, &msg.text(), SYSTEM_PROMPT_BUDGET);
        }

        if let Some(msg) = first_of_type(messages, "observation") {
            push_box(
                lines,
                &format!(
                    "│ 📋 PROBLEM DESCRIPTION / INITIAL OBSERVATION{}│",
                    " ".repeat(52)
                ),
            );
            push_budgeted_content(lines, &msg.text(), PROBLEM_STATEMENT_BUDGET);
        }

        lines.push(rule('='));
        lines.push(String::new());
    }

    fn push_summary(&self, lines: &mut Vec<String>) {
        lines.push(String::new());
        lines.push(rule('='));
        lines.push("TRAJECTORY SUMMARY".to_string());
        lines.push(rule('='));
        lines.push(format!("Total Steps Executed: {}", self.trajectory.len()));

        lines.push(String::new());
        lines.push("Action Type Distribution:".to_string());
        for (command, count) in action_distribution(self.trajectory) {
            lines.push(format!("  {command}: {count}"));
        }

        lines.push(String::new());
        lines.push(rule('='));
        lines.push("END OF TRAJECTORY".to_string());
        lines.push(rule('='));
    }
}

fn push_step(lines: &mut Vec<String>, number: usize, total: usize, step: &Step) {
    lines.push(String::new());
    lines.push(rule('█'));
    lines.push(format!("STEP {number} of {total}"));
    lines.push(rule('█'));

    lines.push(String::new());
    lines.push("💭 AGENT'S THOUGHT PROCESS:".to_string());
    lines.push(rule('-'));
    lines.push(step.thought.clone());
    lines.push(String::new());

    let action_lines: Vec<&str> = step.action.split('\n').collect();
    lines.push("⚡ ACTION TAKEN:".to_string());
    lines.push(rule('-'));
    lines.push(format!("Command: {}", step.command_line()));
    if action_lines.len() > 1 {
        lines.push(String::new());
        lines.push("Full Action:".to_string());
        for line in &action_lines {
            lines.push(format!("  {line}"));
        }
    }
    lines.push(String::new());

    lines.push("👁️  OBSERVATION/RESULT:".to_string());
    lines.push(rule('-'));
    match truncate_chars(&step.observation, OBSERVATION_BUDGET) {
        (kept, Some(original)) => {
            lines.push(kept.to_string());
            lines.push(String::new());
            lines.push(format!(
                "... [Output truncated - {original} total characters] ..."
            ));
        }
        (kept, None) => lines.push(kept.to_string()),
    }
    lines.push(String::new());

    if let Some(response) = step
        .response
        .as_deref()
        .filter(|r| !r.is_empty() && *r != step.thought)
    {
        lines.push("📝 AGENT'S RESPONSE:".to_string());
        lines.push(rule('-'));
        match truncate_chars(response, RESPONSE_BUDGET) {
            (kept, Some(original)) => {
                lines.push(kept.to_string());
                lines.push(format!(
                    "... [Response truncated - {original} total characters] ..."
                ));
            }
            (kept, None) => lines.push(kept.to_string()),
        }
        lines.push(String::new());
    }

    if let Some(seconds) = step.execution_time.filter(|t| *t != 0.0) {
        lines.push(format!("⏱️  Execution Time: {seconds:.4} seconds"));
        lines.push(String::new());
    }

    if let Some(dir) = step.working_dir().filter(|d| !d.is_empty()) {
        lines.push(format!("📁 Working Directory: {dir}"));
        lines.push(String::new());
    }
}

/// First whitespace-delimited word of each action, by descending count.
/// Ties keep first-seen order; an empty action counts as `unknown`.
pub fn action_distribution(trajectory: &Trajectory) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for (_, step) in trajectory.iter() {
        let command = step.action.split_whitespace().next().unwrap_or("unknown");
        match counts.iter_mut().find(|(name, _)| name == command) {
            Some(entry) => entry.1 += 1,
            None => counts.push((command.to_string(), 1)),
        }
    }
    counts.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    counts
}

fn first_of_type<'m>(messages: &'m [Message], message_type: &str) -> Option<&'m Message> {
    messages.iter().find(|m| m.message_type == message_type)
}

fn push_box(lines: &mut Vec<String>, title: &str) {
    lines.push(format!("┌{}┐", "─".repeat(WIDTH - 2)));
    lines.push(title.to_string());
    lines.push(format!("└{}┘", "─".repeat(WIDTH - 2)));
    lines.push(String::new());
}

fn push_budgeted_content(lines: &mut Vec<String>, content: &str, budget: usize) {
    match truncate_chars(content, budget) {
        (kept, Some(original)) => {
            lines.push(kept.to_string());
            lines.push(format!(
                "\n... [Content truncated - {original} total characters] ...\n"
            ));
        }
        (kept, None) => lines.push(kept.to_string()),
    }
    lines.push(String::new());
}

fn rule(c: char) -> String {
    c.to_string().repeat(WIDTH)
}
