//! Folding per-step classification over a whole trajectory

use crate::classify::{is_reproduction_step, is_search_step, tools_in_step};
use crate::rules::{tool_key, ClassifierRules};
use crate::types::Trajectory;
use std::fmt;

/// Ascending 0-based indices of matching steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepIndices(Vec<usize>);

impl StepIndices {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for StepIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "[{}]", items.join(", "))
    }
}

/// Tool name → count, in rule-table order, zero entries removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolUsage {
    counts: Vec<(String, usize)>,
}

impl ToolUsage {
    pub fn get(&self, tool: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| name == tool)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

impl fmt::Display for ToolUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self
            .counts
            .iter()
            .map(|(name, count)| format!("{name}: {count}"))
            .collect();
        write!(f, "{{{}}}", items.join(", "))
    }
}

/// Steps whose observation announces a freshly created reproduction script
pub fn reproduction_steps(trajectory: &Trajectory, rules: &ClassifierRules) -> StepIndices {
    StepIndices(
        trajectory
            .iter()
            .filter(|(_, step)| is_reproduction_step(step, &rules.reproduction))
            .map(|(i, _)| i)
            .collect(),
    )
}

/// Steps whose command line is a search or navigation action
pub fn search_steps(trajectory: &Trajectory, rules: &ClassifierRules) -> StepIndices {
    StepIndices(
        trajectory
            .iter()
            .filter(|(_, step)| is_search_step(step, rules))
            .map(|(i, _)| i)
            .collect(),
    )
}

/// Tools hit by each step, in step order. Steps with no hit are included
/// with an empty list.
pub fn tool_hits<'r>(
    trajectory: &Trajectory,
    rules: &'r ClassifierRules,
) -> Vec<(usize, Vec<&'r str>)> {
    trajectory
        .iter()
        .map(|(i, step)| (i, tools_in_step(step, rules)))
        .collect()
}

/// Invocation count per known tool
pub fn tool_usage(trajectory: &Trajectory, rules: &ClassifierRules) -> ToolUsage {
    let mut counts: Vec<(String, usize)> = Vec::with_capacity(rules.tools.len());
    for tool in &rules.tools {
        let key = tool_key(tool);
        if !counts.iter().any(|(name, _)| name == key) {
            counts.push((key.to_string(), 0));
        }
    }

    for (_, hits) in tool_hits(trajectory, rules) {
        for hit in hits {
            if let Some(entry) = counts.iter_mut().find(|(name, _)| name == hit) {
                entry.1 += 1;
            }
        }
    }

    counts.retain(|(_, count)| *count > 0);
    ToolUsage { counts }
}
