//! Per-step predicates

use crate::rules::{tool_key, ClassifierRules, ReproductionRule};
use crate::types::Step;

/// Observation reports a short "created successfully" notice for a
/// reproduction script.
pub fn is_reproduction_step(step: &Step, rule: &ReproductionRule) -> bool {
    let observation = &step.observation;
    if !observation.contains(&rule.created_marker) {
        return false;
    }
    let folded = observation.to_lowercase();
    folded.contains(&rule.reproduce_marker.to_lowercase())
        && folded.chars().count() < rule.max_observation_chars
}

/// Command line contains any search keyword
pub fn is_search_step(step: &Step, rules: &ClassifierRules) -> bool {
    let line = step.command_line();
    rules
        .search_keywords
        .iter()
        .any(|keyword| line.contains(keyword.as_str()))
}

/// Tool names (trimmed) whose table entry occurs in the command line, in
/// table order. Exclusions are applied.
pub fn tools_in_step<'r>(step: &Step, rules: &'r ClassifierRules) -> Vec<&'r str> {
    let line = step.command_line();
    rules
        .tools
        .iter()
        .filter(|tool| line.contains(tool.as_str()))
        .filter(|tool| !rules.is_excluded(tool, line))
        .map(|tool| tool_key(tool))
        .collect()
}
