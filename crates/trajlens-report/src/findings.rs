//! Detector log records.
//!
//! Every record is self-delimited: a header naming the trajectory, one
//! block per finding, and a closing `Result:` line. Records go to
//! append-only log files and must each stand alone.

use trajlens_core::{first_line, tool_hits, ClassifierRules, StepIndices, ToolUsage, Trajectory};

const WIDTH: usize = 80;

fn header(id: &str) -> Vec<String> {
    vec![
        String::new(),
        "=".repeat(WIDTH),
        format!("ID: {id}"),
        "=".repeat(WIDTH),
    ]
}

fn finish(mut lines: Vec<String>, result: String) -> String {
    lines.push(format!("Result: {result}"));
    let mut record = lines.join("\n");
    record.push('\n');
    record
}

/// Record for the reproduction-code detector
pub fn reproduction_record(id: &str, trajectory: &Trajectory, found: &StepIndices) -> String {
    let mut lines = header(id);
    for i in found.iter() {
        let Some(step) = trajectory.steps().get(i) else {
            continue;
        };
        lines.push(format!("Found reproduction code at step {i} for ID {id}"));
        lines.push(format!("Observation: {}", step.observation));
        lines.push(format!("Action: {}", step.action));
        lines.push("-".repeat(WIDTH));
    }
    finish(lines, found.to_string())
}

/// Record for the search-action detector
pub fn search_record(id: &str, trajectory: &Trajectory, found: &StepIndices) -> String {
    let mut lines = header(id);
    for i in found.iter() {
        let Some(step) = trajectory.steps().get(i) else {
            continue;
        };
        lines.push(format!("Found search action at step {i} for ID {id}"));
        lines.push(format!("Action: {}", step.command_line()));
        lines.push("-".repeat(WIDTH));
    }
    finish(lines, found.to_string())
}

/// Record for the tool-usage counter. Lists every step's command line
/// together with the tools it was counted under.
pub fn tool_usage_record(
    id: &str,
    trajectory: &Trajectory,
    rules: &ClassifierRules,
    usage: &ToolUsage,
) -> String {
    let mut lines = header(id);
    for (i, hits) in tool_hits(trajectory, rules) {
        let action = &trajectory.steps()[i].action;
        lines.push(format!("Action: {}", first_line(action)));
        for tool in hits {
            lines.push(format!("Found tool '{tool}' usage at step {i} for ID {id}"));
        }
        lines.push("-".repeat(WIDTH));
    }
    finish(lines, usage.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajlens_core::{reproduction_steps, search_steps, tool_usage, Step};

    fn sample() -> Trajectory {
        Trajectory::new(vec![
            Step::new(
                "Create a script",
                "create reproduce.py",
                "File /testbed/reproduce.py created successfully.",
            ),
            Step::new("Search", "search_dir 'foo' src/", "Found 2 matches"),
            Step::new("Edit", "str_replace_editor create foo.py", "File created."),
        ])
    }

    #[test]
    fn test_reproduction_record() {
        let traj = sample();
        let rules = ClassifierRules::new();
        let found = reproduction_steps(&traj, &rules);
        let record = reproduction_record("10554", &traj, &found);

        assert!(record.starts_with(&format!("\n{}\nID: 10554\n", "=".repeat(80))));
        assert!(record.contains("Found reproduction code at step 0 for ID 10554"));
        assert!(record.contains("Action: create reproduce.py"));
        assert!(record.ends_with("Result: [0]\n"));
    }

    #[test]
    fn test_search_record() {
        let traj = sample();
        let rules = ClassifierRules::new();
        let found = search_steps(&traj, &rules);
        let record = search_record("10554", &traj, &found);
        assert!(record.contains("Found search action at step 1 for ID 10554"));
        assert!(record.contains("Action: search_dir 'foo' src/"));
        assert!(record.ends_with("Result: [1]\n"));
    }

    #[test]
    fn test_tool_usage_record() {
        let traj = sample();
        let rules = ClassifierRules::new();
        let usage = tool_usage(&traj, &rules);
        let record = tool_usage_record("10554", &traj, &rules, &usage);

        assert!(record.contains("Found tool 'create' usage at step 0 for ID 10554"));
        assert!(record.contains("Found tool 'search_dir' usage at step 1 for ID 10554"));
        assert!(record.contains("Found tool 'str_replace_editor' usage at step 2 for ID 10554"));
        assert!(!record.contains("Found tool 'create' usage at step 2"));
        assert!(record.ends_with("Result: {str_replace_editor: 1, create: 1, search_dir: 1}\n"));
    }

    #[test]
    fn test_empty_trajectory_records() {
        let traj = Trajectory::default();
        let rules = ClassifierRules::new();
        let record = search_record("1", &traj, &search_steps(&traj, &rules));
        assert_eq!(
            record,
            format!("\n{eq}\nID: 1\n{eq}\nResult: []\n", eq = "=".repeat(80))
        );
    }
}
