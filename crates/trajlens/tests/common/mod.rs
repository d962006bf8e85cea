#![allow(dead_code)]

use std::path::{Path, PathBuf};
use trajlens_core::{Config, Step, Trajectory};

pub fn step(action: &str, observation: &str) -> Step {
    Step::new("thinking", action, observation)
}

pub fn trajectory(steps: &[(&str, &str)]) -> Trajectory {
    Trajectory::new(
        steps
            .iter()
            .map(|(action, observation)| step(action, observation))
            .collect(),
    )
}

/// A short SWE-agent style session: reproduce, search, edit, verify, submit
pub fn sample_session() -> Trajectory {
    trajectory(&[
        (
            "create reproduce.py",
            "[File: /testbed/reproduce.py (1 lines total)]\nFile /testbed/reproduce.py created successfully.",
        ),
        ("find_file models.py", "Found 1 matches for \"models.py\""),
        ("search_dir 'foo' src/", "Found 4 matches for \"foo\" in /testbed/src"),
        (
            "open src/models.py 120",
            "[File: /testbed/src/models.py (400 lines total)]",
        ),
        (
            "edit 121:121\n        return self.foo\nend_of_edit",
            "File updated.",
        ),
        (
            "str_replace_editor create foo.py --file_text 'x'",
            "File created successfully at: /testbed/foo.py",
        ),
        ("python reproduce.py", "Script completed successfully, no errors."),
        ("cd /testbed && grep -rn foo src/ | head", "src/models.py:121"),
        ("submit", "diff --git a/src/models.py b/src/models.py"),
    ])
}

/// Write `steps` as a `.traj` document and return its path
pub fn write_traj(dir: &Path, name: &str, steps: &[Step]) -> PathBuf {
    let path = dir.join(name);
    let doc = serde_json::json!({
        "environment": "swe_main",
        "trajectory": steps,
        "info": {"exit_status": "submitted"}
    });
    std::fs::write(&path, doc.to_string()).unwrap();
    path
}

/// Config whose lookup table maps `id` to `file` under `dir`
pub fn config_for(dir: &Path, entries: &[(&str, &str)]) -> Config {
    let mut config = Config::new();
    config.base_dir = dir.to_path_buf();
    config.output_dir = dir.join("out");
    for (id, file) in entries {
        config
            .trajectories
            .insert(id.to_string(), PathBuf::from(file));
    }
    config
}
