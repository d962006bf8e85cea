pub mod analyze;
pub mod format;
pub mod locate;
pub mod transcript;
pub mod version;

use anyhow::Context;
use std::path::Path;
use trajlens_core::Config;
use trajlens_io::OutputPaths;

/// Discover the config and apply the `--output-dir` override
pub fn load_config(path: Option<&Path>, output_dir: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::discover(path).context("Failed to load trajlens config")?;
    if let Some(dir) = output_dir {
        config.output_dir = dir.to_path_buf();
    }
    Ok(config)
}

pub fn output_paths(config: &Config) -> OutputPaths {
    OutputPaths::new(&config.output_dir)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::Path;
    use trajlens_core::Config;

    /// Writes two trajectories and returns a config pointing at them
    pub fn workspace(root: &Path) -> Config {
        let trajs = root.join("trajectories");
        std::fs::create_dir_all(&trajs).unwrap();

        let doc = serde_json::json!({
            "trajectory": [
                {
                    "thought": "Reproduce the bug first",
                    "action": "create reproduce.py",
                    "observation": "[File: /testbed/reproduce.py (1 lines total)]\nFile /testbed/reproduce.py created successfully."
                },
                {
                    "thought": "Find the model",
                    "action": "search_dir 'class Model' django/",
                    "observation": "Found 3 matches"
                },
                {
                    "thought": "Write the fix",
                    "action": "str_replace_editor create /testbed/fix.py --file_text 'x'",
                    "observation": "File created successfully at: /testbed/fix.py"
                },
                {
                    "thought": "Done",
                    "action": "submit",
                    "observation": "diff --git a/fix.py b/fix.py"
                }
            ]
        });
        std::fs::write(trajs.join("django__django-10554.traj"), doc.to_string()).unwrap();
        std::fs::write(trajs.join("broken.traj"), "{\"history\": []}").unwrap();

        let mut config = Config::new();
        config.base_dir = trajs;
        config.output_dir = root.join("out");
        config
            .trajectories
            .insert("10554".to_string(), "django__django-10554.traj".into());
        config
            .trajectories
            .insert("broken".to_string(), "broken.traj".into());
        config.analyze = vec!["10554".to_string()];
        config
    }
}
