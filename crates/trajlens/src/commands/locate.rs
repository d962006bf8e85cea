use crate::cli::Detector;
use anyhow::Context;
use trajlens_core::{
    load_trajectory, reproduction_steps, search_steps, tool_usage, Config, Trajectory,
};
use trajlens_io::{append_record, OutputPaths};
use trajlens_report::{reproduction_record, search_record, tool_usage_record};

impl Detector {
    /// Label for the result line printed to stdout
    pub fn label(self) -> &'static str {
        match self {
            Detector::Repro => "Steps with reproduction code",
            Detector::Search => "Steps with search actions",
            Detector::Tools => "Tool usage frequency map",
        }
    }

    fn log_path(self, paths: &OutputPaths) -> std::path::PathBuf {
        match self {
            Detector::Repro => paths.reproduction_log(),
            Detector::Search => paths.search_log(),
            Detector::Tools => paths.tool_usage_log(),
        }
    }
}

/// Run one detector, append its record to the detector log and return the
/// rendered result.
pub fn record_detector(
    detector: Detector,
    id: &str,
    trajectory: &Trajectory,
    config: &Config,
    paths: &OutputPaths,
) -> anyhow::Result<String> {
    let rules = &config.rules;
    let (record, result, matches) = match detector {
        Detector::Repro => {
            let found = reproduction_steps(trajectory, rules);
            (
                reproduction_record(id, trajectory, &found),
                found.to_string(),
                found.len(),
            )
        }
        Detector::Search => {
            let found = search_steps(trajectory, rules);
            (
                search_record(id, trajectory, &found),
                found.to_string(),
                found.len(),
            )
        }
        Detector::Tools => {
            let usage = tool_usage(trajectory, rules);
            (
                tool_usage_record(id, trajectory, rules, &usage),
                usage.to_string(),
                usage.total(),
            )
        }
    };

    let log = detector.log_path(paths);
    append_record(&log, &record).with_context(|| format!("Failed to write {}", log.display()))?;
    tracing::info!(id, detector = ?detector, matches, "detector finished");
    Ok(result)
}

pub fn run(config: &Config, detector: Detector, ids: &[String]) -> anyhow::Result<()> {
    let ids = config.selected_ids(ids);
    if ids.is_empty() {
        println!("No trajectory identifiers given or configured");
        return Ok(());
    }

    let paths = super::output_paths(config);
    let mut failed: Vec<&str> = Vec::new();

    for id in &ids {
        let outcome = load_trajectory(config, id)
            .map_err(anyhow::Error::from)
            .and_then(|trajectory| record_detector(detector, id, &trajectory, config, &paths));
        match outcome {
            Ok(result) => println!("{id}: {} => {result}", detector.label()),
            Err(e) => {
                tracing::warn!(id = id.as_str(), error = %e, "skipping trajectory");
                failed.push(id);
            }
        }
    }

    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} trajectories failed: {}",
            failed.len(),
            ids.len(),
            failed.join(", ")
        );
    }
    Ok(())
}
