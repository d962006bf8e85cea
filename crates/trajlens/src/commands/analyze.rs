use super::locate::record_detector;
use super::transcript;
use crate::cli::Detector;
use trajlens_core::{load_trajectory, Config};
use trajlens_io::OutputPaths;

/// Load one trajectory and run every detector over it
fn analyze_one(config: &Config, paths: &OutputPaths, id: &str) -> anyhow::Result<Vec<String>> {
    let trajectory = load_trajectory(config, id)?;
    Detector::ALL
        .iter()
        .map(|&detector| -> anyhow::Result<String> {
            let result = record_detector(detector, id, &trajectory, config, paths)?;
            Ok(format!("{} => {result}", detector.label()))
        })
        .collect()
}

pub fn run(config: &Config, ids: &[String], skip_export: bool) -> anyhow::Result<()> {
    let ids = config.selected_ids(ids);
    if ids.is_empty() {
        println!("No trajectory identifiers given or configured");
        return Ok(());
    }

    let paths = super::output_paths(config);
    let mut failed: Vec<&str> = Vec::new();

    if !skip_export {
        println!("Exporting pretty trajectory files...");
        for id in &ids {
            match transcript::export(config, &paths, id) {
                Ok(out) => println!("Saved: {}", out.display()),
                Err(e) => tracing::warn!(id = id.as_str(), error = %e, "transcript export failed"),
            }
        }
    }

    for id in &ids {
        println!("\nProcessing ID: {id}");
        match analyze_one(config, &paths, id) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
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
