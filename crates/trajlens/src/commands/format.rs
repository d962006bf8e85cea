use anyhow::Context;
use std::io::Write;
use std::path::Path;
use trajlens_core::load_from_path;
use trajlens_io::atomic_write;
use trajlens_report::AnalysisReport;

/// Render the analysis report for `input`. The report is built in memory
/// before anything is written.
pub fn render(input: &Path) -> anyhow::Result<(String, usize)> {
    let trajectory = load_from_path(input).context("Error processing trajectory file")?;
    let generated = chrono::Local::now().naive_local();
    let report = AnalysisReport::for_path(&trajectory, input, generated).render();
    Ok((report, trajectory.len()))
}

pub fn run(input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!("File not found: {}", input.display());
    }

    let (report, steps) = render(input)?;

    match output {
        Some(path) => {
            atomic_write(path, report.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Trajectory formatted and saved to: {}", path.display());
            println!("   Total steps: {steps}");
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            writeln!(lock, "{report}")?;
            lock.flush()?;
        }
    }
    Ok(())
}
