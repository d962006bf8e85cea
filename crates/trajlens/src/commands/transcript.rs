use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use trajlens_core::{load_trajectory, Config};
use trajlens_io::{atomic_write, OutputPaths};
use trajlens_report::{render_transcript, write_transcript, TranscriptOptions};

/// Write `<id>_pretty.txt` into the output directory
pub fn export(config: &Config, paths: &OutputPaths, id: &str) -> anyhow::Result<PathBuf> {
    let trajectory = load_trajectory(config, id)?;
    let text = render_transcript(&trajectory, TranscriptOptions::default());
    let out = paths.transcript(id);
    atomic_write(&out, text.as_bytes())
        .with_context(|| format!("Failed to write {}", out.display()))?;
    Ok(out)
}

pub fn run(config: &Config, id: &str, out: Option<&Path>, raw_action: bool) -> anyhow::Result<()> {
    let trajectory = load_trajectory(config, id)?;
    let options = TranscriptOptions {
        include_raw_action: raw_action,
    };

    match out {
        Some(path) => {
            let text = render_transcript(&trajectory, options);
            atomic_write(path, text.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Saved: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_transcript(&mut lock, &trajectory, options)?;
            lock.flush()?;
        }
    }
    Ok(())
}
