//! Step-by-step transcript

use std::io::Write;
use trajlens_core::Trajectory;

/// Width of the separator printed after each step
pub const SEPARATOR_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptOptions {
    /// Repeat the raw action after the observation
    pub include_raw_action: bool,
}

/// Write a transcript of `trajectory` to `out`
pub fn write_transcript<W: Write>(
    out: &mut W,
    trajectory: &Trajectory,
    options: TranscriptOptions,
) -> std::io::Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    for (i, step) in trajectory.iter() {
        writeln!(out, "{}: {}", i + 1, step.thought)?;
        writeln!(out, ">> {}", step.command_line())?;
        writeln!(out, "{}", step.observation)?;
        if options.include_raw_action {
            writeln!(out, "{}", step.action)?;
        }
        writeln!(out, "{separator}")?;
    }

    writeln!(out, "Finished in {} steps", trajectory.len())
}

/// Transcript rendered into a string
pub fn render_transcript(trajectory: &Trajectory, options: TranscriptOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_transcript(&mut buf, trajectory, options);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajlens_core::Step;

    #[test]
    fn test_empty_transcript() {
        let text = render_transcript(&Trajectory::default(), TranscriptOptions::default());
        assert_eq!(text, "Finished in 0 steps\n");
    }

    #[test]
    fn test_transcript_numbering_and_first_line() {
        let traj = Trajectory::new(vec![
            Step::new("Look at the repo", "ls -la", "setup.py"),
            Step::new(
                "Fix it",
                "edit 1:1\nimport os\nend_of_edit",
                "File updated.",
            ),
        ]);
        let text = render_transcript(&traj, TranscriptOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "1: Look at the repo");
        assert_eq!(lines[1], ">> ls -la");
        assert_eq!(lines[2], "setup.py");
        assert_eq!(lines[3], "-".repeat(80));
        assert_eq!(lines[4], "2: Fix it");
        assert_eq!(lines[5], ">> edit 1:1");
        assert!(!text.contains("import os"));
        assert!(text.ends_with("Finished in 2 steps\n"));
    }

    #[test]
    fn test_transcript_raw_action() {
        let traj = Trajectory::new(vec![Step::new(
            "Fix it",
            "edit 1:1\nimport os\nend_of_edit",
            "File updated.",
        )]);
        let options = TranscriptOptions {
            include_raw_action: true,
        };
        let text = render_transcript(&traj, options);
        assert!(text.contains("File updated.\nedit 1:1\nimport os\nend_of_edit\n"));
    }
}
