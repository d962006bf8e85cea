use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trajlens")]
#[command(version)]
#[command(about = "Analytics and readable reports for agent trajectories")]
pub struct Cli {
    /// Config file with the trajectory lookup table (default: ./trajlens.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for detector logs and transcripts (overrides config)
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a .traj file into a readable analysis report
    Format {
        /// Path to the .traj file
        input: PathBuf,
        /// Write the report here instead of stdout
        output: Option<PathBuf>,
    },

    /// Print the step-by-step transcript of a trajectory
    Transcript {
        /// Trajectory identifier
        id: String,
        /// Save to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Repeat the raw action after each observation
        #[arg(long)]
        raw_action: bool,
    },

    /// Run a single detector and append its findings to the detector log
    Locate {
        #[arg(value_enum)]
        detector: Detector,
        /// Trajectory identifiers (defaults to the configured list)
        ids: Vec<String>,
    },

    /// Export transcripts and run every detector over each trajectory
    Analyze {
        /// Trajectory identifiers (defaults to the configured list)
        ids: Vec<String>,
        /// Skip writing <id>_pretty.txt transcripts
        #[arg(long)]
        skip_export: bool,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Detector {
    /// Steps that created a reproduction script
    Repro,
    /// Steps that ran a search or navigation command
    Search,
    /// Invocation count per tool
    Tools,
}

impl Detector {
    pub const ALL: [Detector; 3] = [Detector::Repro, Detector::Search, Detector::Tools];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["trajlens", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::try_parse_from(["trajlens", "format", "a.traj", "out.txt"]).unwrap();
        if let Commands::Format { input, output } = cli.command {
            assert_eq!(input, PathBuf::from("a.traj"));
            assert_eq!(output, Some(PathBuf::from("out.txt")));
        } else {
            panic!("Expected Format command");
        }
    }

    #[test]
    fn test_cli_format_requires_input() {
        assert!(Cli::try_parse_from(["trajlens", "format"]).is_err());
    }

    #[test]
    fn test_cli_parse_locate() {
        let cli =
            Cli::try_parse_from(["trajlens", "locate", "tools", "10554", "4687"]).unwrap();
        if let Commands::Locate { detector, ids } = cli.command {
            assert_eq!(detector, Detector::Tools);
            assert_eq!(ids, vec!["10554".to_string(), "4687".to_string()]);
        } else {
            panic!("Expected Locate command");
        }
    }

    #[test]
    fn test_cli_parse_analyze_global_flags() {
        let cli = Cli::try_parse_from([
            "trajlens",
            "analyze",
            "--skip-export",
            "--config",
            "conf.json",
            "--output-dir",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("conf.json")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(matches!(
            cli.command,
            Commands::Analyze { skip_export: true, ref ids } if ids.is_empty()
        ));
    }

    #[test]
    fn test_cli_parse_transcript() {
        let cli =
            Cli::try_parse_from(["trajlens", "transcript", "6938", "--raw-action"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Transcript { raw_action: true, out: None, .. }
        ));
    }
}
