mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (config_path, output_dir) = (cli.config, cli.output_dir);
    let load_config = || commands::load_config(config_path.as_deref(), output_dir.as_deref());

    match cli.command {
        Commands::Format { input, output } => commands::format::run(&input, output.as_deref()),
        Commands::Transcript {
            id,
            out,
            raw_action,
        } => commands::transcript::run(&load_config()?, &id, out.as_deref(), raw_action),
        Commands::Locate { detector, ids } => commands::locate::run(&load_config()?, detector, &ids),
        Commands::Analyze { ids, skip_export } => {
            commands::analyze::run(&load_config()?, &ids, skip_export)
        }
        Commands::Version => commands::version::run(),
    }
}
