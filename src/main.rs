use anyhow::Result;
use clap::Parser;
use trackmap::cli::{Cli, Commands};
use trackmap::commands::analyze::{analyze, AnalyzeConfig};
use trackmap::commands::init::init_config;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            format,
            output,
            roster,
            tag,
            member,
        } => analyze(AnalyzeConfig {
            files,
            format: format.into(),
            output,
            roster,
            tag,
            member,
        }),
        Commands::Init { force } => init_config(force),
    }
}
