use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trackmap")]
#[command(about = "Issue-tracker CSV export analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more CSV exports and report the rollups
    Analyze {
        /// Export files, one per project (file name becomes the project name)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Team roster TOML file; omit to accept every name found in the data
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Report a single solution (tag) instead of all of them
        #[arg(long)]
        tag: Option<String>,

        /// Report a single member instead of all of them
        #[arg(long)]
        member: Option<String>,
    },
    /// Create a starter roster configuration file
    Init {
        /// Overwrite an existing trackmap.toml
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
