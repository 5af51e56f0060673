//! Displacement Volume Analyzer CLI
//!
//! Command-line caller for the conversion engine and the sample store.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

mod commands;
mod config;
mod format;

pub use commands::Commands;
pub use config::CliConfig;

/// Displacement Volume Analyzer
#[derive(Debug, Parser)]
#[command(name = "dva")]
#[command(about = "Water displacement volume calculator (Archimedes' principle, 1 g/mL at 4°C)")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "DVA_CONFIG")]
    pub config: Option<String>,

    /// Sample data file, overriding the configured one
    #[arg(short, long)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Initialize logging
///
/// Logs go to stderr so stdout only carries command output.
pub fn init_logging(level: &str) {
    let max_level = Level::from_str(level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        warn!("Tracing subscriber already installed");
    }
}

/// Run a parsed command line, writing results to `out`
pub fn run(cli: &Cli, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(path) = &cli.data_file {
        config.data_file = path.clone();
    }

    commands::execute(&cli.command, &config, out)
}
