//! Displacement Volume Analyzer - Main Entry Point

use clap::Parser;
use dva_cli::{init_logging, run, Cli, CliConfig};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level);
    info!("Displacement Volume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
