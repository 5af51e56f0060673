//! CLI subcommands

use crate::config::CliConfig;
use clap::Subcommand;
use std::io::Write;

mod convert;
mod samples;

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a weight of water to displaced volume
    Convert {
        /// Weight of water
        #[arg(allow_negative_numbers = true)]
        weight: f64,
        /// Mass unit (grams, ounces, pounds, kilograms)
        #[arg(short, long, default_value = "grams")]
        unit: String,
    },

    /// Show the conversion multiplier table
    Units,

    /// Show batch conversion results for all stored samples
    #[command(alias = "ls")]
    List,

    /// Add a sample
    Add {
        /// Sample ID, unique within the data file
        id: String,
        /// Weight of water
        #[arg(allow_negative_numbers = true)]
        weight: f64,
        /// Mass unit (grams, ounces, pounds, kilograms)
        #[arg(short, long, default_value = "grams")]
        unit: String,
    },

    /// Delete the sample at a position (as numbered by `list`)
    #[command(alias = "rm")]
    Remove {
        /// Zero-based position
        index: usize,
    },
}

/// Dispatch a command
pub fn execute(command: &Commands, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Convert { weight, unit } => convert::convert(*weight, unit, out),
        Commands::Units => convert::units(out),
        Commands::List => samples::list(config, out),
        Commands::Add { id, weight, unit } => samples::add(config, id, *weight, unit, out),
        Commands::Remove { index } => samples::remove(config, *index, out),
    }
}
