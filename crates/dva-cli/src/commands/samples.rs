//! Sample management commands

use super::convert::decimals;
use crate::config::CliConfig;
use crate::format::grouped;
use anyhow::Context;
use sample_store::{default_samples, BatchReport, Sample, SampleStore};
use std::io::Write;
use tracing::info;
use volume_engine::{UnitKind, VolumeUnit};

/// Open and load the configured store, seeding it first when enabled
fn open_store(config: &CliConfig) -> anyhow::Result<SampleStore> {
    let mut store = SampleStore::open(&config.data_file);

    if config.seed_defaults {
        let seeded = store
            .seed_if_missing(default_samples())
            .context("failed to seed default samples")?;
        if seeded {
            info!("Wrote default samples to {}", store.path().display());
        }
    }

    store
        .load()
        .with_context(|| format!("failed to load samples from {}", config.data_file.display()))?;
    Ok(store)
}

/// `dva list`
pub fn list(config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let store = open_store(config)?;

    if store.is_empty() {
        writeln!(out, "No samples available. Add one with `dva add <id> <weight>`.")?;
        return Ok(());
    }

    let report = BatchReport::from_samples(store.samples())?;

    write!(out, "{:>3}  {:<16} {:>12} {:<10}", "#", "Sample ID", "Weight", "Unit")?;
    for target in VolumeUnit::ALL {
        write!(out, " {:>18}", format!("Volume ({})", target.symbol()))?;
    }
    writeln!(out)?;

    for (index, row) in report.rows().iter().enumerate() {
        write!(
            out,
            "{:>3}  {:<16} {:>12} {:<10}",
            index,
            row.id,
            grouped(row.weight, 2),
            row.unit
        )?;
        for target in VolumeUnit::ALL {
            write!(out, " {:>18}", grouped(row.volume.get(target), decimals(target)))?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "Total Samples: {}", report.len())?;
    Ok(())
}

/// `dva add`
pub fn add(
    config: &CliConfig,
    id: &str,
    weight: f64,
    unit: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let unit: UnitKind = unit.parse()?;
    let sample = Sample::new(id, weight, unit)?;

    let mut store = open_store(config)?;
    store.add(sample)?;

    writeln!(out, "Sample '{}' added ({} samples)", id, store.len())?;
    Ok(())
}

/// `dva remove`
pub fn remove(config: &CliConfig, index: usize, out: &mut impl Write) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let removed = store.remove(index)?;

    writeln!(
        out,
        "Deleted {} ({} {})",
        removed.id(),
        grouped(removed.weight(), 2),
        removed.unit()
    )?;
    Ok(())
}
