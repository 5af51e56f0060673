//! Sample Store
//!
//! Durable, ordered list of named water samples kept in a flat JSON file,
//! plus batch conversion of the stored samples.

mod report;
mod sample;
mod store;

pub use report::{BatchReport, ReportRow};
pub use sample::{default_samples, Sample};
pub use store::SampleStore;

use std::path::PathBuf;
use thiserror::Error;
use volume_engine::ConversionError;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Sample ID '{0}' already exists")]
    DuplicateId(String),
    #[error("Index {index} is out of range ({len} samples)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Sample ID must not be empty")]
    EmptyId,
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid data file {}: {reason}", .path.display())]
    InvalidFormat { path: PathBuf, reason: String },
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
