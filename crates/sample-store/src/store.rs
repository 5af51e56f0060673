//! Sample Store Implementation

use crate::{Sample, StoreError};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Ordered collection of samples backed by a JSON file
///
/// Insertion order is the only ordering. Every mutation is followed by a
/// persist; when that persist fails the mutation stays in memory and the
/// store is left dirty.
#[derive(Debug)]
pub struct SampleStore {
    /// Backing file
    path: PathBuf,
    /// Samples in insertion order
    samples: Vec<Sample>,
    /// Whether memory differs from the last successful load or persist
    dirty: bool,
}

impl SampleStore {
    /// Bind a store to a data file. Nothing is read until `load`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!("Opening sample store at {}", path.display());
        Self {
            path,
            samples: Vec::new(),
            dirty: false,
        }
    }

    /// Read the data file, replacing the in-memory samples
    ///
    /// A missing file yields an empty store. A file that is present but
    /// does not hold a valid sample list is rejected and memory is left
    /// untouched.
    pub fn load(&mut self) -> Result<&[Sample], StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                self.samples.clear();
                self.dirty = false;
                return Ok(&self.samples);
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let samples = self.parse(&json)?;
        debug!("Loaded {} samples from {}", samples.len(), self.path.display());
        self.samples = samples;
        self.dirty = false;
        Ok(&self.samples)
    }

    /// Append a sample, rejecting a duplicate ID before anything is written
    pub fn add(&mut self, sample: Sample) -> Result<(), StoreError> {
        sample.validate()?;

        if self.find(sample.id()).is_some() {
            warn!("Rejected duplicate sample ID '{}'", sample.id());
            return Err(StoreError::DuplicateId(sample.id().to_string()));
        }

        debug!("Adding sample '{}'", sample.id());
        self.samples.push(sample);
        self.dirty = true;
        self.persist()
    }

    /// Remove the sample at a position, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Result<Sample, StoreError> {
        let len = self.samples.len();
        if index >= len {
            warn!("Rejected removal at index {} ({} samples)", index, len);
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let removed = self.samples.remove(index);
        debug!("Removed sample '{}' at index {}", removed.id(), index);
        self.dirty = true;
        self.persist()?;
        Ok(removed)
    }

    /// Write all samples to the data file
    ///
    /// Writes a sibling temp file and renames it over the target, so the
    /// file holds either the old or the new list.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.samples).map_err(|e| {
            StoreError::InvalidFormat {
                path: self.path.clone(),
                reason: format!("serialization failed: {}", e),
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, json).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error(e));
        }

        self.dirty = false;
        debug!("Persisted {} samples to {}", self.samples.len(), self.path.display());
        Ok(())
    }

    /// Write `samples` as the initial content if the data file does not exist
    ///
    /// Returns whether seeding happened. An existing file is never touched.
    pub fn seed_if_missing(&mut self, samples: Vec<Sample>) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }

        check_unique(&samples).map_err(StoreError::DuplicateId)?;
        for sample in &samples {
            sample.validate()?;
        }

        info!("Seeding {} with {} samples", self.path.display(), samples.len());
        self.samples = samples;
        self.dirty = true;
        self.persist()?;
        Ok(true)
    }

    /// Samples in insertion order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Find a sample by exact ID
    pub fn find(&self, id: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the last mutation has not reached the data file
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn parse(&self, json: &str) -> Result<Vec<Sample>, StoreError> {
        let invalid = |reason: String| StoreError::InvalidFormat {
            path: self.path.clone(),
            reason,
        };

        let samples: Vec<Sample> =
            serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;

        for (index, sample) in samples.iter().enumerate() {
            sample
                .validate()
                .map_err(|e| invalid(format!("sample {}: {}", index, e)))?;
        }
        check_unique(&samples).map_err(|id| invalid(format!("duplicate sample ID '{}'", id)))?;

        Ok(samples)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// First repeated ID, if any
fn check_unique(samples: &[Sample]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(samples.len());
    match samples.iter().find(|s| !seen.insert(s.id())) {
        Some(dup) => Err(dup.id().to_string()),
        None => Ok(()),
    }
}
