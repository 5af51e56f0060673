//! Sample Record

use crate::StoreError;
use serde::{Deserialize, Serialize};
use volume_engine::{convert, validate_weight, ConversionError, UnitKind, VolumeReading};

/// A named weight measurement of water
///
/// Samples are immutable once created. Serialized with exactly the keys
/// `id`, `weight` and `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sample {
    id: String,
    weight: f64,
    unit: UnitKind,
}

impl Sample {
    /// Create a validated sample
    ///
    /// The ID is kept exactly as given but must contain something other
    /// than whitespace.
    pub fn new(id: impl Into<String>, weight: f64, unit: UnitKind) -> Result<Self, StoreError> {
        let sample = Self {
            id: id.into(),
            weight,
            unit,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.trim().is_empty() {
            return Err(StoreError::EmptyId);
        }
        validate_weight(self.weight)?;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn unit(&self) -> UnitKind {
        self.unit
    }

    /// Displaced volume of this sample
    pub fn volume(&self) -> Result<VolumeReading, ConversionError> {
        convert(self.weight, self.unit)
    }
}

/// The samples written on first run when seeding is enabled
pub fn default_samples() -> Vec<Sample> {
    [
        ("Sample-001", 150.0, UnitKind::Grams),
        ("Sample-002", 5.5, UnitKind::Ounces),
        ("Sample-003", 2.3, UnitKind::Pounds),
        ("Sample-004", 0.75, UnitKind::Kilograms),
        ("Sample-005", 250.0, UnitKind::Grams),
    ]
    .into_iter()
    .map(|(id, weight, unit)| Sample {
        id: id.to_string(),
        weight,
        unit,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sample() {
        let sample = Sample::new("S1", 10.0, UnitKind::Grams).unwrap();
        assert_eq!(sample.id(), "S1");
        assert_eq!(sample.weight(), 10.0);
        assert_eq!(sample.unit(), UnitKind::Grams);
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(matches!(
            Sample::new("", 1.0, UnitKind::Grams),
            Err(StoreError::EmptyId)
        ));
        assert!(matches!(
            Sample::new("   ", 1.0, UnitKind::Grams),
            Err(StoreError::EmptyId)
        ));
    }

    #[test]
    fn test_id_kept_verbatim() {
        let sample = Sample::new(" S1 ", 1.0, UnitKind::Grams).unwrap();
        assert_eq!(sample.id(), " S1 ");
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(matches!(
            Sample::new("S1", -0.5, UnitKind::Ounces),
            Err(StoreError::Conversion(ConversionError::InvalidWeight(_)))
        ));
    }

    #[test]
    fn test_json_shape() {
        let sample = Sample::new("Sample-001", 150.0, UnitKind::Grams).unwrap();
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "Sample-001", "weight": 150.0, "unit": "grams"})
        );

        // Integer weights are accepted
        let parsed: Sample =
            serde_json::from_str(r#"{"id": "A", "weight": 150, "unit": "grams"}"#).unwrap();
        assert_eq!(parsed.weight(), 150.0);
    }

    #[test]
    fn test_json_rejects_extra_and_missing_keys() {
        assert!(serde_json::from_str::<Sample>(
            r#"{"id": "A", "weight": 1, "unit": "grams", "note": "x"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"id": "A", "unit": "grams"}"#).is_err());
    }

    #[test]
    fn test_default_samples_are_valid_and_unique() {
        let samples = default_samples();
        assert_eq!(samples.len(), 5);
        for sample in &samples {
            sample.validate().unwrap();
        }
        let mut ids: Vec<_> = samples.iter().map(|s| s.id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_sample_volume() {
        let sample = Sample::new("S1", 2.0, UnitKind::Kilograms).unwrap();
        assert_eq!(sample.volume().unwrap().cm3, 2000.0);
    }
}
