//! Batch Conversion of Stored Samples

use crate::Sample;
use serde::Serialize;
use volume_engine::{ConversionError, UnitKind, VolumeReading};

/// One converted sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub id: String,
    pub weight: f64,
    pub unit: UnitKind,
    pub volume: VolumeReading,
}

/// Conversion results for a whole sample list, in store order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    rows: Vec<ReportRow>,
}

impl BatchReport {
    /// Convert every sample
    pub fn from_samples(samples: &[Sample]) -> Result<Self, ConversionError> {
        let rows = samples
            .iter()
            .map(|sample| -> Result<ReportRow, ConversionError> {
                Ok(ReportRow {
                    id: sample.id().to_string(),
                    weight: sample.weight(),
                    unit: sample.unit(),
                    volume: sample.volume()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all displaced volumes in cubic centimeters
    pub fn total_cm3(&self) -> f64 {
        self.rows.iter().map(|r| r.volume.cm3).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_samples;

    #[test]
    fn test_report_keeps_store_order() {
        let samples = default_samples();
        let report = BatchReport::from_samples(&samples).unwrap();

        assert_eq!(report.len(), 5);
        let ids: Vec<_> = report.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Sample-001", "Sample-002", "Sample-003", "Sample-004", "Sample-005"]
        );
    }

    #[test]
    fn test_report_values() {
        let samples = vec![
            Sample::new("A", 150.0, UnitKind::Grams).unwrap(),
            Sample::new("B", 1.0, UnitKind::Kilograms).unwrap(),
        ];
        let report = BatchReport::from_samples(&samples).unwrap();

        assert_eq!(report.rows()[0].volume.mm3, 150000.0);
        assert_eq!(report.rows()[1].volume.cm3, 1000.0);
        assert!((report.total_cm3() - 1150.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = BatchReport::from_samples(&[]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.total_cm3(), 0.0);
    }

    #[test]
    fn test_invalid_sample_fails_report() {
        let bad: Sample =
            serde_json::from_str(r#"{"id": "X", "weight": -2, "unit": "grams"}"#).unwrap();
        assert!(matches!(
            BatchReport::from_samples(&[bad]),
            Err(ConversionError::InvalidWeight(_))
        ));
    }
}
