//! Weight to Displaced Volume Conversion

use crate::error::ConversionError;
use crate::unit::{UnitKind, VolumeUnit};
use serde::{Deserialize, Serialize};

/// Displaced volume of a sample in each target unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeReading {
    /// Cubic millimeters
    pub mm3: f64,
    /// Cubic centimeters
    pub cm3: f64,
    /// Cubic inches
    pub in3: f64,
}

impl VolumeReading {
    /// Get the volume in one target unit
    pub fn get(&self, unit: VolumeUnit) -> f64 {
        match unit {
            VolumeUnit::Mm3 => self.mm3,
            VolumeUnit::Cm3 => self.cm3,
            VolumeUnit::In3 => self.in3,
        }
    }
}

/// Check that a weight is finite and non-negative
pub fn validate_weight(weight: f64) -> Result<(), ConversionError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(ConversionError::InvalidWeight(weight))
    }
}

/// Convert a weight of water to its displaced volume
pub fn convert(weight: f64, unit: UnitKind) -> Result<VolumeReading, ConversionError> {
    validate_weight(weight)?;

    let factors = unit.factors();
    Ok(VolumeReading {
        mm3: weight * factors.mm3,
        cm3: weight * factors.cm3,
        in3: weight * factors.in3,
    })
}

/// Convert with the unit given by name
pub fn convert_str(weight: f64, unit: &str) -> Result<VolumeReading, ConversionError> {
    let unit: UnitKind = unit.parse()?;
    convert(weight, unit)
}
