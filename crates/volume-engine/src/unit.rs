//! Mass Units and the Displacement Multiplier Table
//!
//! Each mass unit maps to a fixed row of factors combining the unit's
//! mass-to-gram conversion with water's density.

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mass unit a sample weight is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Grams (1 g of water = 1 cm³)
    Grams,
    /// Avoirdupois ounces
    Ounces,
    /// Avoirdupois pounds
    Pounds,
    /// Kilograms
    Kilograms,
}

/// Displaced volume per one unit of mass, in each target volume unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeFactors {
    /// Cubic millimeters per unit
    pub mm3: f64,
    /// Cubic centimeters per unit
    pub cm3: f64,
    /// Cubic inches per unit
    pub in3: f64,
}

const GRAMS: VolumeFactors = VolumeFactors {
    mm3: 1000.0,
    cm3: 1.0,
    in3: 0.061023744,
};

const OUNCES: VolumeFactors = VolumeFactors {
    mm3: 28316.8466,
    cm3: 28.3168466,
    in3: 1.7295904,
};

const POUNDS: VolumeFactors = VolumeFactors {
    mm3: 453592.37,
    cm3: 453.59237,
    in3: 27.6806742,
};

const KILOGRAMS: VolumeFactors = VolumeFactors {
    mm3: 1_000_000.0,
    cm3: 1000.0,
    in3: 61.023744,
};

impl UnitKind {
    /// All units, in the order they are offered to users
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Grams,
        UnitKind::Ounces,
        UnitKind::Pounds,
        UnitKind::Kilograms,
    ];

    /// Get the multiplier row for this unit
    pub const fn factors(&self) -> VolumeFactors {
        match self {
            UnitKind::Grams => GRAMS,
            UnitKind::Ounces => OUNCES,
            UnitKind::Pounds => POUNDS,
            UnitKind::Kilograms => KILOGRAMS,
        }
    }

    /// Canonical lowercase name, as stored on disk
    pub const fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Grams => "grams",
            UnitKind::Ounces => "ounces",
            UnitKind::Pounds => "pounds",
            UnitKind::Kilograms => "kilograms",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitKind::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ConversionError::InvalidUnit(s.to_string()))
    }
}

/// Target volume unit of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    /// Cubic millimeters
    Mm3,
    /// Cubic centimeters
    Cm3,
    /// Cubic inches
    In3,
}

impl VolumeUnit {
    /// All target units, smallest first
    pub const ALL: [VolumeUnit; 3] = [VolumeUnit::Mm3, VolumeUnit::Cm3, VolumeUnit::In3];

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Mm3 => "mm³",
            VolumeUnit::Cm3 => "cm³",
            VolumeUnit::In3 => "in³",
        }
    }

    /// Long display name
    pub fn name(&self) -> &'static str {
        match self {
            VolumeUnit::Mm3 => "Cubic Millimeters",
            VolumeUnit::Cm3 => "Cubic Centimeters",
            VolumeUnit::In3 => "Cubic Inches",
        }
    }
}

impl VolumeFactors {
    /// Get the factor for one target unit
    pub fn get(&self, unit: VolumeUnit) -> f64 {
        match unit {
            VolumeUnit::Mm3 => self.mm3,
            VolumeUnit::Cm3 => self.cm3,
            VolumeUnit::In3 => self.in3,
        }
    }
}
