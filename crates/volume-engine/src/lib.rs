//! Displacement Volume Conversion
//!
//! Converts the weight of a water sample into the volume it displaces,
//! using water's density at 4°C (1 g/mL).

mod convert;
mod error;
mod unit;

pub use convert::{convert, convert_str, validate_weight, VolumeReading};
pub use error::ConversionError;
pub use unit::{UnitKind, VolumeFactors, VolumeUnit};
