//! Conversion Error Types

use thiserror::Error;

/// Errors during volume conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Unit name is not one of the recognized mass units
    #[error("Invalid unit '{0}': expected one of grams, ounces, pounds, kilograms")]
    InvalidUnit(String),

    /// Weight is negative, NaN or infinite
    #[error("Invalid weight {0}: must be a finite, non-negative number")]
    InvalidWeight(f64),
}
