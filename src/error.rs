//! Error types for the crop tables and the form boundary.

use thiserror::Error;

use crate::suitability::{Crop, Month, SoilType};

/// Message shown to the user for any rejected submission
pub const GENERIC_PREDICTION_ERROR: &str = "Error making prediction. Please try again.";

/// Broken invariant in the embedded crop table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("{crop}: {month} appears in {occurrences} month sets (expected exactly 1)")]
    MonthPartition { crop: Crop, month: Month, occurrences: usize },

    #[error("{crop}: month sets list {listed} months (expected 12)")]
    MonthCount { crop: Crop, listed: usize },

    #[error("{crop}: {soil} appears in more than one soil list")]
    SoilOverlap { crop: Crop, soil: SoilType },

    #[error("{crop}: invalid rainfall band {min}-{max} mm")]
    RainfallBand { crop: Crop, min: f64, max: f64 },
}

/// Rejected form submission.
///
/// Variants name the precise cause for logs; users only ever see
/// [`GENERIC_PREDICTION_ERROR`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    #[error("unknown crop: {0:?}")]
    UnknownCrop(String),

    #[error("unknown soil type: {0:?}")]
    UnknownSoil(String),

    #[error("soil type {0} is not selectable")]
    UnselectableSoil(SoilType),

    #[error("invalid month: {0:?}")]
    InvalidMonth(String),

    #[error("unknown measurement type: {0:?}")]
    UnknownMeasurementType(String),

    #[error("unknown rainfall category: {0:?}")]
    UnknownRainfallCategory(String),

    #[error("rainfall is not a number: {0:?}")]
    MalformedRainfall(String),

    #[error("rainfall {value} mm outside 0-{max} mm")]
    RainfallOutOfRange { value: f64, max: f64 },

    #[error("batch of {count} submissions exceeds the limit of {max}")]
    TooManySubmissions { count: usize, max: usize },
}

impl FormError {
    /// Message safe to show the user
    pub fn user_message(&self) -> &'static str {
        GENERIC_PREDICTION_ERROR
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
