//! Suitability Assessment Types
//!
//! Output structures for the evaluator: a tri-level result per dimension
//! and the aggregate verdict derived from their scores.

use serde::{Deserialize, Serialize};

use super::advice::Season;
use super::crop_profile::{Crop, SoilType};
use super::month::Month;
use super::rainfall::RainfallInput;

/// Minimum total score for a `High` overall verdict
pub const HIGH_THRESHOLD: u8 = 8;

/// Minimum total score for a `Medium` overall verdict
pub const MEDIUM_THRESHOLD: u8 = 5;

/// Tri-level outcome of a single evaluation dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityLevel {
    Low,
    Medium,
    High,
}

impl SuitabilityLevel {
    /// Points contributed to the overall score
    pub fn score(&self) -> u8 {
        match self {
            SuitabilityLevel::High => 3,
            SuitabilityLevel::Medium => 2,
            SuitabilityLevel::Low => 1,
        }
    }

    /// Level for an overall score (3-9). Lower bounds are inclusive.
    pub fn from_total(total: u8) -> Self {
        if total >= HIGH_THRESHOLD {
            SuitabilityLevel::High
        } else if total >= MEDIUM_THRESHOLD {
            SuitabilityLevel::Medium
        } else {
            SuitabilityLevel::Low
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            SuitabilityLevel::High => "High",
            SuitabilityLevel::Medium => "Medium",
            SuitabilityLevel::Low => "Low",
        }
    }
}

/// Level plus human-readable explanation for one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuitabilityResult {
    pub level: SuitabilityLevel,
    pub message: String,
}

impl SuitabilityResult {
    pub fn new(level: SuitabilityLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }
}

/// Aggregate verdict for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallVerdict {
    pub level: SuitabilityLevel,
    pub message: String,
    /// Sum of the three dimension scores (3-9)
    pub total_score: u8,
}

impl OverallVerdict {
    /// Combine three dimension levels into a verdict for `crop`
    pub fn from_levels(crop: Crop, levels: [SuitabilityLevel; 3]) -> Self {
        let total_score = levels.iter().map(SuitabilityLevel::score).sum();
        let level = SuitabilityLevel::from_total(total_score);
        let message = match level {
            SuitabilityLevel::High => format!("Highly Suitable for {}", crop),
            SuitabilityLevel::Medium => format!("Moderately Suitable for {}", crop),
            SuitabilityLevel::Low => format!("Low Suitability for {}", crop),
        };

        Self { level, message, total_score }
    }
}

/// Validated inputs for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub crop: Crop,
    pub soil: SoilType,
    pub rainfall: RainfallInput,
    pub month: Month,
}

/// Complete assessment of one submission
#[derive(Debug, Clone, Serialize)]
pub struct SuitabilityAssessment {
    pub crop: Crop,
    pub soil: SoilType,
    pub month: Month,
    /// Rainfall value the evaluation used (mm)
    pub rainfall_mm: f64,

    pub month_fit: SuitabilityResult,
    pub rainfall_fit: SuitabilityResult,
    pub soil_fit: SuitabilityResult,
    pub overall: OverallVerdict,

    pub season: Season,
    pub recommendations: Vec<String>,
}
