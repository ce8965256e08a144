//! Crop Suitability Engine
//!
//! Scores a crop against a planting month, rainfall and soil type using
//! static reference tables, then folds the three results into an overall
//! verdict.
//!
//! ## Scoring
//! Each dimension yields high / medium / low (3 / 2 / 1 points). A total of
//! 8-9 is highly suitable, 5-7 moderately suitable, 3-4 low suitability.
//!
//! ## Architecture
//! - `month.rs` - Month enum (1-12) and form parsing
//! - `crop_profile.rs` - Crop and soil enums + the embedded crop table
//! - `rainfall.rs` - Rainfall categories, inputs and the tolerance band
//! - `assessment.rs` - Result, verdict and request/assessment structs
//! - `evaluator.rs` - Per-dimension and overall evaluation
//! - `advice.rs` - Seasonal context, recommendations, markdown output

pub mod month;
pub mod crop_profile;
pub mod rainfall;
pub mod assessment;
pub mod evaluator;
pub mod advice;

// Re-export public API
pub use month::Month;
pub use crop_profile::{Crop, CropProfile, MonthSuitability, SoilPreference, SoilType};
pub use rainfall::{RainfallBand, RainfallCategory, RainfallCategoryInfo, RainfallInput};
pub use assessment::{
    EvaluationRequest,
    OverallVerdict,
    SuitabilityAssessment,
    SuitabilityLevel,
    SuitabilityResult,
};
pub use evaluator::{
    assess,
    evaluate_month,
    evaluate_overall,
    evaluate_rainfall,
    evaluate_rainfall_input,
    evaluate_soil,
};
pub use advice::{Season, detailed_recommendations, render_markdown, seasonal_context};
