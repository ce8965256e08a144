//! CropSmart Suitability Engine
//!
//! Rule-based crop suitability: scores a crop against planting month,
//! rainfall and soil using static reference tables.
//!
//! - `suitability/`: Reference tables, evaluator and advice
//! - `screening`: Crop-agnostic rainfall screen (separate rule)
//! - `form`: Raw form validation into typed requests
//! - `api_server`: Axum JSON service (feature `api`)

pub mod error;
pub mod form;
pub mod screening;
pub mod suitability;

#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{FormError, TableError};
pub use form::FormSubmission;
pub use screening::{screen_rainfall, ScreeningOutcome};
pub use suitability::{
    assess, evaluate_month, evaluate_overall, evaluate_rainfall, evaluate_soil, Crop,
    EvaluationRequest, Month, OverallVerdict, RainfallCategory, RainfallInput, SoilType,
    SuitabilityAssessment, SuitabilityLevel, SuitabilityResult,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "api")]
pub use config::ServerConfig;
