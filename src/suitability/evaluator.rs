//! Suitability Evaluator
//!
//! Table-driven scoring of a crop against a planting month, a rainfall
//! reading and a soil type. Every function is pure; range validation of the
//! raw inputs belongs to the form boundary (`crate::form`).

use super::advice::{detailed_recommendations, seasonal_context};
use super::assessment::{
    EvaluationRequest, OverallVerdict, SuitabilityAssessment, SuitabilityLevel, SuitabilityResult,
};
use super::crop_profile::{Crop, SoilType};
use super::month::Month;
use super::rainfall::{RainfallBand, RainfallInput};

/// Rank `month` against the crop's planting calendar
pub fn evaluate_month(crop: Crop, month: Month) -> SuitabilityResult {
    let months = &crop.profile().suitable_months;

    if months.high.contains(&month) {
        SuitabilityResult::new(
            SuitabilityLevel::High,
            format!("{} is ideal for planting {}.", month, crop),
        )
    } else if months.medium.contains(&month) {
        SuitabilityResult::new(
            SuitabilityLevel::Medium,
            format!("{} is acceptable for planting {}, but not ideal.", month, crop),
        )
    } else {
        SuitabilityResult::new(
            SuitabilityLevel::Low,
            format!("{} is not recommended for planting {}.", month, crop),
        )
    }
}

/// Rank a rainfall reading (mm) against the crop's ideal band.
///
/// Inside `[min, max]` is high; inside `[0.7 × min, 1.3 × max]` is medium;
/// anything else (including NaN) is low.
pub fn evaluate_rainfall(crop: Crop, rainfall_mm: f64) -> SuitabilityResult {
    let profile = crop.profile();
    let band = RainfallBand::new(profile.min_rainfall, profile.max_rainfall);

    if band.is_ideal(rainfall_mm) {
        SuitabilityResult::new(
            SuitabilityLevel::High,
            format!("Current rainfall is ideal for {}.", crop),
        )
    } else if band.is_tolerated(rainfall_mm) {
        SuitabilityResult::new(
            SuitabilityLevel::Medium,
            format!("Rainfall conditions are acceptable but not ideal for {}.", crop),
        )
    } else {
        SuitabilityResult::new(
            SuitabilityLevel::Low,
            format!("Current rainfall is not suitable for {}.", crop),
        )
    }
}

/// Rank a rainfall input, resolving categories to their representative value
pub fn evaluate_rainfall_input(crop: Crop, rainfall: RainfallInput) -> SuitabilityResult {
    evaluate_rainfall(crop, rainfall.millimeters())
}

/// Rank a soil by membership in the crop's preference lists.
///
/// Soils absent from every list rank low.
pub fn evaluate_soil(crop: Crop, soil: SoilType) -> SuitabilityResult {
    let soils = &crop.profile().soil_preference;

    if soils.high.contains(&soil) {
        SuitabilityResult::new(
            SuitabilityLevel::High,
            format!("{} soil is ideal for {}.", soil, crop),
        )
    } else if soils.medium.contains(&soil) {
        SuitabilityResult::new(
            SuitabilityLevel::Medium,
            format!("{} soil is acceptable for {}.", soil, crop),
        )
    } else {
        SuitabilityResult::new(
            SuitabilityLevel::Low,
            format!("{} soil is not recommended for {}.", soil, crop),
        )
    }
}

/// Combine month, rainfall and soil fits into a single verdict
pub fn evaluate_overall(
    crop: Crop,
    month: Month,
    rainfall: RainfallInput,
    soil: SoilType,
) -> OverallVerdict {
    OverallVerdict::from_levels(
        crop,
        [
            evaluate_month(crop, month).level,
            evaluate_rainfall_input(crop, rainfall).level,
            evaluate_soil(crop, soil).level,
        ],
    )
}

/// Full assessment for a validated request: dimension results, verdict,
/// season and recommendations
pub fn assess(request: &EvaluationRequest) -> SuitabilityAssessment {
    let EvaluationRequest { crop, soil, rainfall, month } = *request;

    let month_fit = evaluate_month(crop, month);
    let rainfall_fit = evaluate_rainfall_input(crop, rainfall);
    let soil_fit = evaluate_soil(crop, soil);
    let overall = OverallVerdict::from_levels(
        crop,
        [month_fit.level, rainfall_fit.level, soil_fit.level],
    );
    let recommendations = detailed_recommendations(crop, month, soil, &month_fit, &soil_fit);

    SuitabilityAssessment {
        crop,
        soil,
        month,
        rainfall_mm: rainfall.millimeters(),
        month_fit,
        rainfall_fit,
        soil_fit,
        overall,
        season: seasonal_context(month),
        recommendations,
    }
}
