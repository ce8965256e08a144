//! Suitability Integration Tests
//!
//! End-to-end checks from raw form fields through validation, evaluation
//! and markdown rendering, plus table-wide invariants.

use approx::assert_relative_eq;
use cropsmart::suitability::{
    crop_profile, evaluate_overall, evaluate_rainfall, evaluate_soil, render_markdown,
    SuitabilityLevel,
};
use cropsmart::{assess, screen_rainfall, Crop, FormSubmission, Month, RainfallInput, SoilType};

fn form(crop: &str, soil: &str, month: &str, exact_mm: &str) -> FormSubmission {
    FormSubmission {
        crop: crop.to_string(),
        soil: soil.to_string(),
        month: month.to_string(),
        measurement_type: "exact".to_string(),
        exact_rainfall: exact_mm.to_string(),
        ..FormSubmission::default()
    }
}

#[test]
fn test_crop_table_invariants() {
    crop_profile::validate_all().expect("embedded crop table is consistent");

    for crop in Crop::all() {
        let months = &crop.profile().suitable_months;
        let mut counts = [0u8; 12];
        for month in months.high.iter().chain(months.medium).chain(months.low) {
            counts[usize::from(month.number() - 1)] += 1;
        }
        assert_eq!(counts, [1; 12], "{} month sets must partition the year", crop);
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(evaluate_rainfall(Crop::Rice, 150.0).level, SuitabilityLevel::High);
    assert_eq!(evaluate_rainfall(Crop::Rice, 90.0).level, SuitabilityLevel::Medium);
    assert_eq!(evaluate_soil(Crop::Rice, SoilType::Clay).level, SuitabilityLevel::High);
    assert_eq!(evaluate_soil(Crop::Rice, SoilType::Sandy).level, SuitabilityLevel::Low);

    let verdict = evaluate_overall(Crop::Rice, Month::August, RainfallInput::Exact(150.0), SoilType::ClayLoam);
    assert_eq!(verdict.level, SuitabilityLevel::High);
    assert_eq!(verdict.message, "Highly Suitable for Rice");
}

#[test]
fn test_every_verdict_score_in_range() {
    for crop in Crop::all() {
        for month in Month::all() {
            for soil in SoilType::selectable() {
                for mm in [0.0, 30.0, 75.0, 150.0, 400.0] {
                    let verdict = evaluate_overall(*crop, *month, RainfallInput::Exact(mm), *soil);
                    assert!((3..=9).contains(&verdict.total_score));
                    assert_eq!(verdict.level, SuitabilityLevel::from_total(verdict.total_score));
                }
            }
        }
    }
}

#[test]
fn test_form_to_markdown() {
    let request = form("potatoes", "sandy loam", "oct", "50").validate().unwrap();
    let assessment = assess(&request);

    assert_eq!(assessment.overall.total_score, 9);
    assert_relative_eq!(assessment.rainfall_mm, 50.0);

    let markdown = render_markdown(&assessment);
    assert!(markdown.starts_with("## Growing Potatoes in October"));
    assert!(markdown.contains("Highly Suitable for Potatoes"));
    assert!(!markdown.contains("### Recommendations"));
}

#[test]
fn test_rejected_form_reports_generic_message() {
    let err = form("Rice", "Clay", "7", "abc").validate().unwrap_err();
    assert_eq!(err.user_message(), "Error making prediction. Please try again.");
}

#[test]
fn test_rules_are_independent() {
    // The rainfall screen passes 250 mm for any crop, while the table-driven
    // evaluator rates it low for Onions (band 35-70, tolerated up to 91).
    assert!(screen_rainfall(250.0).suitable);
    assert_eq!(evaluate_rainfall(Crop::Onions, 250.0).level, SuitabilityLevel::Low);
}
