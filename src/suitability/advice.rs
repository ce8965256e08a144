//! Advice Generation
//!
//! Seasonal context and follow-up recommendations for an assessment, plus a
//! friendly markdown rendering of the whole result.

use serde::Serialize;

use super::assessment::{SuitabilityAssessment, SuitabilityLevel, SuitabilityResult};
use super::crop_profile::{Crop, SoilType};
use super::month::Month;

/// Coarse season for a planting month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Winter,
    Spring,
    Monsoon,
    Autumn,
}

impl Season {
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Monsoon => "Monsoon",
            Season::Autumn => "Autumn",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Season a month falls in
pub fn seasonal_context(month: Month) -> Season {
    match month {
        Month::December | Month::January | Month::February => Season::Winter,
        Month::March | Month::April | Month::May => Season::Spring,
        Month::June | Month::July | Month::August => Season::Monsoon,
        _ => Season::Autumn,
    }
}

/// Months from `month` until the crop's first ideal planting month.
///
/// Returns 0 when the target is the current month. `None` only if the crop
/// has no ideal months at all.
pub fn months_until_ideal(crop: Crop, month: Month) -> Option<u8> {
    let target = crop.profile().best_month()?;
    Some((target.number() + 12 - month.number()) % 12)
}

/// Follow-up recommendations for weak month and soil fits.
///
/// Rainfall never produces a recommendation.
pub fn detailed_recommendations(
    crop: Crop,
    month: Month,
    soil: SoilType,
    month_fit: &SuitabilityResult,
    soil_fit: &SuitabilityResult,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if month_fit.level == SuitabilityLevel::Low {
        if let Some(wait) = months_until_ideal(crop, month) {
            recommendations.push(format!(
                "Current season ({}) is not suitable. Wait approximately {} months for optimal planting time.",
                seasonal_context(month),
                wait
            ));
        }
    }

    if soil_fit.level == SuitabilityLevel::Low {
        let best_soils = crop
            .profile()
            .soil_preference
            .high
            .iter()
            .map(SoilType::display_name)
            .collect::<Vec<_>>()
            .join(" or ");
        recommendations.push(format!(
            "Consider soil amendments to make your {} soil more similar to {} conditions.",
            soil, best_soils
        ));
    }

    recommendations
}

fn level_marker(level: SuitabilityLevel) -> &'static str {
    match level {
        SuitabilityLevel::High => "✅",
        SuitabilityLevel::Medium => "⚠️",
        SuitabilityLevel::Low => "❌",
    }
}

/// Render an assessment as a markdown section
pub fn render_markdown(assessment: &SuitabilityAssessment) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "## Growing {} in {}",
        assessment.crop, assessment.month
    ));
    lines.push(String::new());

    lines.push(format!(
        "**{}** {} (score {}/9)",
        assessment.overall.message,
        level_marker(assessment.overall.level),
        assessment.overall.total_score
    ));
    lines.push(String::new());

    lines.push("| Factor | Rating | Notes |".to_string());
    lines.push("|--------|--------|-------|".to_string());
    for (factor, fit) in [
        ("Planting month", &assessment.month_fit),
        ("Rainfall", &assessment.rainfall_fit),
        ("Soil", &assessment.soil_fit),
    ] {
        lines.push(format!(
            "| {} | {} {} | {} |",
            factor,
            level_marker(fit.level),
            fit.level.display_text(),
            fit.message
        ));
    }
    lines.push(String::new());

    lines.push(format!(
        "*Season: {} · Rainfall used: {:.0} mm · Soil: {}*",
        assessment.season, assessment.rainfall_mm, assessment.soil
    ));

    if !assessment.recommendations.is_empty() {
        lines.push(String::new());
        lines.push("### Recommendations".to_string());
        lines.push(String::new());
        for rec in &assessment.recommendations {
            lines.push(format!("- {}", rec));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low(msg: &str) -> SuitabilityResult {
        SuitabilityResult::new(SuitabilityLevel::Low, msg)
    }

    fn high(msg: &str) -> SuitabilityResult {
        SuitabilityResult::new(SuitabilityLevel::High, msg)
    }

    #[test]
    fn test_seasons() {
        assert_eq!(seasonal_context(Month::December), Season::Winter);
        assert_eq!(seasonal_context(Month::February), Season::Winter);
        assert_eq!(seasonal_context(Month::April), Season::Spring);
        assert_eq!(seasonal_context(Month::August), Season::Monsoon);
        assert_eq!(seasonal_context(Month::September), Season::Autumn);
        assert_eq!(seasonal_context(Month::November), Season::Autumn);
    }

    #[test]
    fn test_months_until_ideal_wraps_year() {
        // Rice is best planted in June
        assert_eq!(months_until_ideal(Crop::Rice, Month::January), Some(5));
        assert_eq!(months_until_ideal(Crop::Rice, Month::October), Some(8));
        assert_eq!(months_until_ideal(Crop::Rice, Month::June), Some(0));
    }

    #[test]
    fn test_recommendations_for_weak_month_and_soil() {
        let recs = detailed_recommendations(
            Crop::Rice,
            Month::January,
            SoilType::Sandy,
            &low("month"),
            &low("soil"),
        );
        assert_eq!(recs.len(), 2);
        assert_eq!(
            recs[0],
            "Current season (Winter) is not suitable. Wait approximately 5 months for optimal planting time."
        );
        assert_eq!(
            recs[1],
            "Consider soil amendments to make your Sandy soil more similar to Clay or Clay Loam conditions."
        );
    }

    #[test]
    fn test_no_recommendations_when_fits_are_good() {
        let recs = detailed_recommendations(
            Crop::Wheat,
            Month::October,
            SoilType::Loam,
            &high("month"),
            &high("soil"),
        );
        assert!(recs.is_empty());
    }
}
