//! Rainfall Inputs
//!
//! A rainfall reading arrives either as an exact millimeter value or as one
//! of three coarse categories. Categories resolve to a fixed representative
//! value before comparison with a crop's rainfall band.

use serde::{Deserialize, Serialize};

/// Lower tolerance factor applied to a crop's minimum rainfall for the
/// medium band.
pub const LOWER_TOLERANCE: f64 = 0.7;

/// Upper tolerance factor applied to a crop's maximum rainfall for the
/// medium band.
pub const UPPER_TOLERANCE: f64 = 1.3;

/// Largest exact reading accepted from the form (mm)
pub const MAX_EXACT_RAINFALL_MM: f64 = 1000.0;

/// Coarse rainfall category offered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainfallCategory {
    Light,
    Moderate,
    Heavy,
}

/// Label and representative value for a rainfall category
#[derive(Debug, Clone, Serialize)]
pub struct RainfallCategoryInfo {
    pub category: RainfallCategory,
    pub label: &'static str,
    pub value: f64,
}

static RAINFALL_CATEGORIES: &[RainfallCategoryInfo] = &[
    RainfallCategoryInfo { category: RainfallCategory::Light, label: "Light Rainfall (0-50mm)", value: 25.0 },
    RainfallCategoryInfo { category: RainfallCategory::Moderate, label: "Moderate Rainfall (50-100mm)", value: 75.0 },
    RainfallCategoryInfo { category: RainfallCategory::Heavy, label: "Heavy Rainfall (100-200mm)", value: 150.0 },
];

impl RainfallCategory {
    /// Table entry for this category
    pub fn info(&self) -> &'static RainfallCategoryInfo {
        match self {
            RainfallCategory::Light => &RAINFALL_CATEGORIES[0],
            RainfallCategory::Moderate => &RAINFALL_CATEGORIES[1],
            RainfallCategory::Heavy => &RAINFALL_CATEGORIES[2],
        }
    }

    /// Representative rainfall (mm)
    pub fn representative_mm(&self) -> f64 {
        self.info().value
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "light" => Some(RainfallCategory::Light),
            "moderate" => Some(RainfallCategory::Moderate),
            "heavy" => Some(RainfallCategory::Heavy),
            _ => None,
        }
    }

    /// Full category table in form order
    pub fn table() -> &'static [RainfallCategoryInfo] {
        RAINFALL_CATEGORIES
    }
}

/// Rainfall as supplied by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RainfallInput {
    Category(RainfallCategory),
    /// Exact reading in millimeters
    Exact(f64),
}

impl RainfallInput {
    /// Millimeter value used for band comparison
    pub fn millimeters(&self) -> f64 {
        match self {
            RainfallInput::Category(category) => category.representative_mm(),
            RainfallInput::Exact(mm) => *mm,
        }
    }
}

/// Ideal and tolerated rainfall bounds for a crop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainfallBand {
    pub min: f64,
    pub max: f64,
}

impl RainfallBand {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_ideal(&self, mm: f64) -> bool {
        mm >= self.min && mm <= self.max
    }

    /// Lower edge of the medium band
    pub fn tolerated_min(&self) -> f64 {
        self.min * LOWER_TOLERANCE
    }

    /// Upper edge of the medium band
    pub fn tolerated_max(&self) -> f64 {
        self.max * UPPER_TOLERANCE
    }

    pub fn is_tolerated(&self, mm: f64) -> bool {
        mm >= self.tolerated_min() && mm <= self.tolerated_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_category_values() {
        assert_relative_eq!(RainfallCategory::Light.representative_mm(), 25.0);
        assert_relative_eq!(RainfallCategory::Moderate.representative_mm(), 75.0);
        assert_relative_eq!(RainfallCategory::Heavy.representative_mm(), 150.0);
        assert_eq!(RainfallCategory::Heavy.label(), "Heavy Rainfall (100-200mm)");
    }

    #[test]
    fn test_table_order_matches_info() {
        for info in RainfallCategory::table() {
            assert_eq!(info.category.info().category, info.category);
        }
    }

    #[test]
    fn test_band_edges() {
        let band = RainfallBand::new(100.0, 200.0);
        assert_relative_eq!(band.tolerated_min(), 70.0);
        assert_relative_eq!(band.tolerated_max(), 260.0);
        assert!(band.is_ideal(100.0));
        assert!(band.is_ideal(200.0));
        assert!(!band.is_ideal(99.9));
        assert!(band.is_tolerated(70.0));
        assert!(!band.is_tolerated(69.9));
    }

    #[test]
    fn test_input_serde_shape() {
        let input: RainfallInput =
            serde_json::from_str(r#"{"type":"category","value":"moderate"}"#).unwrap();
        assert_eq!(input, RainfallInput::Category(RainfallCategory::Moderate));
        let input: RainfallInput = serde_json::from_str(r#"{"type":"exact","value":42.5}"#).unwrap();
        assert_relative_eq!(input.millimeters(), 42.5);
    }
}
