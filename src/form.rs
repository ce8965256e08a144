//! Form Boundary
//!
//! Raw string fields from a form submission and their validation into a
//! typed [`EvaluationRequest`]. The evaluator assumes its inputs are in
//! range, so every range check lives here.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::suitability::rainfall::MAX_EXACT_RAINFALL_MM;
use crate::suitability::{Crop, EvaluationRequest, Month, RainfallCategory, RainfallInput, SoilType};

/// How the rainfall field was filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementType {
    Category,
    Exact,
}

impl MeasurementType {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "category" => Some(MeasurementType::Category),
            "exact" => Some(MeasurementType::Exact),
            _ => None,
        }
    }
}

/// Raw form fields as submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    pub crop: String,
    pub soil: String,
    /// Month number (1-12) or name
    #[serde(deserialize_with = "string_or_number")]
    pub month: String,
    /// "category" or "exact"; defaults to category when empty
    pub measurement_type: String,
    pub rainfall_category: String,
    #[serde(deserialize_with = "string_or_number")]
    pub exact_rainfall: String,
}

impl FormSubmission {
    /// Validate every field and build a typed request
    pub fn validate(&self) -> Result<EvaluationRequest> {
        let crop = parse_crop(&self.crop)?;
        let soil = parse_soil(&self.soil)?;
        let month = parse_month(&self.month)?;
        let rainfall = self.parse_rainfall()?;

        Ok(EvaluationRequest { crop, soil, rainfall, month })
    }

    fn parse_rainfall(&self) -> Result<RainfallInput> {
        let measurement = if self.measurement_type.trim().is_empty() {
            MeasurementType::Category
        } else {
            MeasurementType::parse(&self.measurement_type)
                .ok_or_else(|| FormError::UnknownMeasurementType(self.measurement_type.clone()))?
        };

        match measurement {
            MeasurementType::Category => {
                let raw = required("rainfall_category", &self.rainfall_category)?;
                RainfallCategory::parse(raw)
                    .map(RainfallInput::Category)
                    .ok_or_else(|| FormError::UnknownRainfallCategory(raw.to_string()))
            }
            MeasurementType::Exact => {
                let raw = required("exact_rainfall", &self.exact_rainfall)?;
                parse_exact_rainfall(raw).map(RainfallInput::Exact)
            }
        }
    }
}

/// Accept a JSON string, number or null for a text field. Numbers keep
/// their textual form so validation sees what the client sent.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingField { field })
    } else {
        Ok(value)
    }
}

pub fn parse_crop(raw: &str) -> Result<Crop> {
    let raw = required("crop", raw)?;
    Crop::parse(raw).ok_or_else(|| FormError::UnknownCrop(raw.to_string()))
}

/// Only the soils offered on the form are accepted
pub fn parse_soil(raw: &str) -> Result<SoilType> {
    let raw = required("soil", raw)?;
    let soil = SoilType::parse(raw).ok_or_else(|| FormError::UnknownSoil(raw.to_string()))?;
    if soil.is_selectable() {
        Ok(soil)
    } else {
        Err(FormError::UnselectableSoil(soil))
    }
}

pub fn parse_month(raw: &str) -> Result<Month> {
    let raw = required("month", raw)?;
    Month::parse(raw).ok_or_else(|| FormError::InvalidMonth(raw.to_string()))
}

/// Parse an exact reading; must be finite and within 0-1000 mm
pub fn parse_exact_rainfall(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FormError::MalformedRainfall(raw.to_string()))?;
    check_rainfall_range(value)
}

/// Range check shared with callers that already hold a number
pub fn check_rainfall_range(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FormError::MalformedRainfall(value.to_string()));
    }
    if !(0.0..=MAX_EXACT_RAINFALL_MM).contains(&value) {
        return Err(FormError::RainfallOutOfRange { value, max: MAX_EXACT_RAINFALL_MM });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_PREDICTION_ERROR;

    fn submission() -> FormSubmission {
        FormSubmission {
            crop: "Rice".to_string(),
            soil: "Clay Loam".to_string(),
            month: "7".to_string(),
            measurement_type: "category".to_string(),
            rainfall_category: "moderate".to_string(),
            exact_rainfall: "50".to_string(),
        }
    }

    #[test]
    fn test_valid_category_submission() {
        let request = submission().validate().unwrap();
        assert_eq!(request.crop, Crop::Rice);
        assert_eq!(request.soil, SoilType::ClayLoam);
        assert_eq!(request.month, Month::July);
        assert_eq!(request.rainfall, RainfallInput::Category(RainfallCategory::Moderate));
    }

    #[test]
    fn test_valid_exact_submission() {
        let form = FormSubmission {
            measurement_type: "exact".to_string(),
            exact_rainfall: " 123.5 ".to_string(),
            month: "March".to_string(),
            ..submission()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.rainfall, RainfallInput::Exact(123.5));
        assert_eq!(request.month, Month::March);
    }

    #[test]
    fn test_measurement_type_parse() {
        assert_eq!(MeasurementType::parse(" Exact "), Some(MeasurementType::Exact));
        assert_eq!(MeasurementType::parse("CATEGORY"), Some(MeasurementType::Category));
        assert_eq!(MeasurementType::parse("guess"), None);
    }

    #[test]
    fn test_empty_measurement_type_defaults_to_category() {
        let form = FormSubmission { measurement_type: String::new(), ..submission() };
        assert!(matches!(form.validate().unwrap().rainfall, RainfallInput::Category(_)));
    }

    #[test]
    fn test_rejects_out_of_range_rainfall() {
        for raw in ["1001", "-1", "NaN", "inf", "lots"] {
            let form = FormSubmission {
                measurement_type: "exact".to_string(),
                exact_rainfall: raw.to_string(),
                ..submission()
            };
            let err = form.validate().unwrap_err();
            assert!(
                matches!(err, FormError::RainfallOutOfRange { .. } | FormError::MalformedRainfall(_)),
                "{} -> {:?}",
                raw,
                err
            );
        }
        assert_eq!(parse_exact_rainfall("1000").unwrap(), 1000.0);
        assert_eq!(parse_exact_rainfall("0").unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_bad_fields() {
        let form = FormSubmission { month: "13".to_string(), ..submission() };
        assert_eq!(form.validate().unwrap_err(), FormError::InvalidMonth("13".to_string()));

        let form = FormSubmission { crop: "Barley".to_string(), ..submission() };
        assert!(matches!(form.validate().unwrap_err(), FormError::UnknownCrop(_)));

        let form = FormSubmission { soil: "Red Soil".to_string(), ..submission() };
        assert_eq!(form.validate().unwrap_err(), FormError::UnselectableSoil(SoilType::RedSoil));

        let form = FormSubmission { crop: "  ".to_string(), ..submission() };
        assert_eq!(form.validate().unwrap_err(), FormError::MissingField { field: "crop" });

        let form = FormSubmission { rainfall_category: "torrential".to_string(), ..submission() };
        assert!(matches!(form.validate().unwrap_err(), FormError::UnknownRainfallCategory(_)));
    }

    #[test]
    fn test_numeric_json_fields() {
        let form: FormSubmission = serde_json::from_value(serde_json::json!({
            "crop": "Rice",
            "soil": "Clay",
            "month": 7,
            "measurement_type": "exact",
            "exact_rainfall": 123.5
        }))
        .unwrap();
        assert_eq!(form.month, "7");
        assert_eq!(form.exact_rainfall, "123.5");

        let request = form.validate().unwrap();
        assert_eq!(request.month, Month::July);
        assert_eq!(request.rainfall, RainfallInput::Exact(123.5));

        let form: FormSubmission =
            serde_json::from_value(serde_json::json!({ "month": null, "exact_rainfall": 150 })).unwrap();
        assert_eq!(form.month, "");
        assert_eq!(form.exact_rainfall, "150");
    }

    #[test]
    fn test_user_message_is_generic() {
        let err = FormSubmission { month: "0".to_string(), ..submission() }
            .validate()
            .unwrap_err();
        assert_eq!(err.user_message(), GENERIC_PREDICTION_ERROR);
    }
}
