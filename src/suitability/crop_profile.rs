//! Crop Profiles
//!
//! Static reference table of the ten supported crops: ranked planting
//! months, ranked soil preferences and the ideal rainfall band. Profiles are
//! process-wide constants; nothing here is mutated after startup.
//!
//! Crop and soil names are closed enums. Raw form strings are resolved
//! through a normalized-name index built once on first use.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::month::Month;
use crate::error::TableError;

// ============================================================================
// Crop
// ============================================================================

/// Supported crops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Rice,
    Wheat,
    Corn,
    Sugarcane,
    Cotton,
    Soybeans,
    Potatoes,
    Tomatoes,
    Onions,
    Peanuts,
}

impl Crop {
    pub fn display_name(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Corn => "Corn",
            Crop::Sugarcane => "Sugarcane",
            Crop::Cotton => "Cotton",
            Crop::Soybeans => "Soybeans",
            Crop::Potatoes => "Potatoes",
            Crop::Tomatoes => "Tomatoes",
            Crop::Onions => "Onions",
            Crop::Peanuts => "Peanuts",
        }
    }

    /// Reference profile for this crop
    pub fn profile(&self) -> &'static CropProfile {
        match self {
            Crop::Rice => &RICE,
            Crop::Wheat => &WHEAT,
            Crop::Corn => &CORN,
            Crop::Sugarcane => &SUGARCANE,
            Crop::Cotton => &COTTON,
            Crop::Soybeans => &SOYBEANS,
            Crop::Potatoes => &POTATOES,
            Crop::Tomatoes => &TOMATOES,
            Crop::Onions => &ONIONS,
            Crop::Peanuts => &PEANUTS,
        }
    }

    /// Resolve a form value (case-insensitive, surrounding whitespace ignored)
    pub fn parse(input: &str) -> Option<Self> {
        static INDEX: OnceLock<FxHashMap<String, Crop>> = OnceLock::new();
        INDEX
            .get_or_init(|| build_name_index(Crop::all(), Crop::display_name))
            .get(&normalize_name(input))
            .copied()
    }

    /// All crops in form order
    pub fn all() -> &'static [Crop] {
        &[
            Crop::Rice,
            Crop::Wheat,
            Crop::Corn,
            Crop::Sugarcane,
            Crop::Cotton,
            Crop::Soybeans,
            Crop::Potatoes,
            Crop::Tomatoes,
            Crop::Onions,
            Crop::Peanuts,
        ]
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Soil
// ============================================================================

/// Soil types.
///
/// The first six are the choices offered on the form. The remaining four
/// only appear inside individual crop preference lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Clay,
    #[serde(rename = "Clay Loam")]
    ClayLoam,
    #[serde(rename = "Silt Loam")]
    SiltLoam,
    Loam,
    #[serde(rename = "Sandy Loam")]
    SandyLoam,
    Sandy,
    #[serde(rename = "Black Cotton Soil")]
    BlackCottonSoil,
    Silt,
    #[serde(rename = "Heavy Clay")]
    HeavyClay,
    #[serde(rename = "Red Soil")]
    RedSoil,
}

impl SoilType {
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::SiltLoam => "Silt Loam",
            SoilType::Loam => "Loam",
            SoilType::SandyLoam => "Sandy Loam",
            SoilType::Sandy => "Sandy",
            SoilType::BlackCottonSoil => "Black Cotton Soil",
            SoilType::Silt => "Silt",
            SoilType::HeavyClay => "Heavy Clay",
            SoilType::RedSoil => "Red Soil",
        }
    }

    /// Soils a user can pick on the form
    pub fn selectable() -> &'static [SoilType] {
        &[
            SoilType::Clay,
            SoilType::ClayLoam,
            SoilType::SiltLoam,
            SoilType::Loam,
            SoilType::SandyLoam,
            SoilType::Sandy,
        ]
    }

    pub fn is_selectable(&self) -> bool {
        Self::selectable().contains(self)
    }

    /// Every soil referenced anywhere in the crop tables
    pub fn all() -> &'static [SoilType] {
        &[
            SoilType::Clay,
            SoilType::ClayLoam,
            SoilType::SiltLoam,
            SoilType::Loam,
            SoilType::SandyLoam,
            SoilType::Sandy,
            SoilType::BlackCottonSoil,
            SoilType::Silt,
            SoilType::HeavyClay,
            SoilType::RedSoil,
        ]
    }

    /// Resolve a form value (case-insensitive, inner whitespace collapsed)
    pub fn parse(input: &str) -> Option<Self> {
        static INDEX: OnceLock<FxHashMap<String, SoilType>> = OnceLock::new();
        INDEX
            .get_or_init(|| build_name_index(SoilType::all(), SoilType::display_name))
            .get(&normalize_name(input))
            .copied()
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn normalize_name(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

fn build_name_index<T: Copy>(
    variants: &[T],
    name: fn(&T) -> &'static str,
) -> FxHashMap<String, T> {
    variants
        .iter()
        .map(|v| (normalize_name(name(v)), *v))
        .collect()
}

// ============================================================================
// Profile
// ============================================================================

/// Months ranked by planting suitability. The three sets partition 1-12.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSuitability {
    pub high: &'static [Month],
    pub medium: &'static [Month],
    pub low: &'static [Month],
}

/// Soils ranked by preference. The three lists are disjoint.
#[derive(Debug, Clone, Serialize)]
pub struct SoilPreference {
    pub high: &'static [SoilType],
    pub medium: &'static [SoilType],
    pub low: &'static [SoilType],
}

/// Growing conditions for a single crop
#[derive(Debug, Clone, Serialize)]
pub struct CropProfile {
    pub crop: Crop,
    pub suitable_months: MonthSuitability,
    pub soil_preference: SoilPreference,
    /// Lower bound of the ideal rainfall band (mm)
    pub min_rainfall: f64,
    /// Upper bound of the ideal rainfall band (mm)
    pub max_rainfall: f64,
}

impl CropProfile {
    /// Check the table invariants: month sets partition 1-12, soil lists are
    /// disjoint, and the rainfall band is ordered.
    pub fn validate(&self) -> Result<(), TableError> {
        let months = &self.suitable_months;
        for month in Month::all() {
            let occurrences = [months.high, months.medium, months.low]
                .iter()
                .filter(|set| set.contains(month))
                .count();
            if occurrences != 1 {
                return Err(TableError::MonthPartition {
                    crop: self.crop,
                    month: *month,
                    occurrences,
                });
            }
        }
        let listed = months.high.len() + months.medium.len() + months.low.len();
        if listed != Month::all().len() {
            return Err(TableError::MonthCount { crop: self.crop, listed });
        }

        let soils = &self.soil_preference;
        for soil in SoilType::all() {
            let occurrences = [soils.high, soils.medium, soils.low]
                .iter()
                .map(|list| list.iter().filter(|s| *s == soil).count())
                .sum::<usize>();
            if occurrences > 1 {
                return Err(TableError::SoilOverlap { crop: self.crop, soil: *soil });
            }
        }

        if !(self.min_rainfall >= 0.0 && self.min_rainfall <= self.max_rainfall) {
            return Err(TableError::RainfallBand {
                crop: self.crop,
                min: self.min_rainfall,
                max: self.max_rainfall,
            });
        }

        Ok(())
    }

    /// First month of the high set, used as the target planting month
    pub fn best_month(&self) -> Option<Month> {
        self.suitable_months.high.first().copied()
    }
}

/// Validate every crop profile in the table
pub fn validate_all() -> Result<(), TableError> {
    Crop::all().iter().try_for_each(|crop| crop.profile().validate())
}

// ============================================================================
// EMBEDDED CROP TABLE
// ============================================================================

use super::month::Month::*;
use self::SoilType::*;

static RICE: CropProfile = CropProfile {
    crop: Crop::Rice,
    suitable_months: MonthSuitability {
        high: &[June, July, August], // Kharif season (monsoon)
        medium: &[May, September],
        low: &[January, February, March, April, October, November, December],
    },
    soil_preference: SoilPreference {
        high: &[Clay, ClayLoam], // water retention
        medium: &[SiltLoam, Loam],
        low: &[Sandy, SandyLoam],
    },
    min_rainfall: 100.0,
    max_rainfall: 200.0,
};

static WHEAT: CropProfile = CropProfile {
    crop: Crop::Wheat,
    suitable_months: MonthSuitability {
        high: &[October, November], // Rabi sowing
        medium: &[September, December],
        low: &[January, February, March, April, May, June, July, August],
    },
    soil_preference: SoilPreference {
        high: &[Loam, ClayLoam],
        medium: &[SiltLoam, SandyLoam],
        low: &[Clay, Sandy],
    },
    min_rainfall: 40.0,
    max_rainfall: 110.0,
};

static CORN: CropProfile = CropProfile {
    crop: Crop::Corn,
    suitable_months: MonthSuitability {
        high: &[June, July],
        medium: &[February, March, August],
        low: &[January, April, May, September, October, November, December],
    },
    soil_preference: SoilPreference {
        high: &[Loam, SiltLoam],
        medium: &[ClayLoam, SandyLoam],
        low: &[Clay, Sandy],
    },
    min_rainfall: 50.0,
    max_rainfall: 100.0,
};

static SUGARCANE: CropProfile = CropProfile {
    crop: Crop::Sugarcane,
    suitable_months: MonthSuitability {
        high: &[February, March], // spring planting
        medium: &[September, October],
        low: &[January, April, May, June, July, August, November, December],
    },
    soil_preference: SoilPreference {
        high: &[Loam, SandyLoam],
        medium: &[ClayLoam, SiltLoam],
        low: &[Clay, Sandy],
    },
    min_rainfall: 75.0,
    max_rainfall: 150.0,
};

static COTTON: CropProfile = CropProfile {
    crop: Crop::Cotton,
    suitable_months: MonthSuitability {
        high: &[April, May],
        medium: &[March, June],
        low: &[January, February, July, August, September, October, November, December],
    },
    soil_preference: SoilPreference {
        high: &[BlackCottonSoil, ClayLoam],
        medium: &[Loam, SandyLoam],
        low: &[Sandy, Silt],
    },
    min_rainfall: 50.0,
    max_rainfall: 100.0,
};

static SOYBEANS: CropProfile = CropProfile {
    crop: Crop::Soybeans,
    suitable_months: MonthSuitability {
        high: &[June, July],
        medium: &[May, August],
        low: &[January, February, March, April, September, October, November, December],
    },
    soil_preference: SoilPreference {
        high: &[Loam, ClayLoam],
        medium: &[SiltLoam, SandyLoam],
        low: &[Sandy, HeavyClay],
    },
    min_rainfall: 45.0,
    max_rainfall: 100.0,
};

static POTATOES: CropProfile = CropProfile {
    crop: Crop::Potatoes,
    suitable_months: MonthSuitability {
        high: &[October, November],
        medium: &[September, December],
        low: &[January, February, March, April, May, June, July, August],
    },
    soil_preference: SoilPreference {
        high: &[SandyLoam, Loam],
        medium: &[SiltLoam, ClayLoam],
        low: &[Clay, Sandy],
    },
    min_rainfall: 35.0,
    max_rainfall: 75.0,
};

static TOMATOES: CropProfile = CropProfile {
    crop: Crop::Tomatoes,
    suitable_months: MonthSuitability {
        high: &[July, August],
        medium: &[June, September, February, March],
        low: &[January, April, May, October, November, December],
    },
    soil_preference: SoilPreference {
        high: &[Loam, SandyLoam],
        medium: &[SiltLoam, ClayLoam],
        low: &[Clay, Sandy],
    },
    min_rainfall: 40.0,
    max_rainfall: 80.0,
};

static ONIONS: CropProfile = CropProfile {
    crop: Crop::Onions,
    suitable_months: MonthSuitability {
        high: &[October, November],
        medium: &[September, December],
        low: &[January, February, March, April, May, June, July, August],
    },
    soil_preference: SoilPreference {
        high: &[Loam, SandyLoam],
        medium: &[SiltLoam, ClayLoam],
        low: &[Clay, Sandy],
    },
    min_rainfall: 35.0,
    max_rainfall: 70.0,
};

static PEANUTS: CropProfile = CropProfile {
    crop: Crop::Peanuts,
    suitable_months: MonthSuitability {
        high: &[June, July],
        medium: &[May, August],
        low: &[January, February, March, April, September, October, November, December],
    },
    soil_preference: SoilPreference {
        high: &[SandyLoam, Loam],
        medium: &[RedSoil, ClayLoam],
        low: &[HeavyClay, Sandy],
    },
    min_rainfall: 50.0,
    max_rainfall: 90.0,
};
