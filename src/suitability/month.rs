//! Calendar Month
//!
//! Planting months numbered 1-12. Out-of-range values cannot be represented,
//! so the evaluator never sees an undefined month; parsing from raw form
//! input happens in `Month::from_number` / `Month::parse`.

use serde::{Deserialize, Serialize};

/// Calendar month used for planting-window lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Month number (1 = January)
    pub fn number(&self) -> u8 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    /// Convert a month number; `None` outside 1-12
    pub fn from_number(n: u8) -> Option<Self> {
        Self::all().get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Parse a form value: a number 1-12, a full English month name, or a
    /// three-letter abbreviation. Case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(n) = input.parse::<u8>() {
            return Self::from_number(n);
        }

        let lower = input.to_ascii_lowercase();
        Self::all().iter().copied().find(|m| {
            let name = m.display_name().to_ascii_lowercase();
            name == lower || (lower.len() == 3 && name.starts_with(&lower))
        })
    }

    /// Months in calendar order
    pub fn all() -> &'static [Month] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<u8> for Month {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Month::from_number(n).ok_or_else(|| format!("month must be 1-12, got {}", n))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}
