//! Rainfall Screen
//!
//! Single-threshold rainfall check that ignores crop, soil and month. It is
//! a separate rule from the table-driven evaluator and the two are not
//! reconciled: callers pick which one they want.

use serde::Serialize;

/// Readings below this are too dry (mm)
pub const MIN_SCREEN_RAINFALL_MM: f64 = 50.0;

/// Readings above this risk waterlogging (mm)
pub const MAX_SCREEN_RAINFALL_MM: f64 = 300.0;

/// Why a reading passed or failed the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningReason {
    TooLow,
    TooHigh,
    Favorable,
}

/// Result of the rainfall screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningOutcome {
    pub suitable: bool,
    pub reason: ScreeningReason,
    pub message: &'static str,
    pub rainfall_mm: f64,
}

impl ScreeningOutcome {
    /// Heading shown above the message
    pub fn headline(&self) -> &'static str {
        if self.suitable {
            "Suitable for Farming"
        } else {
            "Not Recommended"
        }
    }
}

/// Screen a rainfall reading. Bounds are exclusive: exactly 50 mm and
/// exactly 300 mm both pass.
pub fn screen_rainfall(rainfall_mm: f64) -> ScreeningOutcome {
    let (suitable, reason, message) = if rainfall_mm < MIN_SCREEN_RAINFALL_MM {
        (false, ScreeningReason::TooLow, "Rainfall is too low for optimal crop growth.")
    } else if rainfall_mm > MAX_SCREEN_RAINFALL_MM {
        (false, ScreeningReason::TooHigh, "Rainfall is too high, might cause waterlogging.")
    } else {
        (true, ScreeningReason::Favorable, "Conditions look favorable for crop growth!")
    };

    ScreeningOutcome { suitable, reason, message, rainfall_mm }
}
