// ABOUTME: Kilogram and pound conversion with fixed two-decimal rounding
// ABOUTME: Also renders weights for class labels without trailing zeros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lifter_core::constants::units::{CONVERSION_DECIMAL_PLACES, LBS_PER_KG};

/// Round to `places` decimals, halves away from zero
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

/// Convert kilograms to pounds, rounded to two decimals
///
/// ```
/// use lifter_leaderboard::units::kg_to_lb;
/// assert_eq!(kg_to_lb(74.0), 163.14);
/// ```
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    round_to(kg * LBS_PER_KG, CONVERSION_DECIMAL_PLACES)
}

/// Convert pounds to kilograms, rounded to two decimals
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    round_to(lb / LBS_PER_KG, CONVERSION_DECIMAL_PLACES)
}

/// Render a weight for display: at most two decimals, no trailing zeros
#[must_use]
pub fn format_weight(value: f64) -> String {
    let rounded = round_to(value, CONVERSION_DECIMAL_PLACES);
    // Display for f64 already drops trailing zeros ("74", "163.14")
    format!("{}", rounded + 0.0)
}
