// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors, label formatting, and leaderboard category keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Unit conversion and measurement constants
pub mod units {
    /// Pounds per kilogram
    pub const LBS_PER_KG: f64 = 2.204_622_62;
    /// Decimal places kept after a kg/lb conversion
    pub const CONVERSION_DECIMAL_PLACES: i32 = 2;
}

/// Weight class labelling
pub mod weight_classes {
    /// Suffix appended to the heaviest bound to name the overflow class
    pub const OVERFLOW_SUFFIX: &str = "+";
}

/// Leaderboard output keys, one per competition category
pub mod categories {
    /// Men's standings
    pub const MALE: &str = "male";
    /// Women's standings
    pub const FEMALE: &str = "female";
    /// Mixed standings
    pub const MX: &str = "mx";
}

/// Wire names of the merged meet document
pub mod fields {
    /// Meet configuration object
    pub const MEET_DATA: &str = "meetData";
    /// Roster array
    pub const ENTRIES: &str = "entries";
    /// Men's class bounds
    pub const WEIGHT_CLASSES_MEN: &str = "weightClassesKgMen";
    /// Women's class bounds
    pub const WEIGHT_CLASSES_WOMEN: &str = "weightClassesKgWomen";
    /// Mixed class bounds
    pub const WEIGHT_CLASSES_MX: &str = "weightClassesKgMx";
    /// Unit mode flag
    pub const IN_KG: &str = "inKg";
    /// Entry sex
    pub const SEX: &str = "sex";
    /// Entry bodyweight in kilograms
    pub const BODYWEIGHT_KG: &str = "bodyweightKg";
    /// Entry ranking score
    pub const POINTS: &str = "points";
    /// Entry event codes
    pub const EVENTS: &str = "events";
    /// Squat attempt weights
    pub const SQUAT_KG: &str = "squatKg";
    /// Bench attempt weights
    pub const BENCH_KG: &str = "benchKg";
    /// Deadlift attempt weights
    pub const DEADLIFT_KG: &str = "deadliftKg";
    /// Squat attempt outcomes
    pub const SQUAT_STATUS: &str = "squatStatus";
    /// Bench attempt outcomes
    pub const BENCH_STATUS: &str = "benchStatus";
    /// Deadlift attempt outcomes
    pub const DEADLIFT_STATUS: &str = "deadliftStatus";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Results CLI / service
    pub const LIFTER_RESULTS: &str = "lifter-results";
}
