// ABOUTME: Leaderboard aggregation engine for powerlifting meet results
// ABOUTME: Classifies entries into weight classes and ranks them by points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Lifter Leaderboard
//!
//! Pure functions turning a merged roster into ranked standings. Nothing in
//! this crate touches storage, the network, or process-wide state: every call
//! builds its result from its arguments and returns it.
//!
//! ## Modules
//!
//! - **units**: kg/lb conversion with fixed two-decimal rounding
//! - **events**: distinct event combinations present in a roster
//! - **classifier**: weight class assignment with an overflow class
//! - **leaderboard**: the two ranking policies split by category
//! - **lifts**: best successful attempts per entry

/// Kilogram/pound conversion
pub mod units;

/// Event catalogue extraction
pub mod events;

/// Weight class classification
pub mod classifier;

/// Leaderboard construction under the class and points policies
pub mod leaderboard;

/// Best successful attempts per lift
pub mod lifts;

pub use classifier::{
    classify_entries, resolve_weight_class, ClassBounds, WeightClass, WeightClassGroup,
};
pub use events::unique_event_combos;
pub use leaderboard::{
    build_leaderboard, build_leaderboard_with, category_key, rank_by_points, Leaderboard,
    LeaderboardOptions, RankedEntry, RankingPolicy, Standings,
};
pub use lifts::{summarize_lifts, summarize_meet, LiftSet, LiftSummary};
pub use units::{format_weight, kg_to_lb, lb_to_kg, round_to};
