// ABOUTME: Best successful attempt per lift for each entry on the scoreboard
// ABOUTME: Pairs attempt weights with judging outcomes and totals the best lifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lifter_core::models::{Entry, LiftStatus, MeetResults};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// One value per competition lift
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LiftSet<T> {
    /// Squat
    pub squat: T,
    /// Bench press
    pub bench: T,
    /// Deadlift
    pub deadlift: T,
}

/// Good attempts and best lifts of one entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftSummary {
    /// Client `id` of the entry, when it sent one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Weights of every good attempt, in attempt order
    pub good_lifts: LiftSet<Vec<f64>>,
    /// Heaviest good attempt per lift, `0` when none
    pub max_lifts: LiftSet<f64>,
    /// Sum of the three best lifts
    pub total_kg: f64,
}

fn good_attempts(weights: &[f64], statuses: &[LiftStatus]) -> Vec<f64> {
    weights
        .iter()
        .zip(statuses)
        .filter(|(_, status)| **status == LiftStatus::GoodLift)
        .map(|(weight, _)| *weight)
        .collect()
}

fn best(good: &[f64]) -> f64 {
    good.iter().copied().fold(0.0, f64::max)
}

/// Summarize an entry's successful attempts
#[must_use]
pub fn summarize_lifts(entry: &Entry) -> LiftSummary {
    let good_lifts = LiftSet {
        squat: good_attempts(&entry.squat_kg, &entry.squat_status),
        bench: good_attempts(&entry.bench_kg, &entry.bench_status),
        deadlift: good_attempts(&entry.deadlift_kg, &entry.deadlift_status),
    };
    let max_lifts = LiftSet {
        squat: best(&good_lifts.squat),
        bench: best(&good_lifts.bench),
        deadlift: best(&good_lifts.deadlift),
    };
    let total_kg = max_lifts.squat + max_lifts.bench + max_lifts.deadlift;

    LiftSummary {
        id: entry.extra.get("id").cloned(),
        good_lifts,
        max_lifts,
        total_kg,
    }
}

/// Summarize every entry, in roster order
#[must_use]
pub fn summarize_meet(results: &MeetResults) -> Vec<LiftSummary> {
    let summaries: Vec<LiftSummary> = results.entries.iter().map(summarize_lifts).collect();
    debug!(entries = summaries.len(), "Summarized lifts");
    summaries
}
