// ABOUTME: Lifter entry model with sex category, bodyweight, points, and attempts
// ABOUTME: Carries unknown client fields through a flattened pass-through map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Competition category of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Men
    #[serde(rename = "M")]
    M,
    /// Women
    #[serde(rename = "F")]
    F,
    /// Mixed / non-binary
    #[serde(rename = "Mx")]
    Mx,
}

impl Sex {
    /// All categories in leaderboard order
    pub const ALL: [Self; 3] = [Self::M, Self::F, Self::Mx];

    /// Parse the exact wire string (`"M"`, `"F"`, `"Mx"`)
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "M" => Some(Self::M),
            "F" => Some(Self::F),
            "Mx" => Some(Self::Mx),
            _ => None,
        }
    }

    /// Wire string for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
            Self::Mx => "Mx",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single attempt
///
/// Serialized as the integer the scoring table uses: `1` good lift,
/// `-1` no lift, `0` not yet taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum LiftStatus {
    /// Judged a failed attempt
    NoLift,
    /// Not attempted yet
    #[default]
    NotAttempted,
    /// Judged a successful attempt
    GoodLift,
}

impl TryFrom<i8> for LiftStatus {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::NoLift),
            0 => Ok(Self::NotAttempted),
            1 => Ok(Self::GoodLift),
            other => Err(format!("lift status must be -1, 0, or 1, got {other}")),
        }
    }
}

impl From<LiftStatus> for i8 {
    fn from(status: LiftStatus) -> Self {
        match status {
            LiftStatus::NoLift => -1,
            LiftStatus::NotAttempted => 0,
            LiftStatus::GoodLift => 1,
        }
    }
}

/// One lifter's meet submission
///
/// Only `sex`, `bodyweight_kg`, `points` and `events` drive the leaderboard.
/// Attempt arrays feed the lift summary. Every other client field (`id`,
/// `name`, `flight`, ...) lands in `extra` and is written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Competition category
    pub sex: Sex,
    /// Weigh-in bodyweight in kilograms
    pub bodyweight_kg: f64,
    /// Ranking score
    pub points: f64,
    /// Event codes contested (e.g. `"SBD"`, `"B"`)
    #[serde(default)]
    pub events: Vec<String>,
    /// Squat attempt weights in kilograms
    #[serde(default)]
    pub squat_kg: Vec<f64>,
    /// Bench attempt weights in kilograms
    #[serde(default)]
    pub bench_kg: Vec<f64>,
    /// Deadlift attempt weights in kilograms
    #[serde(default)]
    pub deadlift_kg: Vec<f64>,
    /// Squat attempt outcomes, index-aligned with `squat_kg`
    #[serde(default)]
    pub squat_status: Vec<LiftStatus>,
    /// Bench attempt outcomes, index-aligned with `bench_kg`
    #[serde(default)]
    pub bench_status: Vec<LiftStatus>,
    /// Deadlift attempt outcomes, index-aligned with `deadlift_kg`
    #[serde(default)]
    pub deadlift_status: Vec<LiftStatus>,
    /// Pass-through fields not interpreted by the engine
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// Create an entry with no events, attempts, or extra fields
    #[must_use]
    pub fn new(sex: Sex, bodyweight_kg: f64, points: f64) -> Self {
        Self {
            sex,
            bodyweight_kg,
            points,
            events: Vec::new(),
            squat_kg: Vec::new(),
            bench_kg: Vec::new(),
            deadlift_kg: Vec::new(),
            squat_status: Vec::new(),
            bench_status: Vec::new(),
            deadlift_status: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Set the contested events
    #[must_use]
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Add a pass-through field
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
