// ABOUTME: Leaderboard construction under the class and points ranking policies
// ABOUTME: Splits a merged roster by category and ranks each category independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::classifier::{
    classify_entries, sort_by_points_desc, ClassBounds, WeightClass, WeightClassGroup,
};
use lifter_core::constants::categories;
use lifter_core::errors::{AppError, AppResult};
use lifter_core::models::{Entry, MeetResults, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Field name the points policy annotates each entry with
const WEIGHT_CLASS_FIELD: &str = "weightClass";

/// Leaderboard shape selection
///
/// - `Class`: one group per populated weight class, best first inside each
/// - `Points`: a single list per category, best first, each entry labelled
///   with its weight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingPolicy {
    /// Grouped by weight class
    #[default]
    Class,
    /// Flat, sorted by points
    Points,
}

impl RankingPolicy {
    /// Wire name of the policy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Points => "points",
        }
    }
}

impl fmt::Display for RankingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "points" => Ok(Self::Points),
            other => Err(AppError::invalid_input(format!(
                "Unknown ranking policy: '{other}'. Valid options: class, points"
            ))),
        }
    }
}

/// Entry annotated with its resolved weight class
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    /// Resolved class label
    pub weight_class: WeightClass,
    /// The entry itself, fields flattened alongside `weightClass`
    #[serde(flatten)]
    pub entry: Entry,
}

/// Standings of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Standings {
    /// Class policy output
    Grouped(Vec<WeightClassGroup>),
    /// Points policy output
    Flat(Vec<RankedEntry>),
}

impl Standings {
    /// Number of entries across the whole category
    #[must_use]
    pub fn entry_count(&self) -> usize {
        match self {
            Self::Grouped(groups) => groups.iter().map(|group| group.entries.len()).sum(),
            Self::Flat(entries) => entries.len(),
        }
    }
}

/// Standings for every category; `None` where no classes are configured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    /// Men
    pub male: Option<Standings>,
    /// Women
    pub female: Option<Standings>,
    /// Mixed
    pub mx: Option<Standings>,
}

impl Leaderboard {
    /// Standings of a category
    #[must_use]
    pub const fn for_sex(&self, sex: Sex) -> Option<&Standings> {
        match sex {
            Sex::M => self.male.as_ref(),
            Sex::F => self.female.as_ref(),
            Sex::Mx => self.mx.as_ref(),
        }
    }
}

/// Output key of a category
#[must_use]
pub const fn category_key(sex: Sex) -> &'static str {
    match sex {
        Sex::M => categories::MALE,
        Sex::F => categories::FEMALE,
        Sex::Mx => categories::MX,
    }
}

/// Evaluation knobs that do not change the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardOptions {
    /// Rank the three categories on the rayon pool instead of in sequence
    pub parallel: bool,
}

impl Default for LeaderboardOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Build a leaderboard with default options
///
/// # Errors
///
/// Returns an error if the meet configuration or any entry fails
/// [`MeetResults::validate`]
pub fn build_leaderboard(results: &MeetResults, policy: RankingPolicy) -> AppResult<Leaderboard> {
    build_leaderboard_with(results, policy, LeaderboardOptions::default())
}

/// Build a leaderboard
///
/// Categories are independent, so with `options.parallel` they are ranked
/// concurrently; the result is identical either way.
///
/// # Errors
///
/// Returns an error if the meet configuration or any entry fails
/// [`MeetResults::validate`]
pub fn build_leaderboard_with(
    results: &MeetResults,
    policy: RankingPolicy,
    options: LeaderboardOptions,
) -> AppResult<Leaderboard> {
    results.validate()?;
    if results.entries.is_empty() {
        warn!("Building leaderboard for an empty roster");
    }

    let rank = |sex: Sex| standings_for(results, sex, policy);
    let (male, (female, mx)) = if options.parallel {
        rayon::join(
            || rank(Sex::M),
            || rayon::join(|| rank(Sex::F), || rank(Sex::Mx)),
        )
    } else {
        (rank(Sex::M), (rank(Sex::F), rank(Sex::Mx)))
    };

    Ok(Leaderboard { male, female, mx })
}

fn standings_for(results: &MeetResults, sex: Sex, policy: RankingPolicy) -> Option<Standings> {
    let classes = results.meet_data.classes_for(sex);
    let in_kg = results.meet_data.in_kg;
    let standings = match policy {
        RankingPolicy::Class => {
            classify_entries(sex, classes, &results.entries, in_kg).map(Standings::Grouped)
        }
        RankingPolicy::Points => {
            rank_by_points(sex, classes, &results.entries, in_kg).map(Standings::Flat)
        }
    };
    debug!(
        category = category_key(sex),
        policy = %policy,
        entries = standings.as_ref().map_or(0, Standings::entry_count),
        configured = standings.is_some(),
        "Ranked category"
    );
    standings
}

/// Rank one category's entries by points across all weight classes
///
/// Each entry is labelled with the class [`classify_entries`] would put it
/// in. A `weightClass` field already present on the client entry is
/// replaced. Returns `None` when no classes are configured.
#[must_use]
pub fn rank_by_points(
    sex: Sex,
    weight_classes_kg: &[f64],
    entries: &[Entry],
    in_kg: bool,
) -> Option<Vec<RankedEntry>> {
    let bounds = ClassBounds::new(weight_classes_kg, in_kg)?;
    let mut ranked: Vec<RankedEntry> = entries
        .iter()
        .filter(|entry| entry.sex == sex)
        .map(|entry| {
            let mut entry = entry.clone();
            entry.extra.remove(WEIGHT_CLASS_FIELD);
            RankedEntry {
                weight_class: bounds.resolve(entry.bodyweight_kg),
                entry,
            }
        })
        .collect();
    sort_by_points_desc(&mut ranked, |ranked| ranked.entry.points);
    Some(ranked)
}
