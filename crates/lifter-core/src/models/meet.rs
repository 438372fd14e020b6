// ABOUTME: Meet configuration and merged roster models consumed by the leaderboard
// ABOUTME: Maps each competition category to its configured weight class bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::entry::{Entry, Sex};
use crate::constants::fields;
use crate::errors::{AppError, AppResult, EntryError};
use serde::{Deserialize, Serialize};

/// Weight class configuration of a meet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetData {
    /// Ascending men's class upper bounds (kg)
    #[serde(default)]
    pub weight_classes_kg_men: Vec<f64>,
    /// Ascending women's class upper bounds (kg)
    #[serde(default)]
    pub weight_classes_kg_women: Vec<f64>,
    /// Ascending mixed class upper bounds (kg)
    #[serde(default)]
    pub weight_classes_kg_mx: Vec<f64>,
    /// Express classes in kilograms (`true`) or pounds (`false`)
    pub in_kg: bool,
}

impl MeetData {
    /// Class bounds configured for a category
    #[must_use]
    pub fn classes_for(&self, sex: Sex) -> &[f64] {
        match sex {
            Sex::M => &self.weight_classes_kg_men,
            Sex::F => &self.weight_classes_kg_women,
            Sex::Mx => &self.weight_classes_kg_mx,
        }
    }

    /// Check every class bound is finite, positive, and strictly ascending
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `VALUE_OUT_OF_RANGE` naming the offending list
    pub fn validate(&self) -> AppResult<()> {
        for (key, bounds) in [
            (fields::WEIGHT_CLASSES_MEN, &self.weight_classes_kg_men),
            (fields::WEIGHT_CLASSES_WOMEN, &self.weight_classes_kg_women),
            (fields::WEIGHT_CLASSES_MX, &self.weight_classes_kg_mx),
        ] {
            if let Some(bad) = bounds.iter().find(|bound| !bound.is_finite() || **bound <= 0.0) {
                return Err(AppError::out_of_range(format!(
                    "'{key}' contains non-positive or non-finite bound {bad}"
                ))
                .with_details(serde_json::json!({ "field": key })));
            }
            if let Some(pair) = bounds.windows(2).find(|pair| pair[0] >= pair[1]) {
                return Err(AppError::out_of_range(format!(
                    "'{key}' must be strictly ascending, found {} before {}",
                    pair[0], pair[1]
                ))
                .with_details(serde_json::json!({ "field": key })));
            }
        }
        Ok(())
    }
}

/// Meet configuration merged with the roster of every platform
///
/// The calling layer picks the most recent configuration and concatenates
/// the per-platform rosters before handing this over.
///
/// The serde derives are the library-level entry point for documents that
/// are already trusted, such as stored results. Client JSON goes through the
/// boundary parser, which names the entry index and field of a bad value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetResults {
    /// Weight class configuration
    pub meet_data: MeetData,
    /// Every entry across all platforms
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl MeetResults {
    /// Build from configuration and roster
    #[must_use]
    pub const fn new(meet_data: MeetData, entries: Vec<Entry>) -> Self {
        Self {
            meet_data,
            entries,
        }
    }

    /// Validate class bounds and every entry's numeric fields
    ///
    /// Bodyweight must be finite and non-negative (`0` is an entry that has
    /// not weighed in yet); points must be finite.
    ///
    /// # Errors
    ///
    /// Returns the first configuration or entry problem found
    pub fn validate(&self) -> AppResult<()> {
        self.meet_data.validate()?;
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.bodyweight_kg.is_finite() || entry.bodyweight_kg < 0.0 {
                return Err(EntryError::invalid(
                    index,
                    fields::BODYWEIGHT_KG,
                    format!("must be a finite, non-negative number, got {}", entry.bodyweight_kg),
                )
                .into());
            }
            if !entry.points.is_finite() {
                return Err(EntryError::invalid(
                    index,
                    fields::POINTS,
                    format!("must be a finite number, got {}", entry.points),
                )
                .into());
            }
        }
        Ok(())
    }

    /// Entries competing in a category, in roster order
    pub fn entries_for(&self, sex: Sex) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |entry| entry.sex == sex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_classes_for_maps_each_category() {
        let meet = MeetData {
            weight_classes_kg_men: vec![59.0, 66.0],
            weight_classes_kg_women: vec![47.0],
            weight_classes_kg_mx: vec![],
            in_kg: true,
        };
        assert_eq!(meet.classes_for(Sex::M), &[59.0, 66.0]);
        assert_eq!(meet.classes_for(Sex::F), &[47.0]);
        assert!(meet.classes_for(Sex::Mx).is_empty());
    }

    #[test]
    fn test_validate_rejects_unsorted_bounds() {
        let meet = MeetData {
            weight_classes_kg_men: vec![66.0, 59.0],
            ..MeetData::default()
        };
        let error = meet.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.details["field"], "weightClassesKgMen");
    }

    #[test]
    fn test_validate_accepts_empty_bounds() {
        assert!(MeetData::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_points() {
        let results = MeetResults::new(
            MeetData::default(),
            vec![
                Entry::new(Sex::M, 80.0, 300.0),
                Entry::new(Sex::M, 82.0, f64::NAN),
            ],
        );
        let error = results.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert_eq!(error.details["entryIndex"], 1);
        assert_eq!(error.details["field"], "points");
    }

    #[test]
    fn test_validate_rejects_negative_bodyweight() {
        let results = MeetResults::new(MeetData::default(), vec![Entry::new(Sex::F, -1.0, 10.0)]);
        let error = results.validate().unwrap_err();
        assert_eq!(error.details["field"], "bodyweightKg");
    }

    #[test]
    fn test_entries_for_filters_by_sex() {
        let results = MeetResults::new(
            MeetData::default(),
            vec![
                Entry::new(Sex::M, 80.0, 300.0),
                Entry::new(Sex::F, 60.0, 280.0),
                Entry::new(Sex::M, 90.0, 310.0),
            ],
        );
        let men: Vec<f64> = results
            .entries_for(Sex::M)
            .map(|entry| entry.bodyweight_kg)
            .collect();
        assert_eq!(men, vec![80.0, 90.0]);
    }
}
