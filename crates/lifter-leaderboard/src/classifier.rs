// ABOUTME: Weight class classification with an overflow class above the heaviest bound
// ABOUTME: Buckets one category's entries by first-matching bound and ranks by points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight class classification.
//!
//! An entry belongs to the first class (in ascending order) whose upper bound
//! is greater than or equal to its bodyweight. Anything strictly heavier than
//! the last bound goes to the overflow class `"<last>+"`. The same rule serves
//! both ranking policies.
//!
//! When a meet runs in pounds, bounds and bodyweights are both converted with
//! [`kg_to_lb`] before comparing, so a kg bodyweight is never measured
//! against an lb bound. Bounds that round to the same pound value merge into
//! one class.

use crate::units::{format_weight, kg_to_lb};
use lifter_core::constants::weight_classes::OVERFLOW_SUFFIX;
use lifter_core::models::{Entry, Sex};
use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Resolved weight class of an entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightClass {
    /// Named class with this upper bound (in the meet's display unit)
    Bounded(f64),
    /// Overflow class above the heaviest bound (in the meet's display unit)
    Overflow(f64),
}

impl WeightClass {
    /// Whether this is the overflow class
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    /// Bound in the meet's display unit
    #[must_use]
    pub const fn bound(&self) -> f64 {
        match self {
            Self::Bounded(bound) | Self::Overflow(bound) => *bound,
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(bound) => f.write_str(&format_weight(*bound)),
            Self::Overflow(bound) => write!(f, "{}{OVERFLOW_SUFFIX}", format_weight(*bound)),
        }
    }
}

/// Named classes serialize as numbers (`59`, `130.07`), overflow as a string (`"74+"`)
impl Serialize for WeightClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bounded(bound) if bound.fract() == 0.0 && bound.abs() < MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*bound as i64)
            }
            Self::Bounded(bound) => serializer.serialize_f64(*bound),
            Self::Overflow(_) => serializer.collect_str(self),
        }
    }
}

/// One non-empty weight class and its entries, best first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightClassGroup {
    /// Class label
    pub weight_class: WeightClass,
    /// Entries sorted by descending points
    pub entries: Vec<Entry>,
    /// Present and `true` only for the overflow class
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub outside_max: bool,
}

/// Class bounds of one category, already in the meet's display unit
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBounds {
    bounds: Vec<f64>,
    in_kg: bool,
}

impl ClassBounds {
    /// Prepare bounds for comparison; `None` when no classes are configured
    #[must_use]
    pub fn new(weight_classes_kg: &[f64], in_kg: bool) -> Option<Self> {
        if weight_classes_kg.is_empty() {
            return None;
        }
        let mut bounds: Vec<f64> = weight_classes_kg
            .iter()
            .map(|&bound| if in_kg { bound } else { kg_to_lb(bound) })
            .collect();
        // Distinct kg bounds can round to the same lb bound; keep one class per label
        bounds.dedup();
        Some(Self { bounds, in_kg })
    }

    /// Number of named classes (the overflow class is not counted)
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Always false: construction rejects empty bound lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Bodyweight in the unit the bounds are expressed in
    #[must_use]
    pub fn display_bodyweight(&self, bodyweight_kg: f64) -> f64 {
        if self.in_kg {
            bodyweight_kg
        } else {
            kg_to_lb(bodyweight_kg)
        }
    }

    /// Index of the matching class; `len()` means overflow
    #[must_use]
    pub fn slot_for(&self, bodyweight_kg: f64) -> usize {
        let bodyweight = self.display_bodyweight(bodyweight_kg);
        self.bounds
            .iter()
            .position(|&bound| bodyweight <= bound)
            .unwrap_or(self.bounds.len())
    }

    /// Label for a slot returned by [`Self::slot_for`]
    #[must_use]
    pub fn label(&self, slot: usize) -> WeightClass {
        match self.bounds.get(slot) {
            Some(&bound) => WeightClass::Bounded(bound),
            None => WeightClass::Overflow(self.heaviest()),
        }
    }

    /// Resolve an entry's class directly
    #[must_use]
    pub fn resolve(&self, bodyweight_kg: f64) -> WeightClass {
        self.label(self.slot_for(bodyweight_kg))
    }

    fn heaviest(&self) -> f64 {
        self.bounds.last().copied().unwrap_or_default()
    }
}

/// Weight class of a single bodyweight, `None` when no classes are configured
///
/// Same rule as [`classify_entries`]; building [`ClassBounds`] once is cheaper
/// when resolving many entries.
#[must_use]
pub fn resolve_weight_class(
    weight_classes_kg: &[f64],
    bodyweight_kg: f64,
    in_kg: bool,
) -> Option<WeightClass> {
    ClassBounds::new(weight_classes_kg, in_kg).map(|bounds| bounds.resolve(bodyweight_kg))
}

/// Stable sort, highest points first; equal points keep roster order
pub(crate) fn sort_by_points_desc<T>(items: &mut [T], points: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| points(b).total_cmp(&points(a)));
}

/// Group one category's entries into weight classes
///
/// Returns `None` when `weight_classes_kg` is empty ("no classes
/// configured"). Otherwise returns only the classes that received entries,
/// in ascending order with the overflow class last, each sorted by
/// descending points. Entries of other categories are ignored.
#[must_use]
pub fn classify_entries(
    sex: Sex,
    weight_classes_kg: &[f64],
    entries: &[Entry],
    in_kg: bool,
) -> Option<Vec<WeightClassGroup>> {
    let Some(bounds) = ClassBounds::new(weight_classes_kg, in_kg) else {
        debug!(sex = %sex, "No weight classes configured");
        return None;
    };

    // One bucket per named class plus the overflow bucket
    let mut buckets: Vec<Vec<Entry>> = vec![Vec::new(); bounds.len() + 1];
    for entry in entries.iter().filter(|entry| entry.sex == sex) {
        let slot = bounds.slot_for(entry.bodyweight_kg);
        if let Some(bucket) = buckets.get_mut(slot) {
            bucket.push(entry.clone());
        }
    }

    let groups: Vec<WeightClassGroup> = buckets
        .into_iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(slot, mut bucket)| {
            sort_by_points_desc(&mut bucket, |entry| entry.points);
            let weight_class = bounds.label(slot);
            WeightClassGroup {
                weight_class,
                entries: bucket,
                outside_max: weight_class.is_overflow(),
            }
        })
        .collect();

    debug!(
        sex = %sex,
        configured = bounds.len(),
        populated = groups.len(),
        "Classified entries into weight classes"
    );
    Some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEN: [f64; 3] = [59.0, 66.0, 74.0];

    fn man(bodyweight_kg: f64, points: f64) -> Entry {
        Entry::new(Sex::M, bodyweight_kg, points)
    }

    fn labels(groups: &[WeightClassGroup]) -> Vec<String> {
        groups.iter().map(|g| g.weight_class.to_string()).collect()
    }

    #[test]
    fn test_empty_bounds_yield_none() {
        assert!(classify_entries(Sex::M, &[], &[man(80.0, 1.0)], true).is_none());
    }

    #[test]
    fn test_bodyweight_equal_to_last_bound_is_named() {
        let groups = classify_entries(Sex::M, &MEN, &[man(74.0, 1.0)], true).unwrap();
        assert_eq!(labels(&groups), vec!["74"]);
        assert!(!groups[0].outside_max);
    }

    #[test]
    fn test_heavier_than_last_bound_overflows() {
        let groups = classify_entries(Sex::M, &MEN, &[man(80.0, 1.0)], true).unwrap();
        assert_eq!(labels(&groups), vec!["74+"]);
        assert!(groups[0].outside_max);
    }

    #[test]
    fn test_bound_is_inclusive_for_inner_classes() {
        let groups =
            classify_entries(Sex::M, &MEN, &[man(59.0, 1.0), man(59.01, 2.0)], true).unwrap();
        assert_eq!(labels(&groups), vec!["59", "66"]);
    }

    #[test]
    fn test_empty_classes_are_pruned_and_order_kept() {
        let entries = vec![man(90.0, 400.0), man(55.0, 250.0), man(70.0, 300.0)];
        let groups = classify_entries(Sex::M, &MEN, &entries, true).unwrap();
        assert_eq!(labels(&groups), vec!["59", "74", "74+"]);
    }

    #[test]
    fn test_entries_sorted_by_points_with_stable_ties() {
        let entries = vec![
            man(60.0, 200.0).with_extra("id", 1.into()),
            man(61.0, 300.0).with_extra("id", 2.into()),
            man(62.0, 200.0).with_extra("id", 3.into()),
        ];
        let groups = classify_entries(Sex::M, &MEN, &entries, true).unwrap();
        let ids: Vec<_> = groups[0].entries.iter().map(|e| e.extra["id"].clone()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_other_categories_are_skipped() {
        let entries = vec![Entry::new(Sex::F, 50.0, 500.0), man(60.0, 100.0)];
        let groups = classify_entries(Sex::M, &MEN, &entries, true).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[0].entries[0].sex, Sex::M);
    }

    #[test]
    fn test_no_matching_entries_yields_empty_list() {
        let groups = classify_entries(Sex::Mx, &MEN, &[man(60.0, 1.0)], true).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_pound_mode_converts_bounds_and_bodyweight() {
        let entries = vec![man(74.0, 1.0), man(74.01, 2.0), man(59.0, 3.0)];
        let groups = classify_entries(Sex::M, &MEN, &entries, false).unwrap();
        assert_eq!(labels(&groups), vec!["130.07", "163.14", "163.14+"]);
    }

    #[test]
    fn test_bounds_rounding_together_in_pounds_merge() {
        let close = [59.0, 59.001, 66.0];
        let bounds = ClassBounds::new(&close, false).unwrap();
        assert_eq!(bounds.len(), 2);

        let entries = vec![man(58.0, 1.0), man(59.0005, 2.0), man(60.0, 3.0)];
        let groups = classify_entries(Sex::M, &close, &entries, false).unwrap();
        assert_eq!(labels(&groups), vec!["130.07", "145.51"]);
        assert_eq!(groups[0].entries.len(), 2);

        // Kilogram meets keep every configured bound
        assert_eq!(ClassBounds::new(&close, true).unwrap().len(), 3);
    }

    #[test]
    fn test_weight_class_serialization() {
        assert_eq!(
            serde_json::to_value(WeightClass::Bounded(59.0)).unwrap(),
            serde_json::json!(59)
        );
        assert_eq!(
            serde_json::to_value(WeightClass::Bounded(130.07)).unwrap(),
            serde_json::json!(130.07)
        );
        assert_eq!(
            serde_json::to_value(WeightClass::Overflow(74.0)).unwrap(),
            serde_json::json!("74+")
        );
    }

    #[test]
    fn test_outside_max_only_serialized_for_overflow() {
        let groups =
            classify_entries(Sex::M, &MEN, &[man(50.0, 1.0), man(99.0, 2.0)], true).unwrap();
        let json = serde_json::to_value(&groups).unwrap();
        assert!(json[0].get("outsideMax").is_none());
        assert_eq!(json[1]["outsideMax"], true);
        assert_eq!(json[1]["weightClass"], "74+");
    }

    #[test]
    fn test_resolve_matches_classification() {
        let bounds = ClassBounds::new(&MEN, true).unwrap();
        assert_eq!(bounds.resolve(66.0), WeightClass::Bounded(66.0));
        assert_eq!(bounds.resolve(0.0), WeightClass::Bounded(59.0));
        assert_eq!(bounds.resolve(120.0), WeightClass::Overflow(74.0));
    }

    #[test]
    fn test_resolve_weight_class_single_entry() {
        assert_eq!(resolve_weight_class(&MEN, 74.0, true), Some(WeightClass::Bounded(74.0)));
        assert_eq!(
            resolve_weight_class(&MEN, 74.01, false),
            Some(WeightClass::Overflow(163.14))
        );
        assert!(resolve_weight_class(&[], 74.0, true).is_none());
    }
}
