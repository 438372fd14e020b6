// ABOUTME: Event catalogue extraction from a meet roster
// ABOUTME: Collects the distinct event combinations contested across all entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lifter_core::models::Entry;
use std::collections::BTreeSet;

/// Distinct event codes across every entry's `events`
///
/// The result is a set: order carries no meaning, it is sorted only so
/// repeated calls serialize identically.
#[must_use]
pub fn unique_event_combos(entries: &[Entry]) -> BTreeSet<String> {
    entries
        .iter()
        .flat_map(|entry| entry.events.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifter_core::models::Sex;

    #[test]
    fn test_empty_roster_yields_empty_set() {
        assert!(unique_event_combos(&[]).is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let entries = vec![
            Entry::new(Sex::M, 80.0, 300.0).with_events(["SBD"]),
            Entry::new(Sex::F, 60.0, 250.0).with_events(["B", "SBD"]),
            Entry::new(Sex::Mx, 70.0, 200.0).with_events(["B"]),
            Entry::new(Sex::M, 90.0, 310.0),
        ];
        let combos = unique_event_combos(&entries);
        assert_eq!(combos.len(), 2);
        assert!(combos.contains("SBD"));
        assert!(combos.contains("B"));
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let forward = vec![
            Entry::new(Sex::M, 80.0, 300.0).with_events(["S"]),
            Entry::new(Sex::M, 80.0, 300.0).with_events(["D"]),
        ];
        let reversed: Vec<Entry> = forward.iter().rev().cloned().collect();
        assert_eq!(unique_event_combos(&forward), unique_event_combos(&reversed));
    }
}
