// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and sample meet documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `lifter_results`

use lifter_results::models::{Entry, MeetData, MeetResults, Sex};
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Men `[59, 66, 74]`, women `[52, 63]`, no mixed classes
pub fn meet_data(in_kg: bool) -> MeetData {
    MeetData {
        weight_classes_kg_men: vec![59.0, 66.0, 74.0],
        weight_classes_kg_women: vec![52.0, 63.0],
        weight_classes_kg_mx: vec![],
        in_kg,
    }
}

/// Entry with an `id` so ordering can be asserted by id
pub fn entry(id: u32, sex: Sex, bodyweight_kg: f64, points: f64) -> Entry {
    Entry::new(sex, bodyweight_kg, points).with_extra("id", json!(id))
}

/// Three men at 70, 55 and 90 kg scoring 300, 250 and 400
pub fn three_men() -> Vec<Entry> {
    vec![
        entry(1, Sex::M, 70.0, 300.0),
        entry(2, Sex::M, 55.0, 250.0),
        entry(3, Sex::M, 90.0, 400.0),
    ]
}

/// Mixed roster over every category
pub fn mixed_roster() -> MeetResults {
    MeetResults::new(
        meet_data(true),
        vec![
            entry(1, Sex::M, 70.0, 300.0).with_events(["SBD"]),
            entry(2, Sex::F, 51.5, 320.0).with_events(["SBD"]),
            entry(3, Sex::M, 55.0, 250.0).with_events(["B"]),
            entry(4, Sex::Mx, 80.0, 280.0).with_events(["SBD"]),
            entry(5, Sex::F, 70.0, 350.0).with_events(["BD"]),
            entry(6, Sex::M, 90.0, 400.0).with_events(["SBD"]),
            entry(7, Sex::F, 63.0, 320.0).with_events(["SBD"]),
        ],
    )
}

/// Merged meet document as JSON
pub fn meet_document() -> Value {
    json!({
        "meetData": {
            "weightClassesKgMen": [59, 66, 74],
            "weightClassesKgWomen": [52, 63],
            "weightClassesKgMx": [],
            "inKg": true
        },
        "entries": [
            {
                "id": 1, "name": "A. Lifter", "sex": "M", "bodyweightKg": 70,
                "points": 300, "events": ["SBD"],
                "squatKg": [180, 190, 200], "squatStatus": [1, 1, -1],
                "benchKg": [120, 125, 130], "benchStatus": [1, -1, 1],
                "deadliftKg": [220, 230, 240], "deadliftStatus": [1, 1, 1]
            },
            { "id": 2, "sex": "M", "bodyweightKg": 55, "points": 250, "events": ["B"] },
            { "id": 3, "sex": "F", "bodyweightKg": 60, "points": 310.5, "events": ["SBD"] },
            { "id": 4, "sex": "M", "bodyweightKg": 90, "points": 400, "events": ["SBD"] }
        ]
    })
}

/// Ids of a JSON array of entries, in order
pub fn ids(entries: &Value) -> Vec<u64> {
    entries
        .as_array()
        .map(|items| items.iter().filter_map(|item| item["id"].as_u64()).collect())
        .unwrap_or_default()
}
