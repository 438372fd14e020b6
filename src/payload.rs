// ABOUTME: Boundary parsing of untyped meet JSON into validated typed results
// ABOUTME: Merges per-platform snapshots and names the exact entry and field on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Payload Parsing
//!
//! Client JSON is read exactly once, here. A bad value is reported with the
//! roster index and the wire name of the offending field.
//!
//! Two document shapes are accepted:
//!
//! - a merged document `{ "meetData": {...}, "entries": [...] }`
//! - an array of per-platform snapshots of that same shape, each optionally
//!   stamped with `lastUpdated` (`YYYY/MM/DD-HH:MM:SS`). Rosters are
//!   concatenated in array order and the most recently updated `meetData`
//!   wins; unstamped snapshots count as older than stamped ones, and among
//!   equals the later snapshot wins.

use lifter_core::constants::fields;
use lifter_core::errors::{AppError, AppResult, EntryError};
use lifter_core::models::{Entry, LiftStatus, MeetData, MeetResults, Sex};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Snapshot timestamp key written by the platform order endpoint
const LAST_UPDATED: &str = "lastUpdated";

/// Fields consumed by the typed [`Entry`]; everything else passes through
const TYPED_ENTRY_FIELDS: [&str; 10] = [
    fields::SEX,
    fields::BODYWEIGHT_KG,
    fields::POINTS,
    fields::EVENTS,
    fields::SQUAT_KG,
    fields::BENCH_KG,
    fields::DEADLIFT_KG,
    fields::SQUAT_STATUS,
    fields::BENCH_STATUS,
    fields::DEADLIFT_STATUS,
];

/// Parse and validate a meet document from JSON text
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` for text that is not JSON, and the errors of
/// [`parse_meet_value`] otherwise
pub fn parse_meet_results(text: &str) -> AppResult<MeetResults> {
    let value: Value = serde_json::from_str(text)?;
    parse_meet_value(&value)
}

/// Parse and validate an already decoded meet document
///
/// # Errors
///
/// Returns an error naming the offending key, or the entry index and field,
/// when the document does not have the expected shape or fails
/// [`MeetResults::validate`]
pub fn parse_meet_value(value: &Value) -> AppResult<MeetResults> {
    let results = match value {
        Value::Object(document) => parse_document(document, 0)?,
        Value::Array(snapshots) => merge_snapshots(snapshots)?,
        other => {
            return Err(AppError::invalid_input(format!(
                "meet document must be an object or an array of platform snapshots, got {}",
                type_name(other)
            )))
        }
    };
    results.validate()?;
    debug!(entries = results.entries.len(), "Parsed meet document");
    Ok(results)
}

fn merge_snapshots(snapshots: &[Value]) -> AppResult<MeetResults> {
    if snapshots.is_empty() {
        return Err(AppError::invalid_input(
            "platform snapshot list must not be empty",
        ));
    }

    let mut newest: Option<(Option<&str>, MeetData)> = None;
    let mut entries = Vec::new();
    for (position, snapshot) in snapshots.iter().enumerate() {
        let Value::Object(document) = snapshot else {
            return Err(AppError::invalid_format(
                format!("[{position}]"),
                format!("must be an object, got {}", type_name(snapshot)),
            ));
        };
        let stamp = match document.get(LAST_UPDATED) {
            None | Some(Value::Null) => None,
            Some(Value::String(stamp)) => Some(stamp.as_str()),
            Some(other) => {
                return Err(AppError::invalid_format(
                    LAST_UPDATED,
                    format!(
                        "must be a string, got {} in snapshot [{position}]",
                        type_name(other)
                    ),
                ))
            }
        };
        let parsed = parse_document(document, entries.len())?;
        entries.extend(parsed.entries);

        // Stamps are fixed-width and zero-padded, so they order lexically
        let replaces = match &newest {
            None => true,
            Some((current, _)) => stamp >= *current,
        };
        if replaces {
            newest = Some((stamp, parsed.meet_data));
        }
    }

    let meet_data = newest.map(|(_, meet_data)| meet_data).unwrap_or_default();
    debug!(
        platforms = snapshots.len(),
        entries = entries.len(),
        "Merged platform snapshots"
    );
    Ok(MeetResults::new(meet_data, entries))
}

/// `first_index` offsets entry indices so merged rosters report global positions
fn parse_document(document: &Map<String, Value>, first_index: usize) -> AppResult<MeetResults> {
    let meet_data = match document.get(fields::MEET_DATA) {
        None | Some(Value::Null) => return Err(AppError::missing_field(fields::MEET_DATA)),
        Some(Value::Object(meet)) => parse_meet_data(meet)?,
        Some(other) => {
            return Err(AppError::invalid_format(
                fields::MEET_DATA,
                format!("must be an object, got {}", type_name(other)),
            ))
        }
    };

    let entries = match document.get(fields::ENTRIES) {
        None | Some(Value::Null) => {
            warn!("Meet document has no entries");
            Vec::new()
        }
        Some(Value::Array(raw)) => raw
            .iter()
            .enumerate()
            .map(|(offset, raw)| parse_entry(first_index + offset, raw).map_err(AppError::from))
            .collect::<AppResult<Vec<Entry>>>()?,
        Some(other) => {
            return Err(AppError::invalid_format(
                fields::ENTRIES,
                format!("must be an array, got {}", type_name(other)),
            ))
        }
    };

    Ok(MeetResults::new(meet_data, entries))
}

/// Parse the `meetData` object; every key is required
///
/// # Errors
///
/// Returns `MISSING_REQUIRED_FIELD` or `INVALID_FORMAT` naming the key
pub fn parse_meet_data(meet: &Map<String, Value>) -> AppResult<MeetData> {
    let in_kg = match meet.get(fields::IN_KG) {
        None | Some(Value::Null) => return Err(AppError::missing_field(fields::IN_KG)),
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(AppError::invalid_format(
                fields::IN_KG,
                format!("must be a boolean, got {}", type_name(other)),
            ))
        }
    };

    Ok(MeetData {
        weight_classes_kg_men: bounds(meet, fields::WEIGHT_CLASSES_MEN)?,
        weight_classes_kg_women: bounds(meet, fields::WEIGHT_CLASSES_WOMEN)?,
        weight_classes_kg_mx: bounds(meet, fields::WEIGHT_CLASSES_MX)?,
        in_kg,
    })
}

fn bounds(meet: &Map<String, Value>, key: &'static str) -> AppResult<Vec<f64>> {
    let raw = match meet.get(key) {
        None | Some(Value::Null) => return Err(AppError::missing_field(key)),
        Some(Value::Array(raw)) => raw,
        Some(other) => {
            return Err(AppError::invalid_format(
                key,
                format!("must be an array of numbers, got {}", type_name(other)),
            ))
        }
    };
    raw.iter()
        .enumerate()
        .map(|(position, bound)| {
            bound.as_f64().ok_or_else(|| {
                AppError::invalid_format(
                    key,
                    format!("item {position} must be a number, got {}", type_name(bound)),
                )
            })
        })
        .collect()
}

/// Parse one roster entry
///
/// `sex`, `bodyweightKg` and `points` are required. `events`, attempt weights
/// and attempt statuses default to empty when absent or `null`. Unknown
/// fields are kept verbatim.
///
/// # Errors
///
/// Returns an [`EntryError`] carrying `index` and the offending field
pub fn parse_entry(index: usize, raw: &Value) -> Result<Entry, EntryError> {
    let Value::Object(object) = raw else {
        return Err(EntryError::NotAnObject { index });
    };

    let sex = match object.get(fields::SEX) {
        None | Some(Value::Null) => return Err(EntryError::missing(index, fields::SEX)),
        Some(Value::String(value)) => Sex::parse(value).ok_or_else(|| EntryError::UnknownSex {
            index,
            value: value.clone(),
        })?,
        Some(other) => {
            return Err(EntryError::invalid(
                index,
                fields::SEX,
                format!("must be a string, got {}", type_name(other)),
            ))
        }
    };

    let mut entry = Entry::new(
        sex,
        required_number(index, object, fields::BODYWEIGHT_KG)?,
        required_number(index, object, fields::POINTS)?,
    );
    entry.events = events(index, object)?;
    entry.squat_kg = weights(index, object, fields::SQUAT_KG)?;
    entry.bench_kg = weights(index, object, fields::BENCH_KG)?;
    entry.deadlift_kg = weights(index, object, fields::DEADLIFT_KG)?;
    entry.squat_status = statuses(index, object, fields::SQUAT_STATUS)?;
    entry.bench_status = statuses(index, object, fields::BENCH_STATUS)?;
    entry.deadlift_status = statuses(index, object, fields::DEADLIFT_STATUS)?;
    entry.extra = object
        .iter()
        .filter(|(key, _)| !TYPED_ENTRY_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(entry)
}

fn required_number(
    index: usize,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, EntryError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(EntryError::missing(index, field)),
        Some(value) => value.as_f64().ok_or_else(|| {
            EntryError::invalid(
                index,
                field,
                format!("must be a number, got {}", type_name(value)),
            )
        }),
    }
}

/// Items of an optional array field; absent and `null` read as empty
fn optional_array<'a>(
    index: usize,
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a [Value], EntryError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(EntryError::invalid(
            index,
            field,
            format!("must be an array, got {}", type_name(other)),
        )),
    }
}

fn events(index: usize, object: &Map<String, Value>) -> Result<Vec<String>, EntryError> {
    optional_array(index, object, fields::EVENTS)?
        .iter()
        .enumerate()
        .map(|(position, event)| {
            event.as_str().map(str::to_owned).ok_or_else(|| {
                EntryError::invalid(
                    index,
                    fields::EVENTS,
                    format!("item {position} must be a string, got {}", type_name(event)),
                )
            })
        })
        .collect()
}

fn weights(
    index: usize,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<f64>, EntryError> {
    optional_array(index, object, field)?
        .iter()
        .enumerate()
        .map(|(position, weight)| {
            weight.as_f64().ok_or_else(|| {
                EntryError::invalid(
                    index,
                    field,
                    format!("item {position} must be a number, got {}", type_name(weight)),
                )
            })
        })
        .collect()
}

fn statuses(
    index: usize,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<LiftStatus>, EntryError> {
    optional_array(index, object, field)?
        .iter()
        .enumerate()
        .map(|(position, status)| {
            status
                .as_i64()
                .and_then(|code| i8::try_from(code).ok())
                .and_then(|code| LiftStatus::try_from(code).ok())
                .ok_or_else(|| {
                    EntryError::invalid(
                        index,
                        field,
                        format!("item {position} must be -1, 0, or 1, got {status}"),
                    )
                })
        })
        .collect()
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
