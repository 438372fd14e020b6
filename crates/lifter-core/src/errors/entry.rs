// ABOUTME: Field-level errors for roster entries and meet configuration parsing
// ABOUTME: Identifies the offending entry index and field so bad input fails loudly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Entry Error Types
//!
//! A malformed entry must never be coerced or skipped: a zero-filled bodyweight
//! or points value silently misranks every other lifter in the category.
//! `EntryError` names the exact entry and field and converts into [`AppError`].

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while reading one roster entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Entry is not a JSON object
    #[error("entry {index} is not an object")]
    NotAnObject {
        /// Position of the entry in the roster
        index: usize,
    },
    /// Required field is absent or null
    #[error("entry {index} is missing required field '{field}'")]
    MissingField {
        /// Position of the entry in the roster
        index: usize,
        /// Wire name of the missing field
        field: &'static str,
    },
    /// Field is present with the wrong type or an unusable value
    #[error("entry {index} has invalid field '{field}': {reason}")]
    InvalidField {
        /// Position of the entry in the roster
        index: usize,
        /// Wire name of the invalid field
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
    /// `sex` is a string but not one of the known categories
    #[error("entry {index} has unknown sex '{value}' (expected M, F, or Mx)")]
    UnknownSex {
        /// Position of the entry in the roster
        index: usize,
        /// The rejected value
        value: String,
    },
}

impl EntryError {
    /// Create a "missing field" error
    #[must_use]
    pub const fn missing(index: usize, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }

    /// Create an "invalid field" error
    #[must_use]
    pub fn invalid(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            field,
            reason: reason.into(),
        }
    }

    /// Roster index of the offending entry
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::NotAnObject { index }
            | Self::MissingField { index, .. }
            | Self::InvalidField { index, .. }
            | Self::UnknownSex { index, .. } => *index,
        }
    }

    /// Wire name of the offending field, if the error concerns one
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject { .. } => None,
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => Some(field),
            Self::UnknownSex { .. } => Some(crate::constants::fields::SEX),
        }
    }
}

impl From<EntryError> for AppError {
    fn from(error: EntryError) -> Self {
        let code = match error {
            EntryError::MissingField { .. } => ErrorCode::MissingRequiredField,
            EntryError::NotAnObject { .. }
            | EntryError::InvalidField { .. }
            | EntryError::UnknownSex { .. } => ErrorCode::InvalidFormat,
        };
        let details = serde_json::json!({
            "entryIndex": error.index(),
            "field": error.field(),
        });
        Self::new(code, error.to_string())
            .with_details(details)
            .with_source(error)
    }
}
