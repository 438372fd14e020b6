// ABOUTME: Results service tying configuration, payload parsing, and the leaderboard engine
// ABOUTME: Protocol-agnostic operations that take meet JSON and return result JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Results service
//!
//! Each operation parses the document once, runs the engine and serializes
//! the output. Only the leaderboard depends on configuration; the event and
//! lift operations are associated functions. The CLI is a thin shell over
//! these; a request handler would be another.

use crate::config::ResultsConfig;
use crate::payload::parse_meet_results;
use lifter_core::errors::{AppError, AppResult};
use lifter_core::models::MeetResults;
use lifter_leaderboard::{
    build_leaderboard_with, summarize_meet, unique_event_combos, Leaderboard, LiftSummary,
    RankingPolicy,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

/// Where a meet document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// `None` and `"-"` mean stdin, anything else a path
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Self::Stdin,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }

    /// Read the whole document as text
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when the source cannot be read
    pub fn read_to_string(&self) -> AppResult<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text).map_err(|e| {
                    AppError::invalid_input("failed to read meet document from stdin")
                        .with_source(e)
                })?;
                Ok(text)
            }
            Self::File(path) => fs::read_to_string(path).map_err(|e| {
                AppError::invalid_input(format!(
                    "failed to read meet document from {}",
                    path.display()
                ))
                .with_source(e)
            }),
        }
    }
}

/// Serialize an operation result
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` if the value cannot be written as JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Results operations bound to one configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultsService {
    config: ResultsConfig,
}

impl ResultsService {
    /// Create a service for a configuration
    #[must_use]
    pub const fn new(config: ResultsConfig) -> Self {
        Self { config }
    }

    /// Resolve the policy for a call: the explicit mode, else the configured default
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when `mode` is neither `class` nor `points`
    pub fn resolve_policy(&self, mode: Option<&str>) -> AppResult<RankingPolicy> {
        mode.map_or(Ok(self.config.default_mode), str::parse::<RankingPolicy>)
    }

    /// Build the leaderboard for a parsed meet
    ///
    /// # Errors
    ///
    /// Returns an error when the meet fails validation
    pub fn leaderboard(
        &self,
        results: &MeetResults,
        policy: RankingPolicy,
    ) -> AppResult<Leaderboard> {
        let leaderboard =
            build_leaderboard_with(results, policy, self.config.leaderboard_options())?;
        info!(
            policy = %policy,
            entries = results.entries.len(),
            "Built leaderboard"
        );
        Ok(leaderboard)
    }

    /// Leaderboard for a JSON meet document, as JSON
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown mode, a malformed document, or an
    /// invalid meet
    pub fn leaderboard_json(
        &self,
        text: &str,
        mode: Option<&str>,
        pretty: bool,
    ) -> AppResult<String> {
        let policy = self.resolve_policy(mode)?;
        let results = parse_meet_results(text)?;
        to_json(&self.leaderboard(&results, policy)?, pretty)
    }

    /// Distinct event combinations of a parsed meet
    #[must_use]
    pub fn events(results: &MeetResults) -> BTreeSet<String> {
        let events = unique_event_combos(&results.entries);
        info!(events = events.len(), "Collected event combinations");
        events
    }

    /// Event combinations for a JSON meet document, as a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed document or an invalid meet
    pub fn events_json(text: &str) -> AppResult<String> {
        let results = parse_meet_results(text)?;
        to_json(&Self::events(&results), false)
    }

    /// Lift summaries of a parsed meet, in roster order
    #[must_use]
    pub fn lifts(results: &MeetResults) -> Vec<LiftSummary> {
        let summaries = summarize_meet(results);
        info!(entries = summaries.len(), "Summarized best lifts");
        summaries
    }

    /// Lift summaries for a JSON meet document, as a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed document or an invalid meet
    pub fn lifts_json(text: &str, pretty: bool) -> AppResult<String> {
        let results = parse_meet_results(text)?;
        to_json(&Self::lifts(&results), pretty)
    }
}
