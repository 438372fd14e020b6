// ABOUTME: Main library entry point for the lifter results calling layer
// ABOUTME: Wires configuration, logging, payload parsing, and the leaderboard engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Lifter Results
//!
//! Results side of a powerlifting meet tool. The ranking itself lives in
//! `lifter-leaderboard`; this crate is the layer around it that reads a meet
//! document, picks the ranking policy and writes the result.
//!
//! ## Architecture
//!
//! - **Config**: environment configuration built once at startup
//! - **Logging**: `tracing` subscriber writing to stderr
//! - **Payload**: untyped JSON to validated `MeetResults`, merging platform
//!   snapshots
//! - **Service**: leaderboard, event and lift operations over JSON text
//!
//! ## Example Usage
//!
//! ```rust
//! use lifter_results::config::ResultsConfig;
//! use lifter_results::service::ResultsService;
//!
//! let meet = r#"{
//!     "meetData": {"weightClassesKgMen": [59, 66, 74], "weightClassesKgWomen": [],
//!                  "weightClassesKgMx": [], "inKg": true},
//!     "entries": [{"sex": "M", "bodyweightKg": 80, "points": 410}]
//! }"#;
//! let service = ResultsService::new(ResultsConfig::default());
//! let json = service.leaderboard_json(meet, Some("class"), false)?;
//! assert!(json.contains(r#""weightClass":"74+""#));
//! # Ok::<(), lifter_results::errors::AppError>(())
//! ```

/// Environment configuration
pub mod config;

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Meet document parsing and platform merging
pub mod payload;

/// Results operations over meet documents
pub mod service;

pub use lifter_core::models;
pub use lifter_leaderboard as leaderboard;
