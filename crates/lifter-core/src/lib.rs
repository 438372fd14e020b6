// ABOUTME: Core types and constants for the lifter results platform
// ABOUTME: Foundation crate with error handling, meet/entry models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Lifter Core
//!
//! Foundation crate providing shared types and constants for powerlifting meet
//! results. Everything here is plain data: the leaderboard engine and the
//! calling layer both build on these types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `EntryError`
//! - **constants**: Unit conversion, label formatting, and category keys
//! - **models**: `Entry`, `Sex`, `LiftStatus`, `MeetData`, `MeetResults`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Entry, Sex, `MeetData`, etc.)
pub mod models;
