// ABOUTME: Core data models for powerlifting meet results
// ABOUTME: Re-exports Entry, Sex, LiftStatus, MeetData and MeetResults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records describing a meet as the results engine sees it.
//!
//! ## Design Principles
//!
//! - **Typed core**: untyped client JSON is validated once at the boundary;
//!   everything past that point works on these records
//! - **Lossless**: fields the engine does not interpret are carried through
//!   unchanged and re-emitted on serialization
//! - **Transient**: records are built per call and never stored

mod entry;
mod meet;

// Entry domain
pub use entry::{Entry, LiftStatus, Sex};

// Meet domain
pub use meet::{MeetData, MeetResults};
