// ABOUTME: Re-exports the unified error types from lifter-core
// ABOUTME: Keeps crate::errors paths stable for the service and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling, defined in `lifter-core`

pub use lifter_core::errors::*;
