// ABOUTME: Configuration module for the results service
// ABOUTME: Re-exports the environment-driven configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: deployment, log level, default ranking policy and
//!   parallelism read from environment variables

/// Environment and service configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ResultsConfig};
