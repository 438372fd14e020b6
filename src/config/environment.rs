// ABOUTME: Environment configuration for the results service and CLI
// ABOUTME: Reads ranking defaults, parallelism, and log settings once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! The configuration is an immutable value built once in `main` and passed
//! down. Nothing reads the environment after startup.

use lifter_core::errors::{AppError, AppResult};
use lifter_leaderboard::{LeaderboardOptions, RankingPolicy};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Default ranking policy when `--mode` is omitted
pub const DEFAULT_MODE_VAR: &str = "LIFTER_RESULTS_DEFAULT_MODE";
/// Whether categories are ranked on the rayon pool
pub const PARALLEL_VAR: &str = "LIFTER_RESULTS_PARALLEL";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Per-category classification detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Results service configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultsConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Policy used when the caller does not pick one
    pub default_mode: RankingPolicy,
    /// Rank categories concurrently
    pub parallel: bool,
}

impl ResultsConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if `LIFTER_RESULTS_DEFAULT_MODE` names an
    /// unknown policy or `LIFTER_RESULTS_PARALLEL` is not a boolean
    pub fn from_env() -> AppResult<Self> {
        let default_mode = env_var_or(DEFAULT_MODE_VAR, RankingPolicy::Class.as_str())
            .parse::<RankingPolicy>()
            .map_err(|e| {
                AppError::config(format!("Invalid {DEFAULT_MODE_VAR} value: {}", e.message))
            })?;
        let parallel = parse_bool(PARALLEL_VAR, &env_var_or(PARALLEL_VAR, "true"))?;

        Ok(Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            default_mode,
            parallel,
        })
    }

    /// Log the loaded values once the subscriber is installed
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            log_level = %self.log_level,
            default_mode = %self.default_mode,
            parallel = self.parallel,
            "Configuration loaded"
        );
    }

    /// Leaderboard evaluation options derived from this configuration
    #[must_use]
    pub const fn leaderboard_options(&self) -> LeaderboardOptions {
        LeaderboardOptions {
            parallel: self.parallel,
        }
    }
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            log_level: LogLevel::Info,
            default_mode: RankingPolicy::Class,
            parallel: true,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "Invalid {key} value: '{other}'. Valid options: true, false"
        ))),
    }
}
