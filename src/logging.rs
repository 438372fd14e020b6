// ABOUTME: Logging configuration and structured logging setup for the results CLI
// ABOUTME: Sends every log line to stderr so stdout carries only the JSON result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration

use crate::config::environment::{Environment, ResultsConfig};
use anyhow::Result;
use lifter_core::constants::service_names;
use serde_json::json;
use std::env;
use std::fmt as std_fmt;
use std::io;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for log shippers
    Json,
    /// Full human readable output with targets
    Pretty,
    /// One short line per event
    #[default]
    Compact,
}

impl LogFormat {
    /// Lowercase name of the format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!(
                "Unknown log format: '{other}'. Valid options: json, pretty, compact"
            )),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::LIFTER_RESULTS.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

/// Crates whose events follow the configured level
const WORKSPACE_TARGETS: [&str; 3] = ["lifter_results", "lifter_leaderboard", "lifter_core"];

fn flag_enabled(key: &str) -> bool {
    env::var(key).is_ok_and(|value| value != "false" && value != "0")
}

impl LoggingConfig {
    /// Create logging configuration for a loaded [`ResultsConfig`]
    ///
    /// The level is the configured [`ResultsConfig::log_level`] unless
    /// `RUST_LOG` holds a filter directive. Output settings still come from
    /// `LOG_FORMAT`, `LOG_INCLUDE_*` and `SERVICE_*`; an unrecognised
    /// `LOG_FORMAT` falls back to the environment's default format.
    #[must_use]
    pub fn from_config(config: &ResultsConfig) -> Self {
        let environment = config.environment;
        let format = env::var("LOG_FORMAT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(if environment.is_production() {
                LogFormat::Json
            } else {
                LogFormat::Compact
            });

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.to_string()),
            format,
            include_location: environment.is_production() || flag_enabled("LOG_INCLUDE_LOCATION"),
            include_thread: flag_enabled("LOG_INCLUDE_THREAD"),
            include_spans: flag_enabled("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::LIFTER_RESULTS.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter
    ///
    /// A bare level applies to our crates with everything else at warn. A
    /// directive string (`lifter_leaderboard=debug`, `info,lifter_core=trace`)
    /// is used as the whole filter, the way `RUST_LOG` is normally read.
    fn env_filter(&self) -> Result<EnvFilter> {
        if self.level.contains(['=', ',']) {
            return Ok(EnvFilter::try_new(&self.level)?);
        }
        let mut filter = EnvFilter::new("warn");
        for target in WORKSPACE_TARGETS {
            filter = filter.add_directive(format!("{target}={}", self.level.trim()).parse()?);
        }
        Ok(filter)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a valid filter or a global
    /// subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter()?);
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string(),
            },
            "logging": {
                "level": self.level,
                "format": self.format.as_str(),
                "location": self.include_location,
                "thread": self.include_thread,
                "spans": self.include_spans,
            }
        });
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Lifter results starting: {summary}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_with_level_overrides() {
        let config = LoggingConfig::default().with_level("debug");
        assert_eq!(config.level, "debug");
        assert_eq!(config.service_name, "lifter-results");
    }

    #[test]
    fn test_filter_names_workspace_crates() {
        let filter = LoggingConfig::default()
            .with_level("debug")
            .env_filter()
            .unwrap()
            .to_string();
        assert!(filter.contains("lifter_leaderboard=debug"));
        assert!(filter.contains("lifter_results=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn test_directive_level_is_used_as_whole_filter() {
        let filter = LoggingConfig::default()
            .with_level("lifter_leaderboard=debug")
            .env_filter()
            .unwrap()
            .to_string();
        assert!(filter.contains("lifter_leaderboard=debug"));
        assert!(!filter.contains("lifter_results="));

        let filter = LoggingConfig::default()
            .with_level("warn,lifter_core=trace")
            .env_filter()
            .unwrap()
            .to_string();
        assert!(filter.contains("lifter_core=trace"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn test_invalid_level_is_reported() {
        assert!(LoggingConfig::default().with_level("loud").env_filter().is_err());
        assert!(LoggingConfig::default()
            .with_level("lifter_core=loud")
            .env_filter()
            .is_err());
    }

    #[test]
    fn test_from_config_takes_environment() {
        let config = ResultsConfig {
            log_level: crate::config::LogLevel::Debug,
            environment: Environment::Production,
            ..ResultsConfig::default()
        };
        let logging = LoggingConfig::from_config(&config);
        assert_eq!(logging.environment, Environment::Production);
        assert!(logging.include_location);
    }
}
