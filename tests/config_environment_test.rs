// ABOUTME: Integration tests for environment-driven results configuration
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lifter_results::config::environment::{DEFAULT_MODE_VAR, PARALLEL_VAR};
use lifter_results::config::{Environment, LogLevel, ResultsConfig};
use lifter_results::errors::ErrorCode;
use lifter_results::leaderboard::RankingPolicy;
use lifter_results::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 8] = [
    DEFAULT_MODE_VAR,
    PARALLEL_VAR,
    "ENVIRONMENT",
    "LOG_LEVEL",
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "SERVICE_NAME",
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ResultsConfig::from_env().unwrap();
    assert_eq!(config, ResultsConfig::default());
    assert_eq!(config.default_mode, RankingPolicy::Class);
    assert!(config.parallel);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_reads_every_variable() {
    clear_env();
    env::set_var(DEFAULT_MODE_VAR, "Points");
    env::set_var(PARALLEL_VAR, "false");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_LEVEL", "debug");

    let config = ResultsConfig::from_env().unwrap();
    assert_eq!(config.default_mode, RankingPolicy::Points);
    assert!(!config.parallel);
    assert!(!config.leaderboard_options().parallel);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.log_level, LogLevel::Debug);
    clear_env();
}

#[test]
#[serial]
fn test_unknown_default_mode_is_config_error() {
    clear_env();
    env::set_var(DEFAULT_MODE_VAR, "wilks");
    let error = ResultsConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains(DEFAULT_MODE_VAR));
    clear_env();
}

#[test]
#[serial]
fn test_non_boolean_parallel_is_config_error() {
    clear_env();
    env::set_var(PARALLEL_VAR, "sometimes");
    let error = ResultsConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_logging_follows_loaded_config() {
    clear_env();
    env::set_var("LOG_LEVEL", "warn");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "results-under-test");

    let config = ResultsConfig::from_env().unwrap();
    let logging = LoggingConfig::from_config(&config);
    assert_eq!(logging.level, "warn");
    assert_eq!(logging.format, LogFormat::Json);
    assert_eq!(logging.service_name, "results-under-test");
    assert!(!logging.include_location);
    clear_env();
}

#[test]
#[serial]
fn test_unknown_log_level_falls_back_to_info() {
    clear_env();
    env::set_var("LOG_LEVEL", "loud");
    let config = ResultsConfig::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(LoggingConfig::from_config(&config).level, "info");
    clear_env();
}

#[test]
#[serial]
fn test_rust_log_directive_overrides_level() {
    clear_env();
    env::set_var("LOG_LEVEL", "warn");
    env::set_var("RUST_LOG", "info,lifter_leaderboard=debug");
    let config = ResultsConfig::from_env().unwrap();
    assert_eq!(
        LoggingConfig::from_config(&config).level,
        "info,lifter_leaderboard=debug"
    );
    clear_env();
}

#[test]
#[serial]
fn test_production_logging_defaults() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    let logging = LoggingConfig::from_config(&ResultsConfig::from_env().unwrap());
    assert_eq!(logging.environment, Environment::Production);
    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
    clear_env();
}
