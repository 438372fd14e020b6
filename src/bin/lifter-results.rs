// ABOUTME: Lifter results CLI - leaderboards, event lists, and lift summaries from meet JSON
// ABOUTME: Reads a meet document from a file or stdin and writes result JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Leaderboard grouped by weight class
//! lifter-results leaderboard --mode class --input meet.json
//!
//! # Flat points leaderboard from stdin, pretty printed
//! cat meet.json | lifter-results leaderboard --mode points --pretty
//!
//! # Distinct event combinations
//! lifter-results events --input meet.json
//!
//! # Best good attempt per lift for every entry
//! lifter-results lifts --input meet.json
//! ```

use clap::{Parser, Subcommand};
use lifter_results::config::environment::LogLevel;
use lifter_results::config::ResultsConfig;
use lifter_results::errors::{AppError, AppResult, ErrorResponse};
use lifter_results::logging::LoggingConfig;
use lifter_results::service::{InputSource, ResultsService};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "lifter-results",
    version,
    about = "Powerlifting meet results",
    long_about = "Builds weight class and points leaderboards, event lists, and lift summaries from a merged meet document."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank entries by weight class or by points
    Leaderboard {
        /// Ranking policy: class or points (defaults to `LIFTER_RESULTS_DEFAULT_MODE`)
        #[arg(long)]
        mode: Option<String>,

        /// Meet document path, `-` for stdin
        #[arg(long, short = 'i')]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// List distinct event combinations
    Events {
        /// Meet document path, `-` for stdin
        #[arg(long, short = 'i')]
        input: Option<String>,
    },

    /// Summarize each entry's best good attempts
    Lifts {
        /// Meet document path, `-` for stdin
        #[arg(long, short = 'i')]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = ResultsConfig::from_env();
    let fallback = ResultsConfig::default();
    let mut logging = LoggingConfig::from_config(loaded.as_ref().unwrap_or(&fallback));
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug.to_string());
    }
    if let Err(e) = logging.init() {
        eprintln!("failed to initialise logging: {e:#}");
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => return report(e),
    };
    config.log_summary();

    match run(config, cli.command) {
        Ok(output) => match write_stdout(&output) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report(e),
        },
        Err(e) => report(e),
    }
}

fn run(config: ResultsConfig, command: Command) -> AppResult<String> {
    let service = ResultsService::new(config);

    match command {
        Command::Leaderboard {
            mode,
            input,
            pretty,
        } => {
            let text = InputSource::from_arg(input.as_deref()).read_to_string()?;
            info!(mode = mode.as_deref().unwrap_or("default"), "Building leaderboard");
            service.leaderboard_json(&text, mode.as_deref(), pretty)
        }
        Command::Events { input } => {
            let text = InputSource::from_arg(input.as_deref()).read_to_string()?;
            ResultsService::events_json(&text)
        }
        Command::Lifts { input, pretty } => {
            let text = InputSource::from_arg(input.as_deref()).read_to_string()?;
            ResultsService::lifts_json(&text, pretty)
        }
    }
}

fn write_stdout(output: &str) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")
        .and_then(|()| stdout.flush())
        .map_err(|e| AppError::internal("failed to write result to stdout").with_source(e))
}

/// Log the failure and print the structured error body to stderr
fn report(e: AppError) -> ExitCode {
    error!(code = ?e.code, "{e}");
    let body = serde_json::to_string(&ErrorResponse::from(e))
        .unwrap_or_else(|_| String::from(r#"{"error":{"code":"INTERNAL_ERROR"}}"#));
    eprintln!("{body}");
    ExitCode::FAILURE
}
