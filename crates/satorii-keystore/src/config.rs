//! Command-line configuration for the fixture generator.
//!
//! The generator takes one optional positional argument, the output path,
//! which defaults to `satorii.keystore` in the working directory. Logging
//! verbosity is selected with `--log-level`.
//!
//! # Example
//!
//! ```
//! use satorii_keystore::FixtureConfig;
//! use clap::Parser;
//!
//! let config = FixtureConfig::parse_from(["satorii-keystore", "out/test.keystore"]);
//! assert_eq!(config.output.to_str(), Some("out/test.keystore"));
//! ```

use crate::fixture::DEFAULT_FIXTURE_PATH;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

/// Fixture generator configuration loaded from CLI args.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "satorii-keystore",
    about = "Generate the satorii.keystore test fixture",
    version
)]
pub struct FixtureConfig {
    /// Destination path of the generated keystore fixture
    #[arg(default_value = DEFAULT_FIXTURE_PATH)]
    pub output: PathBuf,

    /// Set the logging level (logs are written to stderr)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl FixtureConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_FIXTURE_PATH),
            log_level: LogLevel::Warn,
        }
    }
}

/// Logging verbosity
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything, including encoder internals
    Trace,
    /// Encoded bytes and write progress
    Debug,
    /// One event per written fixture
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}
