//! Settings error types.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A single problem found while validating settings
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsViolation {
    #[error("dividend {value} is outside {min}..={max}")]
    DividendOutOfRange { value: i64, min: u32, max: u32 },

    #[error("divisor {value} is outside {min}..={max}")]
    DivisorOutOfRange { value: i64, min: u32, max: u32 },

    #[error("feedback delay {delay:?} is outside {min:?}..={max:?}")]
    FeedbackDelayOutOfRange {
        delay: Duration,
        min: Duration,
        max: Duration,
    },
}

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read
    #[error("cannot read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for `Settings`
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// One or more values are out of range; every problem is listed
    #[error("invalid settings: {}", list(.0))]
    Invalid(Vec<SettingsViolation>),
}

fn list(violations: &[SettingsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
