//! Transient guess feedback and the generation counter that keeps deferred
//! clears from touching newer state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long an "incorrect" signal stays visible.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(2500);

/// Result of the most recent guess, shown as an overlay on top of the phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect,
}

/// Identifies the latest applied transition.
///
/// A deferred feedback clear carries the generation it was scheduled in and
/// only takes effect if no other transition has happened since.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submitted guess.
///
/// `None` components come from text that did not parse. They never match the
/// real answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub quotient: Option<i64>,
    pub remainder: Option<i64>,
}

impl Guess {
    pub fn new(quotient: i64, remainder: i64) -> Self {
        Self {
            quotient: Some(quotient),
            remainder: Some(remainder),
        }
    }

    /// Build a guess from the two text fields.
    pub fn parse(quotient: &str, remainder: &str) -> Self {
        Self {
            quotient: super::parse_count(quotient),
            remainder: super::parse_count(remainder),
        }
    }

    /// Whether both parts equal the expected values.
    pub fn matches(&self, quotient: u32, remainder: u32) -> bool {
        self.quotient == Some(i64::from(quotient)) && self.remainder == Some(i64::from(remainder))
    }
}
