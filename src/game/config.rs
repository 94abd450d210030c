//! Round configuration: how many apples and how many baskets.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed number of apples.
pub const DIVIDEND_RANGE: RangeInclusive<u32> = 1..=99;

/// Allowed number of baskets.
pub const DIVISOR_RANGE: RangeInclusive<u32> = 1..=9;

pub const DEFAULT_DIVIDEND: u32 = 14;
pub const DEFAULT_DIVISOR: u32 = 3;

/// Dividend and divisor of the current round.
///
/// Both values are clamped on construction, so a `GameConfig` is always in
/// range and the divisor is never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    dividend: u32,
    divisor: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dividend: DEFAULT_DIVIDEND,
            divisor: DEFAULT_DIVISOR,
        }
    }
}

impl GameConfig {
    /// Build a configuration, clamping both values into range.
    ///
    /// ```rust
    /// use divvy::game::GameConfig;
    ///
    /// let config = GameConfig::new(0, 15);
    /// assert_eq!(config.dividend(), 1);
    /// assert_eq!(config.divisor(), 9);
    /// ```
    pub fn new(dividend: i64, divisor: i64) -> Self {
        Self {
            dividend: clamp_into(dividend, &DIVIDEND_RANGE),
            divisor: clamp_into(divisor, &DIVISOR_RANGE),
        }
    }

    pub fn dividend(&self) -> u32 {
        self.dividend
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Copy with a new (clamped) dividend.
    pub fn with_dividend(self, dividend: i64) -> Self {
        Self {
            dividend: clamp_into(dividend, &DIVIDEND_RANGE),
            ..self
        }
    }

    /// Copy with a new (clamped) divisor.
    pub fn with_divisor(self, divisor: i64) -> Self {
        Self {
            divisor: clamp_into(divisor, &DIVISOR_RANGE),
            ..self
        }
    }

    /// Apples per basket once sharing is done.
    pub fn quotient(&self) -> u32 {
        self.dividend / self.divisor
    }

    /// Apples that cannot be shared evenly.
    pub fn remainder(&self) -> u32 {
        self.dividend % self.divisor
    }
}

fn clamp_into(value: i64, range: &RangeInclusive<u32>) -> u32 {
    let clamped = value.clamp(i64::from(*range.start()), i64::from(*range.end()));
    // In range of u32 after the clamp above.
    u32::try_from(clamped).unwrap_or(*range.start())
}

/// Parse the leading integer of `text`.
///
/// Leading whitespace and a single sign are accepted, then as many digits as
/// follow; anything after the digits is ignored. Returns `None` when no digit
/// is found. Very long digit runs saturate instead of overflowing, which is
/// harmless because every caller clamps afterwards.
///
/// ```rust
/// use divvy::game::parse_count;
///
/// assert_eq!(parse_count(" 12"), Some(12));
/// assert_eq!(parse_count("12 apples"), Some(12));
/// assert_eq!(parse_count("-3"), Some(-3));
/// assert_eq!(parse_count("apples"), None);
/// assert_eq!(parse_count(""), None);
/// ```
pub fn parse_count(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    seen_digit.then_some(if negative { -value } else { value })
}
