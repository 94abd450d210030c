//! Validation rules for settings files.
//!
//! Interactive input is clamped, but a settings file is written on purpose,
//! so out-of-range values there are reported instead. Every rule runs and all
//! violations are accumulated with `Validation`, so a broken file can be fixed
//! in one pass.

use super::error::SettingsViolation;
use super::Settings;
use crate::game::{DIVIDEND_RANGE, DIVISOR_RANGE};
use std::ops::RangeInclusive;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Shortest allowed feedback delay.
pub const MIN_FEEDBACK_DELAY: Duration = Duration::from_millis(100);

/// Longest allowed feedback delay.
pub const MAX_FEEDBACK_DELAY: Duration = Duration::from_secs(60);

type Check = Validation<(), NonEmptyVec<SettingsViolation>>;

fn in_range(value: i64, range: &RangeInclusive<u32>) -> bool {
    value >= i64::from(*range.start()) && value <= i64::from(*range.end())
}

fn check_dividend(settings: &Settings) -> Check {
    if in_range(settings.dividend, &DIVIDEND_RANGE) {
        Validation::success(())
    } else {
        Validation::fail(SettingsViolation::DividendOutOfRange {
            value: settings.dividend,
            min: *DIVIDEND_RANGE.start(),
            max: *DIVIDEND_RANGE.end(),
        })
    }
}

fn check_divisor(settings: &Settings) -> Check {
    if in_range(settings.divisor, &DIVISOR_RANGE) {
        Validation::success(())
    } else {
        Validation::fail(SettingsViolation::DivisorOutOfRange {
            value: settings.divisor,
            min: *DIVISOR_RANGE.start(),
            max: *DIVISOR_RANGE.end(),
        })
    }
}

fn check_feedback_delay(settings: &Settings) -> Check {
    let delay = settings.feedback_delay();
    if (MIN_FEEDBACK_DELAY..=MAX_FEEDBACK_DELAY).contains(&delay) {
        Validation::success(())
    } else {
        Validation::fail(SettingsViolation::FeedbackDelayOutOfRange {
            delay,
            min: MIN_FEEDBACK_DELAY,
            max: MAX_FEEDBACK_DELAY,
        })
    }
}

/// Run every rule, accumulating ALL violations.
pub fn validate(settings: &Settings) -> Check {
    let checks = vec![
        check_dividend(settings),
        check_divisor(settings),
        check_feedback_delay(settings),
    ];
    Validation::all_vec(checks).map(|_| ())
}
