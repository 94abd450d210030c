//! Inputs to the game and what applying them produced.

use super::feedback::{Generation, Guess};
use std::time::Duration;
use thiserror::Error;

/// How a number field changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumberInput {
    /// An already parsed value
    Value(i64),
    /// Raw text typed into the field
    Text(String),
    /// The "+" stepper
    Increment,
    /// The "-" stepper
    Decrement,
}

impl NumberInput {
    /// The requested value, relative to `current` for the steppers.
    ///
    /// `None` when the text does not parse.
    pub fn resolve(&self, current: u32) -> Option<i64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Text(text) => super::parse_count(text),
            Self::Increment => Some(i64::from(current) + 1),
            Self::Decrement => Some(i64::from(current) - 1),
        }
    }
}

/// Everything the learner (or a timer) can do to a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetDividend(NumberInput),
    SetDivisor(NumberInput),
    Distribute,
    CheckAnswer(Guess),
    Reset,
    /// A deferred feedback clear scheduled at the given generation
    ClearFeedback(Generation),
}

/// Follow-up work requested by an applied step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// The state changed; redraw
    Render,
    /// Post `Action::ClearFeedback(generation)` once `after` has elapsed
    ScheduleFeedbackClear {
        generation: Generation,
        after: Duration,
    },
}

/// Why an action left the game untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Ignored {
    #[error("input is not a whole number")]
    Unparseable,

    #[error("not enough apples left for every basket")]
    NothingToDistribute,

    #[error("apples are still being shared")]
    StillDistributing,

    #[error("round already solved; restart to play again")]
    AlreadySolved,

    #[error("feedback clear from {scheduled} superseded by {current}")]
    StaleTimer {
        scheduled: Generation,
        current: Generation,
    },
}

/// Outcome of applying one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// State changed; carry out the effects in order
    Applied(Vec<Effect>),
    /// State is exactly as before
    Ignored(Ignored),
}

impl StepResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn effects(&self) -> &[Effect] {
        match self {
            Self::Applied(effects) => effects,
            Self::Ignored(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_input_resolves_relative_to_current() {
        assert_eq!(NumberInput::Increment.resolve(9), Some(10));
        assert_eq!(NumberInput::Decrement.resolve(1), Some(0));
        assert_eq!(NumberInput::Value(-4).resolve(7), Some(-4));
        assert_eq!(NumberInput::Text("15".into()).resolve(7), Some(15));
        assert_eq!(NumberInput::Text("lots".into()).resolve(7), None);
    }

    #[test]
    fn ignored_step_has_no_effects() {
        let step = StepResult::Ignored(Ignored::AlreadySolved);
        assert!(!step.is_applied());
        assert!(step.effects().is_empty());
    }

    #[test]
    fn ignored_reasons_read_plainly() {
        assert_eq!(
            Ignored::NothingToDistribute.to_string(),
            "not enough apples left for every basket"
        );
        let stale = Ignored::StaleTimer {
            scheduled: Generation::default(),
            current: Generation::default().next(),
        };
        assert_eq!(stale.to_string(), "feedback clear from #0 superseded by #1");
    }
}
