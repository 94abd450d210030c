//! The division game: configuration, progress, feedback and the pure
//! transition function that ties them together.
//!
//! A learner shares `dividend` apples into `divisor` baskets one apple per
//! basket at a time, then guesses the quotient and remainder. At every step
//! `dividend == items_remaining + items_per_group * divisor`.

mod action;
mod config;
mod explanation;
mod feedback;
mod machine;
mod progress;

pub use action::{Action, Effect, Ignored, NumberInput, StepResult};
pub use config::{
    parse_count, GameConfig, DEFAULT_DIVIDEND, DEFAULT_DIVISOR, DIVIDEND_RANGE, DIVISOR_RANGE,
};
pub use explanation::{equation, explanation, solution};
pub use feedback::{Feedback, Generation, Guess, DEFAULT_FEEDBACK_DELAY};
pub use machine::{DivisionGame, AWAITING_ANSWER, CAN_DISTRIBUTE};
pub use progress::{GameProgress, Phase};
