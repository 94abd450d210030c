//! The division game state machine.
//!
//! All transitions are pure: [`DivisionGame::apply`] takes the current game
//! and an [`Action`] and returns the next game together with a
//! [`StepResult`]. The `&mut self` helpers are thin wrappers for callers that
//! keep a single owned game around.

use super::action::{Action, Effect, Ignored, NumberInput, StepResult};
use super::config::GameConfig;
use super::explanation;
use super::feedback::{Feedback, Generation, Guess, DEFAULT_FEEDBACK_DELAY};
use super::progress::{GameProgress, Phase};
use crate::core::Guard;
use std::time::Duration;

fn can_distribute(game: &DivisionGame) -> bool {
    game.progress.can_distribute(&game.config)
}

fn awaiting_answer(game: &DivisionGame) -> bool {
    game.phase() == Phase::Answering
}

/// Guards `Action::Distribute`.
pub const CAN_DISTRIBUTE: Guard<DivisionGame> =
    Guard::new("every basket can take one more apple", can_distribute);

/// Guards `Action::CheckAnswer`.
pub const AWAITING_ANSWER: Guard<DivisionGame> =
    Guard::new("sharing is finished and the round is unsolved", awaiting_answer);

/// One interactive round of sharing apples into baskets.
///
/// # Example
///
/// ```rust
/// use divvy::game::{DivisionGame, Feedback, GameConfig, Phase};
///
/// let mut game = DivisionGame::new(GameConfig::new(14, 3));
/// while game.phase() == Phase::Distributing {
///     game.distribute();
/// }
/// assert_eq!(game.items_per_group(), 4);
/// assert_eq!(game.items_remaining(), 2);
///
/// game.check_answer(4, 2);
/// assert_eq!(game.phase(), Phase::Success);
/// assert_eq!(game.feedback(), Feedback::Correct);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionGame {
    config: GameConfig,
    progress: GameProgress,
    feedback: Feedback,
    guess: Option<Guess>,
    generation: Generation,
    feedback_delay: Duration,
}

impl Default for DivisionGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl DivisionGame {
    /// Start a round with the given configuration.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            progress: GameProgress::fresh(&config),
            feedback: Feedback::None,
            guess: None,
            generation: Generation::default(),
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }

    /// Use a different delay before "incorrect" feedback clears.
    pub fn with_feedback_delay(self, feedback_delay: Duration) -> Self {
        Self {
            feedback_delay,
            ..self
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn dividend(&self) -> u32 {
        self.config.dividend()
    }

    pub fn divisor(&self) -> u32 {
        self.config.divisor()
    }

    pub fn items_remaining(&self) -> u32 {
        self.progress.items_remaining()
    }

    pub fn items_per_group(&self) -> u32 {
        self.progress.items_per_group()
    }

    pub fn phase(&self) -> Phase {
        self.progress.phase(&self.config)
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// The last guess submitted this round.
    pub fn guess(&self) -> Option<Guess> {
        self.guess
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }

    pub fn equation(&self) -> String {
        explanation::equation(&self.config)
    }

    pub fn solution(&self) -> String {
        explanation::solution(&self.config)
    }

    pub fn explanation(&self) -> String {
        explanation::explanation(&self.config)
    }

    /// Pure transition function.
    ///
    /// Applied steps bump the generation; ignored steps return an identical
    /// game.
    pub fn apply(&self, action: Action) -> (Self, StepResult) {
        match self.transition(action) {
            Ok((next, effects)) => (next, StepResult::Applied(effects)),
            Err(reason) => (self.clone(), StepResult::Ignored(reason)),
        }
    }

    /// Apply an action in place.
    pub fn dispatch(&mut self, action: Action) -> StepResult {
        let (next, result) = self.apply(action);
        *self = next;
        result
    }

    pub fn set_dividend(&mut self, value: i64) -> StepResult {
        self.dispatch(Action::SetDividend(NumberInput::Value(value)))
    }

    pub fn set_divisor(&mut self, value: i64) -> StepResult {
        self.dispatch(Action::SetDivisor(NumberInput::Value(value)))
    }

    /// Dividend typed as text; ignored unless it starts with an integer.
    pub fn enter_dividend(&mut self, text: &str) -> StepResult {
        self.dispatch(Action::SetDividend(NumberInput::Text(text.to_string())))
    }

    /// Divisor typed as text; ignored unless it starts with an integer.
    pub fn enter_divisor(&mut self, text: &str) -> StepResult {
        self.dispatch(Action::SetDivisor(NumberInput::Text(text.to_string())))
    }

    pub fn distribute(&mut self) -> StepResult {
        self.dispatch(Action::Distribute)
    }

    pub fn check_answer(&mut self, quotient: i64, remainder: i64) -> StepResult {
        self.dispatch(Action::CheckAnswer(Guess::new(quotient, remainder)))
    }

    pub fn check_guess(&mut self, guess: Guess) -> StepResult {
        self.dispatch(Action::CheckAnswer(guess))
    }

    pub fn reset(&mut self) -> StepResult {
        self.dispatch(Action::Reset)
    }

    pub fn clear_feedback(&mut self, scheduled: Generation) -> StepResult {
        self.dispatch(Action::ClearFeedback(scheduled))
    }

    fn transition(&self, action: Action) -> Result<(Self, Vec<Effect>), Ignored> {
        let generation = self.generation.next();

        match action {
            Action::SetDividend(input) => {
                let value = input
                    .resolve(self.config.dividend())
                    .ok_or(Ignored::Unparseable)?;
                let config = self.config.with_dividend(value);
                Ok((self.restarted(config, generation), vec![Effect::Render]))
            }
            Action::SetDivisor(input) => {
                let value = input
                    .resolve(self.config.divisor())
                    .ok_or(Ignored::Unparseable)?;
                let config = self.config.with_divisor(value);
                Ok((self.restarted(config, generation), vec![Effect::Render]))
            }
            Action::Distribute => {
                if !CAN_DISTRIBUTE.check(self) {
                    return Err(Ignored::NothingToDistribute);
                }
                let progress = self
                    .progress
                    .distributed(&self.config)
                    .ok_or(Ignored::NothingToDistribute)?;
                let next = Self {
                    progress,
                    generation,
                    ..self.clone()
                };
                Ok((next, vec![Effect::Render]))
            }
            Action::CheckAnswer(guess) => {
                if self.progress.is_solved() {
                    return Err(Ignored::AlreadySolved);
                }
                if !AWAITING_ANSWER.check(self) {
                    return Err(Ignored::StillDistributing);
                }

                if guess.matches(self.config.quotient(), self.config.remainder()) {
                    let next = Self {
                        progress: self.progress.solved(),
                        feedback: Feedback::Correct,
                        guess: Some(guess),
                        generation,
                        ..self.clone()
                    };
                    return Ok((next, vec![Effect::Render]));
                }

                let next = Self {
                    feedback: Feedback::Incorrect,
                    guess: Some(guess),
                    generation,
                    ..self.clone()
                };
                let effects = vec![
                    Effect::Render,
                    Effect::ScheduleFeedbackClear {
                        generation,
                        after: self.feedback_delay,
                    },
                ];
                Ok((next, effects))
            }
            Action::Reset => Ok((self.restarted(self.config, generation), vec![Effect::Render])),
            Action::ClearFeedback(scheduled) => {
                if scheduled != self.generation || self.feedback != Feedback::Incorrect {
                    return Err(Ignored::StaleTimer {
                        scheduled,
                        current: self.generation,
                    });
                }
                let next = Self {
                    feedback: Feedback::None,
                    generation,
                    ..self.clone()
                };
                Ok((next, vec![Effect::Render]))
            }
        }
    }

    /// Fresh progress for `config`; only the feedback delay carries over.
    fn restarted(&self, config: GameConfig, generation: Generation) -> Self {
        Self {
            config,
            progress: GameProgress::fresh(&config),
            feedback: Feedback::None,
            guess: None,
            generation,
            feedback_delay: self.feedback_delay,
        }
    }
}
