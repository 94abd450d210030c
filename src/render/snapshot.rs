//! Immutable view of a game handed to renderers.

use crate::game::{DivisionGame, Feedback, Guess, Phase};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a renderer needs to draw one frame.
///
/// `solution` and `explanation` are only present once the round is solved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Uuid>,
    pub dividend: u32,
    pub divisor: u32,
    pub items_remaining: u32,
    pub items_per_group: u32,
    pub phase: Phase,
    pub feedback: Feedback,
    pub equation: String,
    pub guess: Option<Guess>,
    pub solution: Option<String>,
    pub explanation: Option<String>,
}

impl Snapshot {
    /// Tag the snapshot with the session that produced it.
    pub fn with_session(self, session: Uuid) -> Self {
        Self {
            session: Some(session),
            ..self
        }
    }

    /// Whether the "distribute" control should be offered.
    pub fn shows_distribute(&self) -> bool {
        self.phase == Phase::Distributing
    }

    /// Whether the guess form should be offered.
    pub fn shows_guess_form(&self) -> bool {
        self.phase == Phase::Answering
    }

    /// Whether the error message should be visible.
    pub fn shows_error(&self) -> bool {
        self.feedback == Feedback::Incorrect
    }
}

impl From<&DivisionGame> for Snapshot {
    fn from(game: &DivisionGame) -> Self {
        let solved = game.phase() == Phase::Success;
        Self {
            session: None,
            dividend: game.dividend(),
            divisor: game.divisor(),
            items_remaining: game.items_remaining(),
            items_per_group: game.items_per_group(),
            phase: game.phase(),
            feedback: game.feedback(),
            equation: game.equation(),
            guess: game.guess(),
            solution: solved.then(|| game.solution()),
            explanation: solved.then(|| game.explanation()),
        }
    }
}
