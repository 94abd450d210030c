//! Per-round progress and the derived phase.

use super::config::GameConfig;
use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Enough apples remain to give every basket one more
    Distributing,
    /// Sharing is done; waiting for a correct guess
    Answering,
    /// A correct guess was accepted
    Success,
}

impl State for Phase {
    fn name(&self) -> &'static str {
        match self {
            Self::Distributing => "distributing",
            Self::Answering => "answering",
            Self::Success => "success",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apples in the pile and in each basket.
///
/// Baskets always hold the same count, so a single `items_per_group` describes
/// all of them. `dividend == items_remaining + items_per_group * divisor` holds
/// for every value reachable through [`GameProgress::fresh`] and
/// [`GameProgress::distributed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    items_remaining: u32,
    items_per_group: u32,
    solved: bool,
}

impl GameProgress {
    /// Everything in the pile, nothing in the baskets.
    pub fn fresh(config: &GameConfig) -> Self {
        Self {
            items_remaining: config.dividend(),
            items_per_group: 0,
            solved: false,
        }
    }

    pub fn items_remaining(&self) -> u32 {
        self.items_remaining
    }

    pub fn items_per_group(&self) -> u32 {
        self.items_per_group
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether every basket can receive one more apple.
    pub fn can_distribute(&self, config: &GameConfig) -> bool {
        self.items_remaining >= config.divisor()
    }

    /// Progress after one apple went into each basket.
    ///
    /// Returns `None` when the pile is too small.
    pub fn distributed(self, config: &GameConfig) -> Option<Self> {
        let items_remaining = self.items_remaining.checked_sub(config.divisor())?;
        Some(Self {
            items_remaining,
            items_per_group: self.items_per_group + 1,
            ..self
        })
    }

    /// Progress with the round marked as solved.
    pub fn solved(self) -> Self {
        Self {
            solved: true,
            ..self
        }
    }

    /// Phase derived from the counts and the solved flag.
    pub fn phase(&self, config: &GameConfig) -> Phase {
        if self.can_distribute(config) {
            Phase::Distributing
        } else if self.solved {
            Phase::Success
        } else {
            Phase::Answering
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_progress_holds_everything_in_pile() {
        let config = GameConfig::new(14, 3);
        let progress = GameProgress::fresh(&config);

        assert_eq!(progress.items_remaining(), 14);
        assert_eq!(progress.items_per_group(), 0);
        assert!(!progress.is_solved());
        assert_eq!(progress.phase(&config), Phase::Distributing);
    }

    #[test]
    fn small_dividend_starts_in_answering() {
        let config = GameConfig::new(2, 5);
        let progress = GameProgress::fresh(&config);

        assert!(!progress.can_distribute(&config));
        assert_eq!(progress.phase(&config), Phase::Answering);
    }

    #[test]
    fn distributed_moves_one_apple_per_basket() {
        let config = GameConfig::new(14, 3);
        let progress = GameProgress::fresh(&config)
            .distributed(&config)
            .and_then(|p| p.distributed(&config));

        let progress = progress.unwrap();
        assert_eq!(progress.items_remaining(), 8);
        assert_eq!(progress.items_per_group(), 2);
    }

    #[test]
    fn distributed_refuses_short_pile() {
        let config = GameConfig::new(5, 3);
        let progress = GameProgress::fresh(&config).distributed(&config).unwrap();

        assert_eq!(progress.items_remaining(), 2);
        assert!(progress.distributed(&config).is_none());
    }

    #[test]
    fn solved_only_shows_once_sharing_is_done() {
        let config = GameConfig::new(14, 3);
        let early = GameProgress::fresh(&config).solved();
        assert_eq!(early.phase(&config), Phase::Distributing);

        let mut progress = GameProgress::fresh(&config);
        while let Some(next) = progress.distributed(&config) {
            progress = next;
        }
        assert_eq!(progress.phase(&config), Phase::Answering);
        assert_eq!(progress.solved().phase(&config), Phase::Success);
    }

    #[test]
    fn only_success_is_final() {
        assert!(!Phase::Distributing.is_final());
        assert!(!Phase::Answering.is_final());
        assert!(Phase::Success.is_final());
    }

    #[test]
    fn phase_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Phase::Distributing).unwrap(),
            "\"distributing\""
        );
        assert_eq!(Phase::Answering.to_string(), "answering");
    }
}
