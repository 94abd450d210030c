//! Phase history for a single round.
//!
//! A round starts when progress is (re)created and ends when a final phase is
//! reached. The history is an immutable value: `record` returns a new history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseChange<S: State> {
    /// Phase before the step
    pub from: S,
    /// Phase after the step
    pub to: S,
    /// When the step was applied
    pub timestamp: DateTime<Utc>,
    /// Guesses submitted in this round so far, including the one that caused the change
    pub guesses: usize,
}

/// Ordered phase changes of one round.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use divvy::core::{PhaseChange, RoundHistory};
/// use divvy::game::Phase;
///
/// let started = Utc::now();
/// let history = RoundHistory::new(Phase::Distributing, started);
/// let history = history.record(PhaseChange {
///     from: Phase::Distributing,
///     to: Phase::Answering,
///     timestamp: started,
///     guesses: 0,
/// });
///
/// assert_eq!(history.path(), vec![Phase::Distributing, Phase::Answering]);
/// assert!(history.time_to_finish().is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RoundHistory<S: State> {
    initial: S,
    started_at: DateTime<Utc>,
    changes: Vec<PhaseChange<S>>,
}

impl<S: State> RoundHistory<S> {
    /// Start a history for a round beginning in `initial`.
    pub fn new(initial: S, started_at: DateTime<Utc>) -> Self {
        Self {
            initial,
            started_at,
            changes: Vec::new(),
        }
    }

    /// Record a phase change, returning a new history.
    pub fn record(&self, change: PhaseChange<S>) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self {
            initial: self.initial,
            started_at: self.started_at,
            changes,
        }
    }

    /// Phases visited, starting with the initial one.
    pub fn path(&self) -> Vec<S> {
        std::iter::once(self.initial)
            .chain(self.changes.iter().map(|change| change.to))
            .collect()
    }

    /// Current phase according to the recorded changes.
    pub fn current(&self) -> S {
        self.changes
            .last()
            .map_or(self.initial, |change| change.to)
    }

    /// Time from the start of the round until it first reached a final phase.
    ///
    /// Returns `None` while the round is unfinished.
    pub fn time_to_finish(&self) -> Option<Duration> {
        self.changes
            .iter()
            .find(|change| change.to.is_final())
            .and_then(|change| {
                change
                    .timestamp
                    .signed_duration_since(self.started_at)
                    .to_std()
                    .ok()
            })
    }

    /// When the round started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// All recorded changes in order.
    pub fn changes(&self) -> &[PhaseChange<S>] {
        &self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestPhase {
        Working,
        Checking,
        Finished,
    }

    impl State for TestPhase {
        fn name(&self) -> &'static str {
            match self {
                Self::Working => "working",
                Self::Checking => "checking",
                Self::Finished => "finished",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Finished)
        }
    }

    fn change(from: TestPhase, to: TestPhase, at: DateTime<Utc>) -> PhaseChange<TestPhase> {
        PhaseChange {
            from,
            to,
            timestamp: at,
            guesses: 0,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = RoundHistory::new(TestPhase::Working, Utc::now());
        assert!(history.changes().is_empty());
        assert_eq!(history.path(), vec![TestPhase::Working]);
        assert_eq!(history.current(), TestPhase::Working);
        assert!(history.time_to_finish().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = RoundHistory::new(TestPhase::Working, Utc::now());
        let next = history.record(change(TestPhase::Working, TestPhase::Checking, Utc::now()));

        assert_eq!(history.changes().len(), 0);
        assert_eq!(next.changes().len(), 1);
        assert_eq!(next.current(), TestPhase::Checking);
    }

    #[test]
    fn path_returns_phase_sequence() {
        let now = Utc::now();
        let history = RoundHistory::new(TestPhase::Working, now)
            .record(change(TestPhase::Working, TestPhase::Checking, now))
            .record(change(TestPhase::Checking, TestPhase::Finished, now));

        assert_eq!(
            history.path(),
            vec![
                TestPhase::Working,
                TestPhase::Checking,
                TestPhase::Finished
            ]
        );
    }

    #[test]
    fn time_to_finish_measures_from_round_start() {
        let start = Utc::now();
        let history = RoundHistory::new(TestPhase::Working, start)
            .record(change(
                TestPhase::Working,
                TestPhase::Checking,
                start + chrono::Duration::seconds(2),
            ))
            .record(change(
                TestPhase::Checking,
                TestPhase::Finished,
                start + chrono::Duration::seconds(7),
            ));

        assert_eq!(history.time_to_finish(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn guesses_are_tracked() {
        let history = RoundHistory::new(TestPhase::Checking, Utc::now()).record(PhaseChange {
            from: TestPhase::Checking,
            to: TestPhase::Finished,
            timestamp: Utc::now(),
            guesses: 3,
        });

        assert_eq!(history.changes()[0].guesses, 3);
    }

    #[test]
    fn history_serializes_correctly() {
        let now = Utc::now();
        let history = RoundHistory::new(TestPhase::Working, now)
            .record(change(TestPhase::Working, TestPhase::Checking, now));

        let json = serde_json::to_string(&history).unwrap();
        let back: RoundHistory<TestPhase> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.path(), history.path());
    }
}
