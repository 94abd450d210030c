use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Totals for one session, across every round played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds_solved: usize,
    pub guesses: usize,
    pub wrong_guesses: usize,
    /// Time from the start of the most recently solved round to its solution
    pub last_round: Option<Duration>,
}

fn counted(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solved {} with {} ({} wrong).",
            counted(self.rounds_solved, "round", "rounds"),
            counted(self.guesses, "guess", "guesses"),
            self.wrong_guesses
        )?;
        if let Some(last) = self.last_round {
            write!(f, " Last round took {}s.", last.as_secs())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pluralizes() {
        let summary = SessionSummary {
            rounds_solved: 1,
            guesses: 3,
            wrong_guesses: 2,
            last_round: Some(Duration::from_secs(42)),
        };
        assert_eq!(
            summary.to_string(),
            "Solved 1 round with 3 guesses (2 wrong). Last round took 42s."
        );
    }

    #[test]
    fn empty_summary() {
        assert_eq!(
            SessionSummary::default().to_string(),
            "Solved 0 rounds with 0 guesses (0 wrong)."
        );
    }
}
