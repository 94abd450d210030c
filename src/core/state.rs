//! Core State trait for game phases.
//!
//! A phase describes where a round currently stands. Phases are plain values
//! with pure inspection methods; nothing here mutates anything.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the phases a round moves through.
///
/// # Required Traits
///
/// - `Copy` + `PartialEq`: phases are compared before and after every step
/// - `Debug`: phases appear in logs
/// - `Serialize` + `Deserialize`: phases are part of the render snapshot
///
/// # Example
///
/// ```rust
/// use divvy::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lesson {
///     Counting,
///     Done,
/// }
///
/// impl State for Lesson {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Counting => "counting",
///             Self::Done => "done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// assert!(Lesson::Done.is_final());
/// assert_eq!(Lesson::Counting.name(), "counting");
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable lowercase name, used for display and logging.
    fn name(&self) -> &'static str;

    /// Whether the round is over in this phase.
    ///
    /// Only a reset leaves a final phase. Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestPhase {
        Open,
        Closed,
    }

    impl State for TestPhase {
        fn name(&self) -> &'static str {
            match self {
                Self::Open => "open",
                Self::Closed => "closed",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Closed)
        }
    }

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    struct Endless;

    impl State for Endless {
        fn name(&self) -> &'static str {
            "endless"
        }
    }

    #[test]
    fn name_returns_stable_label() {
        assert_eq!(TestPhase::Open.name(), "open");
        assert_eq!(TestPhase::Closed.name(), "closed");
    }

    #[test]
    fn is_final_identifies_terminal_phase() {
        assert!(!TestPhase::Open.is_final());
        assert!(TestPhase::Closed.is_final());
    }

    #[test]
    fn is_final_defaults_to_false() {
        assert!(!Endless.is_final());
    }

    #[test]
    fn phase_serializes_correctly() {
        let json = serde_json::to_string(&TestPhase::Closed).unwrap();
        let back: TestPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestPhase::Closed);
    }
}
