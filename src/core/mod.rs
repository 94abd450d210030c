//! Core state machine building blocks.
//!
//! - Phases via the `State` trait
//! - Named guard predicates for transition control
//! - Immutable per-round phase history
//!
//! Everything in this module is pure.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{PhaseChange, RoundHistory};
pub use state::State;
