//! Effectful shell around the pure game.
//!
//! # Key Concepts
//!
//! - **Dispatch**: apply an action, then carry out the effects it requested
//! - **Feedback timer**: a tokio task that posts `ClearFeedback(generation)`
//!   back to the session; a newer step aborts it, and the game ignores any
//!   stale generation that still gets through
//! - **History**: phase changes of the current round, with timestamps

mod driver;
mod error;
mod summary;

pub use driver::Session;
pub use error::SessionError;
pub use summary::SessionSummary;
