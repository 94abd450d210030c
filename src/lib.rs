//! Divvy: division with remainder, taught by sharing apples into baskets.
//!
//! The game follows a "pure core, imperative shell" split. The core is a
//! small state machine with pure transitions; the shell renders snapshots and
//! runs the timer that clears transient feedback.
//!
//! # Core Concepts
//!
//! - **Game**: [`game::DivisionGame`] owns the configuration and progress and
//!   exposes `apply(action) -> (game, step)`
//! - **Phases**: distributing, answering, success; derived from the counts
//! - **Renderer**: any [`render::Renderer`] receives an immutable
//!   [`render::Snapshot`] after every applied step
//! - **Session**: [`session::Session`] drives a game from line input and
//!   schedules feedback clears
//!
//! # Example
//!
//! ```rust
//! use divvy::game::{DivisionGame, GameConfig, Phase};
//!
//! let mut game = DivisionGame::new(GameConfig::new(12, 4));
//! for _ in 0..3 {
//!     game.distribute();
//! }
//! assert_eq!(game.items_remaining(), 0);
//! assert_eq!(game.phase(), Phase::Answering);
//!
//! game.check_answer(3, 0);
//! assert_eq!(game.phase(), Phase::Success);
//! assert!(game.explanation().ends_with("0 left over. Perfect sharing!"));
//! ```

pub mod core;
pub mod game;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use game::{Action, DivisionGame, Feedback, GameConfig, Phase, StepResult};
pub use render::{Renderer, Snapshot};
pub use session::Session;
pub use settings::Settings;
