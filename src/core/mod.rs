//! Core module - pure game logic with no I/O.
//!
//! Everything here is driven by discrete inputs and `tick(elapsed_ms)` calls;
//! collaborator side effects leave as `EngineEvent`s.

pub mod game_state;
pub mod grid;
pub mod history;
pub mod leaderboard;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shuffle;
pub mod snapshot;
pub mod transition;

// Re-export commonly used types
pub use game_state::{EngineEvent, FeedbackContext, GameEngine};
pub use grid::Grid;
pub use leaderboard::{Leaderboard, ScoreEntry};
pub use session::{TimedSession, TimedStats};
pub use snapshot::RenderSnapshot;
