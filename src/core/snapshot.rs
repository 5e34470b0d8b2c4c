//! Render snapshot - the read surface consumed by render collaborators.
//!
//! A plain-data copy of everything a frontend needs each tick: the grid, the
//! in-flight transition's eased progress, selection/focus, the ghost-hint
//! flag, and phase-specific display data. The engine fills it; renderers
//! never reach into engine internals.

use crate::core::session::TimedStats;
use crate::types::{GameMode, GamePhase, GridSize, MAX_TILE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSnapshot {
    pub a: u8,
    pub b: u8,
    /// Eased progress in [0, 1].
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    pub remaining_ms: i64,
    pub puzzles_cleared: u32,
    pub total_moves: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub n: u8,
    pub tile_count: u8,
    pub tiles: [u8; MAX_TILE_COUNT],
    pub phase: GamePhase,
    pub mode: GameMode,
    pub selected: Option<u8>,
    pub focused: u8,
    pub ghost_hint: bool,
    pub is_shuffling: bool,
    pub transition: Option<TransitionSnapshot>,
    /// While counting down: ticks still to show; 0 means the "go" flourish.
    pub countdown: Option<u8>,
    pub move_count: u32,
    pub hint_budget: u8,
    pub elapsed_ms: u64,
    /// Last classic-mode score, shown on the result screen.
    pub score: Option<u32>,
    pub session: Option<SessionSnapshot>,
    /// Finalized session summary, present only on the times-up screen.
    pub timed_stats: Option<TimedStats>,
}

impl RenderSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            n: GridSize::Three.n() as u8,
            tile_count: GridSize::Three.tile_count() as u8,
            tiles: [0u8; MAX_TILE_COUNT],
            phase: GamePhase::Idle,
            mode: GameMode::Classic,
            selected: None,
            focused: 0,
            ghost_hint: false,
            is_shuffling: false,
            transition: None,
            countdown: None,
            move_count: 0,
            hint_budget: 0,
            elapsed_ms: 0,
            score: None,
            session: None,
            timed_stats: None,
        }
    }
}
