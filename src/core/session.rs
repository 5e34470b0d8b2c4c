//! Timed-challenge session - countdown clock and aggregate counters.
//!
//! Lives only while a timed game is in `playing` or `stage-cleared`; once the
//! clock runs out it is finalized into an immutable stats snapshot for the
//! summary screen.

use crate::types::{GridSize, SESSION_TICK_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct TimedSession {
    puzzles_cleared: u32,
    total_moves: u32,
    remaining_ms: i64,
    duration_minutes: u32,
    difficulty: GridSize,
}

impl TimedSession {
    pub fn new(duration_minutes: u32, difficulty: GridSize) -> Self {
        Self {
            puzzles_cleared: 0,
            total_moves: 0,
            remaining_ms: duration_minutes as i64 * 60_000,
            duration_minutes,
            difficulty,
        }
    }

    /// Apply one 1-second countdown tick. Returns true once time is up.
    pub fn tick_second(&mut self) -> bool {
        self.remaining_ms -= SESSION_TICK_MS as i64;
        self.remaining_ms <= 0
    }

    /// Record a solved puzzle; counters persist across the session's puzzles.
    pub fn record_solve(&mut self, moves: u32) {
        self.puzzles_cleared += 1;
        self.total_moves += moves;
    }

    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    pub fn puzzles_cleared(&self) -> u32 {
        self.puzzles_cleared
    }

    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    pub fn difficulty(&self) -> GridSize {
        self.difficulty
    }

    /// Snapshot the session for the end-of-session summary.
    pub fn finalize(&self) -> TimedStats {
        let avg = if self.puzzles_cleared > 0 {
            Some(self.duration_minutes as f64 * 60.0 / self.puzzles_cleared as f64)
        } else {
            None
        };
        TimedStats {
            puzzles_cleared: self.puzzles_cleared,
            total_moves: self.total_moves,
            difficulty: self.difficulty,
            duration_minutes: self.duration_minutes,
            avg_secs_per_puzzle: avg,
        }
    }
}

/// Immutable end-of-session summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedStats {
    pub puzzles_cleared: u32,
    pub total_moves: u32,
    pub difficulty: GridSize,
    pub duration_minutes: u32,
    /// None when no puzzle was cleared.
    pub avg_secs_per_puzzle: Option<f64>,
}
