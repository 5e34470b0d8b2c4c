//! Scoring module - the classic-mode score formula.
//!
//! score = max(0, N^4 * 100 - floor(T_ms / 50) - M * N * 10)
//!
//! Larger grids start from a much larger base; elapsed time and move count
//! only ever subtract, so the score is non-increasing in both.

use crate::types::{GridSize, SCORE_BASE_FACTOR, SCORE_MOVE_FACTOR, SCORE_TIME_DIVISOR_MS};

/// Compute the classic-mode score for a solved puzzle.
pub fn calculate_score(size: GridSize, moves: u32, elapsed_ms: u64) -> u32 {
    let n = size.n() as i64;
    let base = n.pow(4) * SCORE_BASE_FACTOR;
    let time_penalty = elapsed_ms as i64 / SCORE_TIME_DIVISOR_MS;
    let move_penalty = moves as i64 * n * SCORE_MOVE_FACTOR;
    (base - time_penalty - move_penalty).max(0) as u32
}
