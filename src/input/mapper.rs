//! Pointer and focus mapping - surface pixels and key directions to grid
//! indices.
//!
//! The render/pointer-surface collaborator supplies pixel dimensions and
//! click coordinates; this module does the per-tile division. Keyboard focus
//! moves one cell at a time and clamps at the edges (no wraparound).

use crate::types::FocusDirection;

/// Map a click at (x, y) on a surface of the given pixel size to a grid
/// index. Clicks outside the surface map to None.
pub fn pointer_to_index(x: f32, y: f32, width: f32, height: f32, n: usize) -> Option<usize> {
    if width <= 0.0 || height <= 0.0 || n == 0 {
        return None;
    }
    if x < 0.0 || y < 0.0 || x >= width || y >= height {
        return None;
    }
    let tile_w = width / n as f32;
    let tile_h = height / n as f32;
    let col = (x / tile_w) as usize;
    let row = (y / tile_h) as usize;
    if col >= n || row >= n {
        return None;
    }
    Some(row * n + col)
}

/// Move the focused index one cell in a direction, clamped at grid edges.
pub fn move_focus(focused: usize, n: usize, dir: FocusDirection) -> usize {
    let col = focused % n;
    let row = focused / n;
    let (col, row) = match dir {
        FocusDirection::Up => (col, row.saturating_sub(1)),
        FocusDirection::Down => (col, (row + 1).min(n - 1)),
        FocusDirection::Left => (col.saturating_sub(1), row),
        FocusDirection::Right => ((col + 1).min(n - 1), row),
    };
    row * n + col
}
