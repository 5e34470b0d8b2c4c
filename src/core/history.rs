//! Move history - the undo stack.
//!
//! Append-only during play, popped on undo, cleared on every new puzzle.
//! A swap is its own inverse, so undo replays the popped pair directly.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<(usize, usize)>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, a: usize, b: usize) {
        self.moves.push((a, b));
    }

    pub fn pop(&mut self) -> Option<(usize, usize)> {
        self.moves.pop()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
