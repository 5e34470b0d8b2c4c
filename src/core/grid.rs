//! Grid model - the tile permutation.
//!
//! The grid is an ordered sequence of N^2 tile identities: `tiles[pos]` is the
//! image tile drawn at screen position `pos`. It is always a permutation of
//! [0, N^2); the only mutation is an atomic two-position swap.

use crate::types::GridSize;

/// The tile grid. Owned exclusively by the engine; replaced wholesale on shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    n: usize,
    tiles: Vec<u8>,
}

impl Grid {
    /// Create the identity permutation (solved grid) for the given size.
    pub fn new(size: GridSize) -> Self {
        Self {
            n: size.n(),
            tiles: (0..size.tile_count() as u8).collect(),
        }
    }

    /// Adopt an already-generated permutation (the shuffle generator's output).
    pub(crate) fn from_tiles(size: GridSize, tiles: Vec<u8>) -> Self {
        debug_assert_eq!(tiles.len(), size.tile_count());
        Self { n: size.n(), tiles }
    }

    /// Side length N.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Tile identity at a position. Out of bounds returns None.
    pub fn tile_at(&self, pos: usize) -> Option<u8> {
        self.tiles.get(pos).copied()
    }

    /// Position currently showing the given tile.
    pub fn position_of(&self, tile: u8) -> Option<usize> {
        self.tiles.iter().position(|&t| t == tile)
    }

    /// Swap the tiles at two positions. All-or-nothing: returns false and
    /// leaves the grid untouched if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.tiles.len() || b >= self.tiles.len() {
            return false;
        }
        self.tiles.swap(a, b);
        true
    }

    /// True iff every position shows its own tile.
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(pos, &t)| pos == t as usize)
    }

    /// Permutation invariant check (each tile identity appears exactly once).
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; crate::types::MAX_TILE_COUNT];
        for &t in &self.tiles {
            let idx = t as usize;
            if idx >= self.tiles.len() || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_solved_identity() {
        for size in GridSize::ALL {
            let grid = Grid::new(size);
            assert_eq!(grid.tile_count(), size.tile_count());
            assert!(grid.is_solved());
            assert!(grid.is_permutation());
        }
    }

    #[test]
    fn test_swap_is_self_inverse() {
        let mut grid = Grid::new(GridSize::Three);
        let before = grid.clone();

        assert!(grid.swap(0, 5));
        assert!(!grid.is_solved());
        assert!(grid.is_permutation());

        assert!(grid.swap(0, 5));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_swap_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(GridSize::Three);
        let before = grid.clone();
        assert!(!grid.swap(0, 9));
        assert!(!grid.swap(42, 1));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_position_of_tracks_swaps() {
        let mut grid = Grid::new(GridSize::Four);
        grid.swap(2, 11);
        assert_eq!(grid.position_of(2), Some(11));
        assert_eq!(grid.position_of(11), Some(2));
        assert_eq!(grid.tile_at(2), Some(11));
    }
}
