//! Shuffle generator - the starting permutation plus its animation script.
//!
//! The committed permutation comes from a uniform Fisher-Yates shuffle; since
//! any transposition is a legal move there is no parity correction. The
//! animation script is a separate list of random index pairs replayed as short
//! transitions. It is illustrative only: playing it never mutates the already
//! committed grid (the final permutation is authoritative).

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{GridSize, SHUFFLE_GAP_MS, SHUFFLE_PAIRS_PER_TILE, SHUFFLE_SCRIPT_MAX};

/// A generated starting position: the committed tiles and the cosmetic script.
#[derive(Debug, Clone)]
pub struct ShufflePlan {
    pub tiles: Vec<u8>,
    pub script: ArrayVec<(u8, u8), SHUFFLE_SCRIPT_MAX>,
}

/// Generate a randomized, guaranteed-unsolved permutation and its script.
pub fn generate(rng: &mut SimpleRng, size: GridSize) -> ShufflePlan {
    let tile_count = size.tile_count();
    let mut tiles: Vec<u8> = (0..tile_count as u8).collect();
    rng.shuffle(&mut tiles);

    // Force an unsolved start if the shuffle landed on the identity.
    if tiles.iter().enumerate().all(|(i, &t)| i == t as usize) {
        tiles.swap(0, 1);
    }

    let mut script = ArrayVec::new();
    for _ in 0..tile_count * SHUFFLE_PAIRS_PER_TILE {
        let (a, b) = rng.distinct_pair(tile_count);
        script.push((a as u8, b as u8));
    }

    ShufflePlan { tiles, script }
}

/// Playback state for the cosmetic script. The engine polls it for the next
/// pair whenever no transition is in flight; a fixed gap separates swaps.
#[derive(Debug, Clone)]
pub struct ShuffleScript {
    moves: ArrayVec<(u8, u8), SHUFFLE_SCRIPT_MAX>,
    next: usize,
    gap_ms: u32,
}

impl ShuffleScript {
    pub fn new(moves: ArrayVec<(u8, u8), SHUFFLE_SCRIPT_MAX>) -> Self {
        // First swap starts immediately; the gap applies between swaps.
        Self {
            moves,
            next: 0,
            gap_ms: 0,
        }
    }

    /// Advance the inter-swap gap and hand out the next pair when it is due.
    /// Call only while no transition is in flight.
    pub fn poll(&mut self, elapsed_ms: u32) -> Option<(usize, usize)> {
        if self.next >= self.moves.len() {
            return None;
        }
        self.gap_ms = self.gap_ms.saturating_sub(elapsed_ms);
        if self.gap_ms > 0 {
            return None;
        }
        let (a, b) = self.moves[self.next];
        self.next += 1;
        self.gap_ms = SHUFFLE_GAP_MS;
        Some((a as usize, b as usize))
    }

    /// True once every scripted pair has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.moves.len()
    }

    pub fn remaining(&self) -> usize {
        self.moves.len() - self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SHUFFLE_SWAP_MS;

    fn is_permutation(tiles: &[u8]) -> bool {
        let mut sorted: Vec<u8> = tiles.to_vec();
        sorted.sort_unstable();
        sorted == (0..tiles.len() as u8).collect::<Vec<u8>>()
    }

    #[test]
    fn test_generate_is_unsolved_permutation_for_all_sizes() {
        for size in GridSize::ALL {
            for seed in 1..50 {
                let mut rng = SimpleRng::new(seed);
                let plan = generate(&mut rng, size);
                assert!(is_permutation(&plan.tiles));
                assert!(
                    plan.tiles.iter().enumerate().any(|(i, &t)| i != t as usize),
                    "seed {} produced a solved grid",
                    seed
                );
            }
        }
    }

    #[test]
    fn test_script_length_and_bounds() {
        let mut rng = SimpleRng::new(3);
        let plan = generate(&mut rng, GridSize::Four);
        assert_eq!(plan.script.len(), 16 * SHUFFLE_PAIRS_PER_TILE);
        for &(a, b) in &plan.script {
            assert_ne!(a, b);
            assert!((a as usize) < 16 && (b as usize) < 16);
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let mut rng1 = SimpleRng::new(42);
        let mut rng2 = SimpleRng::new(42);
        let plan1 = generate(&mut rng1, GridSize::Five);
        let plan2 = generate(&mut rng2, GridSize::Five);
        assert_eq!(plan1.tiles, plan2.tiles);
        assert_eq!(plan1.script, plan2.script);
    }

    #[test]
    fn test_script_playback_spacing() {
        let mut rng = SimpleRng::new(8);
        let plan = generate(&mut rng, GridSize::Three);
        let total = plan.script.len();
        let mut script = ShuffleScript::new(plan.script);

        // First pair is available immediately.
        assert!(script.poll(0).is_some());
        assert_eq!(script.remaining(), total - 1);

        // The next pair only becomes due after the full gap.
        assert!(script.poll(SHUFFLE_GAP_MS - 1).is_none());
        assert!(script.poll(1).is_some());

        // Drain the rest; playback must terminate.
        let mut guard = 0;
        while !script.is_exhausted() {
            script.poll(SHUFFLE_GAP_MS + SHUFFLE_SWAP_MS);
            guard += 1;
            assert!(guard < 1000, "script never exhausted");
        }
        assert!(script.poll(1000).is_none());
    }
}
