//! RNG module - deterministic randomness for shuffles.
//!
//! A simple LCG keeps shuffle generation replayable from a seed, which the
//! tests rely on. Provides Fisher-Yates shuffling and distinct index-pair
//! drawing for the cosmetic shuffle script.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Draw a pair of distinct indices in [0, max). Requires max >= 2.
    pub fn distinct_pair(&mut self, max: usize) -> (usize, usize) {
        debug_assert!(max >= 2);
        let a = self.next_range(max as u32) as usize;
        let mut b = self.next_range(max as u32) as usize;
        while b == a {
            b = self.next_range(max as u32) as usize;
        }
        (a, b)
    }
}
