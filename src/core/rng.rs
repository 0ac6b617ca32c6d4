//! RNG module - deterministic piece selection
//!
//! A small LCG (Linear Congruential Generator) keeps shape and color
//! selection reproducible from a seed, so whole games can be replayed in
//! tests. Uses constants from Numerical Recipes.

/// Simple LCG random number generator.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid a 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        // with a = 1664525, c = 1013904223.
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// The current RNG state (reusable as a seed to continue the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}
