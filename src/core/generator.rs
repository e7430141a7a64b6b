//! Generator module - upcoming block values and the growing ceiling
//!
//! Blocks are drawn as powers of two with the exponent bounded by a ceiling
//! (`max_base`) that only grows, and only when a merge produces a value
//! beyond it. A fresh game always opens with 2 then 4.
//!
//! Uses a simple LCG so games are reproducible from a seed.

use crate::types::{BlockValue, START_MAX_BASE, START_NEXT, START_PEEK};

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
}

/// Produces the `next`/`peek` block pair and owns the exponent ceiling.
#[derive(Debug, Clone)]
pub struct BlockGenerator {
    next: BlockValue,
    peek: BlockValue,
    /// Exponent ceiling; monotonically non-decreasing.
    max_base: u32,
    rng: SimpleRng,
}

impl BlockGenerator {
    /// Create a generator in the standard opening state (`next=2, peek=4`).
    pub fn new(seed: u32) -> Self {
        Self {
            next: START_NEXT,
            peek: START_PEEK,
            max_base: START_MAX_BASE,
            rng: SimpleRng::new(seed),
        }
    }

    /// The block about to be placed.
    pub fn next(&self) -> BlockValue {
        self.next
    }

    /// The block after that.
    pub fn peek(&self) -> BlockValue {
        self.peek
    }

    /// Current exponent ceiling.
    pub fn max_base(&self) -> u32 {
        self.max_base
    }

    /// Shift `peek` into `next` and draw a new `peek`.
    ///
    /// The new value is `2^k` with `k` uniform in `[1, max_base - 1]`, so
    /// the draw never reaches the ceiling itself.
    pub fn advance(&mut self) {
        debug_assert!(self.max_base >= 2, "draw range would be empty");
        let base = self.rng.next_range(self.max_base - 1) + 1;
        self.next = self.peek;
        self.peek = 1 << base;
    }

    /// Grow the ceiling if a merge produced a value beyond it.
    pub fn raise_ceiling(&mut self, observed: BlockValue) {
        if observed > (1 << self.max_base) {
            self.max_base += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn opens_with_two_then_four() {
        let gen = BlockGenerator::new(1);
        assert_eq!(gen.next(), 2);
        assert_eq!(gen.peek(), 4);
        assert_eq!(gen.max_base(), 2);
    }

    #[test]
    fn advance_promotes_peek() {
        let mut gen = BlockGenerator::new(1);
        let peek = gen.peek();
        gen.advance();
        assert_eq!(gen.next(), peek);
    }

    #[test]
    fn draws_stay_below_ceiling() {
        let mut gen = BlockGenerator::new(7);
        // With max_base == 2 the only possible draw is 2^1.
        for _ in 0..50 {
            gen.advance();
            assert_eq!(gen.peek(), 2);
        }

        gen.raise_ceiling(8); // ceiling -> 3
        for _ in 0..200 {
            gen.advance();
            let v = gen.peek();
            assert!(v == 2 || v == 4, "draw {v} out of range");
        }
    }

    #[test]
    fn ceiling_only_grows_past_threshold() {
        let mut gen = BlockGenerator::new(1);
        gen.raise_ceiling(4); // not beyond 2^2
        assert_eq!(gen.max_base(), 2);
        gen.raise_ceiling(8);
        assert_eq!(gen.max_base(), 3);
        gen.raise_ceiling(8); // not beyond 2^3
        assert_eq!(gen.max_base(), 3);
        gen.raise_ceiling(16);
        assert_eq!(gen.max_base(), 4);
    }
}
