//! RNG module - bag-style random piece selection
//!
//! [`BagRandomizer`] draws kinds without replacement: within each bag of 7
//! draws every kind appears exactly once. The marker set for the current bag
//! lives in the randomizer itself, so independent games never share it.
//!
//! Also provides a simple LCG so a game is reproducible from its seed.

use crate::types::PieceKind;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws piece kinds uniformly among those not yet drawn in the current bag
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Kinds already drawn from the current bag, indexed by [`PieceKind::index`]
    drawn: [bool; PieceKind::COUNT],
    drawn_count: usize,
    rng: SimpleRng,
}

impl BagRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            drawn: [false; PieceKind::COUNT],
            drawn_count: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Forget every kind drawn from the current bag
    pub fn reset_bag(&mut self) {
        self.drawn = [false; PieceKind::COUNT];
        self.drawn_count = 0;
    }

    /// Draw the next kind.
    ///
    /// `reset_bag` starts a fresh bag before drawing. An exhausted bag also
    /// starts over implicitly.
    pub fn draw(&mut self, reset_bag: bool) -> PieceKind {
        if reset_bag || self.drawn_count == PieceKind::COUNT {
            self.reset_bag();
        }

        let remaining = (PieceKind::COUNT - self.drawn_count) as u32;
        let mut pick = self.rng.next_range(remaining) as usize;

        for kind in PieceKind::ALL {
            if self.drawn[kind.index()] {
                continue;
            }
            if pick == 0 {
                self.drawn[kind.index()] = true;
                self.drawn_count += 1;
                return kind;
            }
            pick -= 1;
        }

        unreachable!("bag bookkeeping out of sync: {} drawn", self.drawn_count)
    }

    /// Kinds still available in the current bag
    pub fn remaining(&self) -> usize {
        PieceKind::COUNT - self.drawn_count
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for BagRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..=7 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut bag = BagRandomizer::new(1);

        let mut drawn = Vec::new();
        drawn.push(bag.draw(true));
        for _ in 0..6 {
            drawn.push(bag.draw(false));
        }

        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
        assert_eq!(bag.remaining(), 0);
    }

    #[test]
    fn test_reset_draw_restarts_bag() {
        let mut bag = BagRandomizer::new(99);
        bag.draw(false);
        bag.draw(false);
        assert_eq!(bag.remaining(), 5);

        bag.draw(true);
        assert_eq!(bag.remaining(), 6);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = BagRandomizer::new(2024);
        let mut b = BagRandomizer::new(2024);
        for i in 0..50 {
            assert_eq!(a.draw(i == 0), b.draw(i == 0));
        }
    }
}
