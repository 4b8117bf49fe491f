//! Xorshift64* pseudo-random generator.
//!
//! Only used to fill the hash-key table when an engine is created, so the
//! generator lives in the engine context rather than in a global.

use crate::constants::ZERO_SEED_REPLACEMENT;

/// Multiplier applied to the xorshift state on every draw.
const MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// Deterministic 64-bit generator (xorshift with a multiplicative finish).
#[derive(Debug, Clone)]
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    /// Create a generator. A zero seed is replaced by a fixed non-zero
    /// constant since zero is a fixed point of the xorshift step.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    /// Draw the next 64-bit value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = XorShift64Star::new(42);
        let mut b = XorShift64Star::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_zero_seed_is_replaced() {
        let mut zero = XorShift64Star::new(0);
        let mut fallback = XorShift64Star::new(ZERO_SEED_REPLACEMENT);
        for _ in 0..10 {
            let v = zero.next_u64();
            assert_ne!(v, 0, "zero seed must not get stuck at zero");
            assert_eq!(v, fallback.next_u64());
        }
    }

    #[test]
    fn test_distinct_values() {
        let mut rng = XorShift64Star::new(7);
        let values: Vec<u64> = (0..1000).map(|_| rng.next_u64()).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), values.len());
    }
}
