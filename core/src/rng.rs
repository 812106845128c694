//! Random source for deck shuffling
//!
//! The deck builder never reaches for ambient randomness. Callers inject a
//! `DeckRng`: tests seed one deterministically, the browser client seeds a
//! fresh one from the platform entropy source for every shuffle.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Trait for random number generation when dealing a deck
pub trait DeckRng {
    /// Generate a random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a uniformly distributed number in range [0, max)
    ///
    /// Uses rejection sampling so that every value is equally likely.
    fn gen_range(&mut self, max: usize) -> usize {
        if max <= 1 {
            return 0;
        }
        let bound = max as u64;
        let span = u32::MAX as u64 + 1;
        // Largest multiple of `bound` that fits in the u32 range
        let zone = span - span % bound;
        loop {
            let x = self.next_u32() as u64;
            if x < zone {
                return (x % bound) as usize;
            }
        }
    }

    /// Shuffle a slice using Fisher-Yates algorithm
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_range(i + 1);
            slice.swap(i, j);
        }
    }
}

/// XorShift32 RNG - simple, fast, deterministic
///
/// This is suitable for game logic where cryptographic security is not needed.
/// The same seed will always produce the same sequence.
#[derive(Debug, Clone, Encode, Decode, TypeInfo)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG from a u64 seed
    ///
    /// The seed is folded into a u32, ensuring state is never 0.
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }

    /// Create a new RNG from a u32 seed
    pub fn seed_from_u32(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }
}

impl DeckRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields a fixed script of values, then repeats the last one.
    struct ScriptedRng {
        values: alloc::vec::Vec<u32>,
        next: usize,
    }

    impl DeckRng for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let idx = self.next.min(self.values.len() - 1);
            self.next += 1;
            self.values[idx]
        }
    }

    #[test]
    fn test_xorshift_deterministic() {
        let mut rng1 = XorShiftRng::seed_from_u64(12345);
        let mut rng2 = XorShiftRng::seed_from_u64(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = XorShiftRng::seed_from_u32(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_gen_range_bounds() {
        let mut rng = XorShiftRng::seed_from_u64(42);

        for max in 1..20 {
            for _ in 0..50 {
                assert!(rng.gen_range(max) < max);
            }
        }
        assert_eq!(rng.gen_range(0), 0);
    }

    #[test]
    fn test_gen_range_rejects_biased_tail() {
        // 2^32 % 3 == 1, so u32::MAX falls in the rejected tail for max = 3.
        let mut rng = ScriptedRng {
            values: alloc::vec![u32::MAX, 7],
            next: 0,
        };
        assert_eq!(rng.gen_range(3), 1);
        assert_eq!(rng.next, 2, "the tail value should have been redrawn");
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        let mut arr = [1, 2, 3, 4, 5, 6, 7, 8];
        let original = arr;

        rng.shuffle(&mut arr);

        let mut sorted = arr;
        sorted.sort();
        assert_eq!(sorted, original);
        assert_ne!(arr, original);
    }
}
