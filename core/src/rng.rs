//! Random sources for draws
//!
//! The selection engine never reaches for an ambient generator; callers pass
//! something implementing [`DrawRng`]. The browser engine owns a single
//! entropy-seeded [`XorShiftRng`], tests use fixed sequences.

/// Trait for random number generation in draws
pub trait DrawRng {
    /// Generate a random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a uniform value in [0, 1)
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Generate a random number in range [0, max)
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }
}

/// XorShift32 RNG - simple, fast, deterministic
///
/// Not cryptographically secure. The same seed will always produce the same sequence.
#[derive(Debug, Clone)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG from a u64 seed
    ///
    /// The seed is combined into a u32, ensuring state is never 0.
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }

    /// Create a new RNG from a u32 seed
    pub fn seed_from_u32(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seed from the platform entropy source (`crypto.getRandomValues` in browsers)
    pub fn from_entropy() -> Result<Self, getrandom::Error> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)?;
        Ok(Self::seed_from_u64(u64::from_le_bytes(buf)))
    }
}

impl DrawRng for XorShiftRng {
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

    #[test]
    fn test_xorshift_deterministic() {
        let mut rng1 = XorShiftRng::seed_from_u64(12345);
        let mut rng2 = XorShiftRng::seed_from_u64(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_xorshift_different_seeds() {
        let mut rng1 = XorShiftRng::seed_from_u64(12345);
        let mut rng2 = XorShiftRng::seed_from_u64(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = XorShiftRng::seed_from_u32(0);
        assert_ne!(rng.next_u32(), 0, "zero state would lock xorshift at zero");
    }

    #[test]
    fn test_next_unit_in_half_open_range() {
        let mut rng = XorShiftRng::seed_from_u64(7);

        for _ in 0..1000 {
            let r = rng.next_unit();
            assert!((0.0..1.0).contains(&r), "{r} outside [0, 1)");
        }
    }

    #[test]
    fn test_gen_range() {
        let mut rng = XorShiftRng::seed_from_u64(42);

        for _ in 0..100 {
            let val = rng.gen_range(10);
            assert!(val < 10);
        }
        assert_eq!(rng.gen_range(0), 0);
    }

    #[test]
    fn test_from_entropy_produces_generator() {
        let mut rng = XorShiftRng::from_entropy().expect("entropy source available");
        // State is forced non-zero, so the stream never sticks at zero
        assert_ne!(rng.next_u32(), 0);
    }
}
