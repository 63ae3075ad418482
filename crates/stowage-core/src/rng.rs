//! Seedable PRNG for fallback placement jitter.
//!
//! Uses the SplitMix64 algorithm: 8 bytes of state, good statistical
//! properties, and trivially serializable alongside a session snapshot.
//! Callers own the generator and pass it into each placement call, so a
//! fixed seed makes placement fully reproducible.

/// SplitMix64 pseudo-random number generator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlacementRng {
    state: u64,
}

impl PlacementRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform `f64` in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // Top 53 bits fill the mantissa exactly.
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform `f64` in `[lo, hi)`. Returns `lo` when the range is empty.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        lo + (hi - lo) * self.next_f64()
    }
}

impl Default for PlacementRng {
    fn default() -> Self {
        Self::new(0x5709_A6E0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let mut a = PlacementRng::new(42);
        let mut b = PlacementRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = PlacementRng::new(1);
        let mut b = PlacementRng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn next_f64_in_unit_interval() {
        let mut rng = PlacementRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut rng = PlacementRng::new(99);
        for _ in 0..1_000 {
            let v = rng.range(-0.5, 0.5);
            assert!((-0.5..0.5).contains(&v), "{v}");
        }
    }

    #[test]
    fn empty_range_returns_lower_bound() {
        let mut rng = PlacementRng::new(3);
        assert_eq!(rng.range(1.0, 1.0), 1.0);
        assert_eq!(rng.range(2.0, -2.0), 2.0);
    }

    #[test]
    fn range_mean_is_roughly_centered() {
        let mut rng = PlacementRng::new(12345);
        let n = 10_000;
        let sum: f64 = (0..n).map(|_| rng.range(-1.0, 1.0)).sum();
        let mean = sum / n as f64;
        assert!(mean.abs() < 0.05, "expected ~0, got {mean}");
    }

    #[test]
    fn serialization_round_trip() {
        let mut rng = PlacementRng::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }

        let json = serde_json::to_string(&rng).unwrap();
        let restored: PlacementRng = serde_json::from_str(&json).unwrap();
        assert_eq!(rng, restored);

        let mut rng2 = restored;
        for _ in 0..10 {
            assert_eq!(rng.next_u64(), rng2.next_u64());
        }
    }
}
