//! Random number sources for the simulation
//!
//! The simulation never reaches for a global generator; every draw goes
//! through a [`RandomSource`] handed in by the caller.

use std::collections::VecDeque;
use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform draws used by spawning
pub trait RandomSource {
    /// Uniform integer in `range` (half-open)
    fn uniform_int(&mut self, range: Range<i32>) -> i32;
    /// Uniform float in `range` (half-open)
    fn uniform_float(&mut self, range: Range<f32>) -> f32;
}

/// Seeded PCG generator used in production
#[derive(Debug, Clone)]
pub struct PcgRandom {
    seed: u64,
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed drawn once from system entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgRandom {
    fn uniform_int(&mut self, range: Range<i32>) -> i32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }

    fn uniform_float(&mut self, range: Range<f32>) -> f32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }
}

/// Replays a fixed script of draws.
///
/// Each scripted value is clamped into the requested range. Once a script
/// runs dry, integer draws return the top of the range (so a spawn roll
/// `uniform_int(0..10) == 0` never fires) and float draws return the start.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<i32>,
    floats: VecDeque<f32>,
}

impl ScriptedRandom {
    pub fn new(ints: impl IntoIterator<Item = i32>) -> Self {
        Self {
            ints: ints.into_iter().collect(),
            floats: VecDeque::new(),
        }
    }

    pub fn with_floats(mut self, floats: impl IntoIterator<Item = f32>) -> Self {
        self.floats = floats.into_iter().collect();
        self
    }

    /// Integer draws still queued
    pub fn remaining(&self) -> usize {
        self.ints.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, range: Range<i32>) -> i32 {
        let top = (range.end - 1).max(range.start);
        match self.ints.pop_front() {
            Some(v) => v.clamp(range.start, top),
            None => top,
        }
    }

    fn uniform_float(&mut self, range: Range<f32>) -> f32 {
        if range.is_empty() {
            return range.start;
        }
        match self.floats.pop_front() {
            // Largest float below `end` keeps the range half-open
            Some(v) => v.clamp(range.start, range.end.next_down()),
            None => range.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_same_seed_same_sequence() {
        let mut a = PcgRandom::new(42);
        let mut b = PcgRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.uniform_int(0..10), b.uniform_int(0..10));
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_pcg_stays_in_range() {
        let mut rng = PcgRandom::new(7);
        for _ in 0..1000 {
            let i = rng.uniform_int(0..81);
            assert!((0..81).contains(&i));
            let f = rng.uniform_float(-0.3..0.3);
            assert!((-0.3..0.3).contains(&f));
        }
    }

    #[test]
    fn test_scripted_replays_then_saturates() {
        let mut rng = ScriptedRandom::new([0, 5, 99]).with_floats([0.25]);
        assert_eq!(rng.uniform_int(0..10), 0);
        assert_eq!(rng.uniform_int(0..10), 5);
        // Clamped into range
        assert_eq!(rng.uniform_int(0..10), 9);
        // Exhausted
        assert_eq!(rng.uniform_int(0..10), 9);
        assert_eq!(rng.remaining(), 0);

        assert_eq!(rng.uniform_float(-1.0..1.0), 0.25);
        assert_eq!(rng.uniform_float(-1.0..1.0), -1.0);
    }

    #[test]
    fn test_scripted_float_never_reaches_end() {
        let mut rng = ScriptedRandom::default().with_floats([0.3, 5.0, -5.0]);
        let range = -0.3f32..0.3;
        for _ in 0..3 {
            let f = rng.uniform_float(range.clone());
            assert!(range.contains(&f), "{f} outside {range:?}");
        }
        assert_eq!(rng.uniform_float(0.5..0.5), 0.5);
    }
}
