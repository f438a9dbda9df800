//! Random sources for the card's cosmetic draws.
//!
//! Both the evasive button and the particle field only ever need a uniform
//! value in `[0, 1)`. Keeping that behind [`RandomSource`] lets tests script
//! the exact sequence of draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0, 1]`.
pub trait RandomSource {
    /// Next uniform value. Implementations return values in `[0, 1]`.
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local generator.
///
/// This is what the running card uses.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Values outside `[0, 1]` are clamped so a script can never push a
/// consumer out of its documented range. An empty script always yields `0.0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_in_unit_range() {
        let mut random = ThreadRandom;
        for _ in 0..1000 {
            let v = random.next_unit();
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn scripted_random_cycles() {
        let mut random = ScriptedRandom::new(vec![0.1, 0.9]);
        assert_eq!(random.next_unit(), 0.1);
        assert_eq!(random.next_unit(), 0.9);
        assert_eq!(random.next_unit(), 0.1);
        assert_eq!(random.draws(), 3);
    }

    #[test]
    fn scripted_random_clamps_out_of_range() {
        let mut random = ScriptedRandom::new(vec![-3.0, 7.5, f64::NAN]);
        assert_eq!(random.next_unit(), 0.0);
        assert_eq!(random.next_unit(), 1.0);
        assert_eq!(random.next_unit(), 0.0);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut random = ScriptedRandom::default();
        assert_eq!(random.next_unit(), 0.0);
        assert_eq!(random.draws(), 1);
    }
}
