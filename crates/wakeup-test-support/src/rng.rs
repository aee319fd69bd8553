//! Test RNGs — deterministic `DeterministicRng` implementations for tests.

use wakeup_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. Every chance roll with a positive probability succeeds.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// The opposite of [`MockRng`]: returns `max` and a value just below 1.0, so
/// every chance roll fails.
#[derive(Debug)]
pub struct UnluckyRng;

impl DeterministicRng for UnluckyRng {
    fn next_u32_range(&mut self, _min: u32, max: u32) -> u32 {
        max
    }

    fn next_f64(&mut self) -> f64 {
        0.999_999
    }
}

/// An RNG that returns values from predetermined sequences. Panics if a
/// sequence is exhausted. Used in tests that need specific, repeatable
/// outcomes (e.g. "the steal roll succeeds, the luck roll fails").
#[derive(Debug, Default)]
pub struct SequenceRng {
    integers: Vec<u32>,
    floats: Vec<f64>,
    next_integer: usize,
    next_float: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` answering `next_u32_range` from `values`.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            integers: values,
            ..Self::default()
        }
    }

    /// Create a new `SequenceRng` answering `next_f64` (and so every chance
    /// roll) from `values`.
    #[must_use]
    pub fn floats(values: Vec<f64>) -> Self {
        Self {
            floats: values,
            ..Self::default()
        }
    }

    /// Adds integer answers to a float-driven sequence.
    #[must_use]
    pub fn with_integers(mut self, values: Vec<u32>) -> Self {
        self.integers = values;
        self
    }

    /// Number of float draws consumed so far.
    #[must_use]
    pub fn floats_used(&self) -> usize {
        self.next_float
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.integers[self.next_integer];
        self.next_integer += 1;
        val
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.floats[self.next_float];
        self.next_float += 1;
        val
    }
}
