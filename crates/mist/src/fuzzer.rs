//! Reproducible random input for the seeded test suites.
//!
//! Uses the xoshiro256** PRNG so a failing run can be replayed from its
//! printed seed.

use std::sync::{Arc, Mutex};

use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::range::{Range, SyntaxRange};

/// A seeded generator of random ranges, weights, and choices.
pub struct Fuzzer {
    /// The seed used to initialize the PRNG; print it on failure.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Creates a fuzzer from the given seed, or from `OsRng` when absent.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        let rng = Xoshiro256StarStar::from_seed(seed);
        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Random integer in `[min, max]`, inclusive.
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(min..=max)
    }

    /// Random index in `[0, len)`.
    pub fn random_index(&self, len: usize) -> usize {
        self.random_int(0, len as i64 - 1) as usize
    }

    /// Random element of a non-empty slice.
    pub fn pick<'a, E>(&self, choices: &'a [E]) -> &'a E {
        &choices[self.random_index(choices.len())]
    }

    /// Random range inside a buffer of `buffer_len` bytes, at most
    /// `max_length` long (possibly empty).
    pub fn range(&self, buffer_len: usize, max_length: usize) -> Range {
        let offset = self.random_int(0, buffer_len as i64) as usize;
        let room = (buffer_len - offset).min(max_length);
        let length = self.random_int(0, room as i64) as usize;
        Range::new(offset, length)
    }

    /// Random weighted range with weight in `[-weight_span, weight_span]`.
    pub fn syntax_range(
        &self,
        buffer_len: usize,
        max_length: usize,
        weight_span: i64,
    ) -> SyntaxRange {
        let range = self.range(buffer_len, max_length);
        SyntaxRange {
            range,
            weight: self.random_int(-weight_span, weight_span),
        }
    }
}
