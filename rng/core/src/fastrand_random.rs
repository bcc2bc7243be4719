// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use std::{
    ops::Range,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// [`Random`] backed by a `fastrand` generator.
pub struct FastrandRandom {
    rng: Mutex<fastrand::Rng>,
}

impl FastrandRandom {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Reproducible stream: two instances with the same seed yield the same values.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    fn rng(&self) -> MutexGuard<'_, fastrand::Rng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FastrandRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Random for FastrandRandom {
    fn f64(&self) -> f64 {
        self.rng().f64()
    }
    fn usize(&self, range: Range<usize>) -> usize {
        self.rng().usize(range)
    }
    fn u64(&self, range: Range<u64>) -> u64 {
        self.rng().u64(range)
    }
}
