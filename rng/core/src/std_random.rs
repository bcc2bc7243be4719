// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    ops::Range,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// [`Random`] backed by `rand`'s standard generator.
///
/// This is the process default, seeded from the operating system.
pub struct StdRandom {
    rng: Mutex<StdRng>,
}

impl StdRandom {
    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Random for StdRandom {
    fn f64(&self) -> f64 {
        self.rng().random::<f64>()
    }
    fn usize(&self, range: Range<usize>) -> usize {
        self.rng().random_range(range)
    }
    fn u64(&self, range: Range<u64>) -> u64 {
        self.rng().random_range(range)
    }
}
