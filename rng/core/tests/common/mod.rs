// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(dead_code)]

use rng_core::Random;
use std::{collections::VecDeque, ops::Range, sync::Mutex};

/// Replays queued values. Floats default to 0.0 and integers to the start
/// of the requested range once their queue runs dry.
pub struct ScriptedRandom {
    floats: Mutex<VecDeque<f64>>,
    ints: Mutex<VecDeque<u64>>,
}

impl ScriptedRandom {
    pub fn new(floats: &[f64], ints: &[u64]) -> Self {
        Self {
            floats: Mutex::new(floats.iter().copied().collect()),
            ints: Mutex::new(ints.iter().copied().collect()),
        }
    }

    pub fn floats(floats: &[f64]) -> Self {
        Self::new(floats, &[])
    }

    pub fn ints(ints: &[u64]) -> Self {
        Self::new(&[], ints)
    }

    fn next_int(&self) -> u64 {
        self.ints.lock().unwrap().pop_front().unwrap_or(0)
    }
}

impl Random for ScriptedRandom {
    fn f64(&self) -> f64 {
        self.floats.lock().unwrap().pop_front().unwrap_or(0.0)
    }

    fn usize(&self, range: Range<usize>) -> usize {
        range.start + (self.next_int() as usize) % range.len()
    }

    fn u64(&self, range: Range<u64>) -> u64 {
        range.start + self.next_int() % (range.end - range.start)
    }
}
