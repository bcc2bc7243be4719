// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::ops::Range;

/// Uniform random source shared by every picker and lottery.
///
/// Implementations synchronize internally: one instance is drawn from by
/// many threads at once.
pub trait Random: Send + Sync {
    /// Uniform value in `[0, 1)`.
    fn f64(&self) -> f64;

    /// Uniform value in `range`. The range must not be empty.
    fn usize(&self, range: Range<usize>) -> usize;

    /// Wide variant of [`Random::usize`]. The range must not be empty.
    fn u64(&self, range: Range<u64>) -> u64;

    /// The indices `0..n` in random order, every ordering equally likely.
    fn permutation(&self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = self.usize(0..i + 1);
            indices.swap(i, j);
        }
        indices
    }
}
