// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cumulative-distribution sampling shared by [`crate::WeightMap`],
//! [`crate::ProbabilityMap`] and [`crate::Lottery`].

use crate::Random;

/// A weight-like quantity. Only values strictly above `Default::default()`
/// take part in a draw.
pub trait Magnitude: Copy + PartialOrd + Default {
    fn accumulate(self, other: Self) -> Self;

    /// A uniform point in `[0, total)`. Only called with a positive `total`.
    fn sample(total: Self, random: &dyn Random) -> Self;

    fn is_eligible(self) -> bool {
        self > Self::default()
    }
}

impl Magnitude for u64 {
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn sample(total: Self, random: &dyn Random) -> Self {
        random.u64(0..total)
    }
}

impl Magnitude for f64 {
    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    fn sample(total: Self, random: &dyn Random) -> Self {
        random.f64() * total
    }
}

/// Picks the position of one eligible weight, proportionally to its size.
///
/// `None` when nothing is eligible, or when float rounding lets the draw
/// land past the last partial sum.
pub fn pick_index<W, I>(weights: I, random: &dyn Random) -> Option<usize>
where
    W: Magnitude,
    I: IntoIterator<Item = W>,
    I::IntoIter: Clone,
{
    let weights = weights.into_iter();
    let total = weights
        .clone()
        .filter(|w| w.is_eligible())
        .fold(W::default(), W::accumulate);
    if !total.is_eligible() {
        return None;
    }

    let draw = W::sample(total, random);
    let mut cumulative = W::default();
    for (index, weight) in weights.enumerate() {
        if !weight.is_eligible() {
            continue;
        }
        cumulative = cumulative.accumulate(weight);
        if draw < cumulative {
            return Some(index);
        }
    }
    None
}
