// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{source, weighted, weighted::Magnitude, Random};
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

pub const P50: Probability = Probability(0.5);

/// A probability in `[0, 1]`. Values outside that range are clamped when
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(pub f64);

impl Probability {
    /// Bernoulli trial: `true` with probability `self`.
    ///
    /// Always `false` at or below 0 and always `true` at or above 1.
    pub fn check(self) -> bool {
        self.check_with(source().as_ref())
    }

    pub fn check_with(self, random: &dyn Random) -> bool {
        if self.0 <= 0.0 {
            return false;
        }
        if self.0 >= 1.0 {
            return true;
        }
        random.f64() < self.0
    }
}

impl From<f64> for Probability {
    fn from(p: f64) -> Self {
        Self(p)
    }
}

impl Magnitude for Probability {
    fn accumulate(self, other: Self) -> Self {
        Self(self.0.accumulate(other.0))
    }

    fn sample(total: Self, random: &dyn Random) -> Self {
        Self(<f64 as Magnitude>::sample(total.0, random))
    }
}

/// Keys with probabilities, picked proportionally to their share of the
/// total. The probabilities need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityMap<K: Ord> {
    probabilities: BTreeMap<K, Probability>,
}

impl<K: Ord> ProbabilityMap<K> {
    pub fn new() -> Self {
        Self {
            probabilities: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, probability: impl Into<Probability>) -> Option<Probability> {
        self.probabilities.insert(key, probability.into())
    }

    pub fn get(&self, key: &K) -> Option<Probability> {
        self.probabilities.get(key).copied()
    }

    pub fn remove(&mut self, key: &K) -> Option<Probability> {
        self.probabilities.remove(key)
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, Probability> {
        self.probabilities.iter()
    }
}

impl<K: Ord + Clone> ProbabilityMap<K> {
    /// Picks a key with probability `p / total`, ignoring keys with `p <= 0`.
    ///
    /// Returns `None` when no key has a positive probability. Float rounding
    /// at the last partial sum can also, very rarely, yield `None`.
    pub fn pick(&self) -> Option<K> {
        self.pick_with(source().as_ref())
    }

    pub fn pick_with(&self, random: &dyn Random) -> Option<K> {
        let index = weighted::pick_index(self.probabilities.values().copied(), random)?;
        self.probabilities.keys().nth(index).cloned()
    }
}

impl<K: Ord + Clone + Default> ProbabilityMap<K> {
    pub fn pick_or_default(&self) -> K {
        self.pick().unwrap_or_default()
    }
}

impl<K: Ord> Default for ProbabilityMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, P: Into<Probability>> FromIterator<(K, P)> for ProbabilityMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            probabilities: iter.into_iter().map(|(k, p)| (k, p.into())).collect(),
        }
    }
}

impl<K: Ord, P: Into<Probability>, const N: usize> From<[(K, P); N]> for ProbabilityMap<K> {
    fn from(entries: [(K, P); N]) -> Self {
        entries.into_iter().collect()
    }
}
