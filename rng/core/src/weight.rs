// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{source, weighted, Random};
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

/// Non-negative integer weight.
pub type Weight = u64;

/// Keys with integer weights, picked proportionally to their weight.
///
/// Keys are kept sorted so a fixed random source always yields the same
/// pick for the same map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap<K: Ord> {
    weights: BTreeMap<K, Weight>,
}

impl<K: Ord> WeightMap<K> {
    pub fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Sets the weight of `key`, returning the previous one.
    pub fn insert(&mut self, key: K, weight: Weight) -> Option<Weight> {
        self.weights.insert(key, weight)
    }

    pub fn get(&self, key: &K) -> Option<Weight> {
        self.weights.get(key).copied()
    }

    pub fn remove(&mut self, key: &K) -> Option<Weight> {
        self.weights.remove(key)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, Weight> {
        self.weights.iter()
    }
}

impl<K: Ord + Clone> WeightMap<K> {
    /// Picks a key with probability `weight / total`.
    ///
    /// Returns `None` when the map is empty or every weight is zero.
    pub fn pick(&self) -> Option<K> {
        self.pick_with(source().as_ref())
    }

    pub fn pick_with(&self, random: &dyn Random) -> Option<K> {
        let index = weighted::pick_index(self.weights.values().copied(), random)?;
        self.weights.keys().nth(index).cloned()
    }
}

impl<K: Ord + Clone + Default> WeightMap<K> {
    /// Like [`WeightMap::pick`], with `K::default()` standing for "no pick".
    pub fn pick_or_default(&self) -> K {
        self.pick().unwrap_or_default()
    }
}

impl<K: Ord> Default for WeightMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<(K, Weight)> for WeightMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, Weight)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, const N: usize> From<[(K, Weight); N]> for WeightMap<K> {
    fn from(entries: [(K, Weight); N]) -> Self {
        entries.into_iter().collect()
    }
}
