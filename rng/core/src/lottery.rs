// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{source, weighted, Random};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Weight given by [`Lottery::append`] and [`Lottery::with_values`].
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// One value held by a [`Lottery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub value: T,
    /// Entries with a weight `<= 0` are only reachable through the fallback draw.
    pub weight: f64,
    /// Times this entry has been drawn
    pub draw_count: u64,
}

/// Thread-safe weighted multiset.
///
/// Every operation takes the same lock for its whole duration, so appends,
/// draws and snapshots are each atomic. [`Lottery::draw_n`] is a sequence of
/// separate draws, not one atomic operation.
#[derive(Debug)]
pub struct Lottery<T> {
    entries: Mutex<Vec<Entry<T>>>,
}

impl<T> Lottery<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// A lottery holding `values`, each with [`DEFAULT_WEIGHT`].
    pub fn with_values(values: impl IntoIterator<Item = T>) -> Self {
        let lottery = Self::new();
        lottery.append(values);
        lottery
    }

    // Nothing panics while the lock is held, so a poisoned lock still guards
    // a consistent list.
    fn entries(&self) -> MutexGuard<'_, Vec<Entry<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, values: impl IntoIterator<Item = T>) -> &Self {
        self.append_weighted(DEFAULT_WEIGHT, values)
    }

    /// Appends every value with `weight`. A weight `<= 0` keeps the values out
    /// of weighted draws.
    pub fn append_weighted(&self, weight: f64, values: impl IntoIterator<Item = T>) -> &Self {
        self.append_weighted_bulk([(weight, values)])
    }

    /// Appends each group of values with its weight. Weights may repeat and
    /// empty groups add nothing.
    pub fn append_weighted_bulk<I, V>(&self, groups: I) -> &Self
    where
        I: IntoIterator<Item = (f64, V)>,
        V: IntoIterator<Item = T>,
    {
        let mut entries = self.entries();
        for (weight, values) in groups {
            entries.extend(values.into_iter().map(|value| Entry {
                value,
                weight,
                draw_count: 0,
            }));
        }
        self
    }

    /// Removes every entry.
    pub fn clear(&self) {
        let mut entries = self.entries();
        tracing::debug!(discarded = entries.len(), "lottery cleared");
        entries.clear();
    }

    pub fn size(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl<T: Clone> Lottery<T> {
    /// Draws one value, weighted by entry weight, from the process-wide source.
    ///
    /// Returns `None` only when the lottery is empty. When no entry has a
    /// positive weight the draw is uniform over all entries.
    pub fn draw(&self) -> Option<T> {
        self.draw_with(source().as_ref())
    }

    /// Like [`Lottery::draw`] with an explicit source.
    ///
    /// A weighted draw takes one value from `random`. When no entry has a
    /// positive weight the weighted value is skipped and the fallback takes
    /// a single `usize`, so seeded streams only advance by one value there.
    pub fn draw_with(&self, random: &dyn Random) -> Option<T> {
        let mut entries = self.entries();
        if entries.is_empty() {
            return None;
        }

        let index = match weighted::pick_index(entries.iter().map(|e| e.weight), random) {
            Some(index) => index,
            None => {
                let index = random.usize(0..entries.len());
                tracing::debug!(index, size = entries.len(), "no weighted hit, uniform fallback");
                index
            }
        };

        let entry = &mut entries[index];
        entry.draw_count += 1;
        tracing::trace!(index, weight = entry.weight, draw_count = entry.draw_count, "drawn");
        Some(entry.value.clone())
    }

    /// `n` separately locked draws, in order. The result always holds `n`
    /// outcomes; a draw that finds the lottery empty is `None`.
    pub fn draw_n(&self, n: usize) -> Vec<Option<T>> {
        let random = source();
        self.draw_n_with(n, random.as_ref())
    }

    pub fn draw_n_with(&self, n: usize, random: &dyn Random) -> Vec<Option<T>> {
        (0..n).map(|_| self.draw_with(random)).collect()
    }

    /// Snapshot of all entries in insertion order.
    pub fn items(&self) -> Vec<Entry<T>> {
        self.entries().clone()
    }
}

impl<T> Default for Lottery<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Lottery<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_values(iter)
    }
}
