// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{source, Random, RngError};
use std::{collections::HashSet, hash::Hash};

/// A uniformly chosen element, `None` for an empty slice.
pub fn pick<E>(slice: &[E]) -> Option<&E> {
    pick_with(slice, source().as_ref())
}

pub fn pick_with<'a, E>(slice: &'a [E], random: &dyn Random) -> Option<&'a E> {
    if slice.is_empty() {
        return None;
    }
    slice.get(random.usize(0..slice.len()))
}

/// `n` independent uniform picks, so elements may repeat. Empty when `n == 0`
/// or the slice is empty.
pub fn pick_n<E: Clone>(slice: &[E], n: usize) -> Vec<E> {
    pick_n_with(slice, n, source().as_ref())
}

pub fn pick_n_with<E: Clone>(slice: &[E], n: usize, random: &dyn Random) -> Vec<E> {
    if n == 0 || slice.is_empty() {
        return Vec::new();
    }
    (0..n)
        .map(|_| slice[random.usize(0..slice.len())].clone())
        .collect()
}

/// `n` elements at distinct positions, in random order.
///
/// Fails when `n` exceeds the slice length.
pub fn pick_n_distinct<E: Clone>(slice: &[E], n: usize) -> Result<Vec<E>, RngError> {
    pick_n_distinct_with(slice, n, source().as_ref())
}

pub fn pick_n_distinct_with<E: Clone>(
    slice: &[E],
    n: usize,
    random: &dyn Random,
) -> Result<Vec<E>, RngError> {
    if n > slice.len() {
        return Err(RngError::TooManyDistinct {
            requested: n,
            available: slice.len(),
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    Ok(random
        .permutation(slice.len())
        .into_iter()
        .take(n)
        .map(|i| slice[i].clone())
        .collect())
}

/// `n` different values, drawn after removing duplicates from the slice.
///
/// Fails, without it being a caller bug, when the slice holds fewer than `n`
/// distinct values.
pub fn pick_n_unique<E: Clone + Eq + Hash>(slice: &[E], n: usize) -> Result<Vec<E>, RngError> {
    pick_n_unique_with(slice, n, source().as_ref())
}

pub fn pick_n_unique_with<E: Clone + Eq + Hash>(
    slice: &[E],
    n: usize,
    random: &dyn Random,
) -> Result<Vec<E>, RngError> {
    let unique = unique(slice);
    if n > unique.len() {
        return Err(RngError::NotEnoughUnique {
            requested: n,
            available: unique.len(),
        });
    }
    pick_n_distinct_with(&unique, n, random)
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T>(slice: &mut [T]) {
    shuffle_with(slice, source().as_ref())
}

pub fn shuffle_with<T>(slice: &mut [T], random: &dyn Random) {
    for i in (1..slice.len()).rev() {
        let j = random.usize(0..i + 1);
        slice.swap(i, j);
    }
}

/// The slice without duplicates, keeping first occurrences in order.
pub fn unique<E: Clone + Eq + Hash>(slice: &[E]) -> Vec<E> {
    let mut seen = HashSet::with_capacity(slice.len());
    slice
        .iter()
        .filter(|e| seen.insert(*e))
        .cloned()
        .collect()
}
