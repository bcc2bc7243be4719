// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Weighted random selection.
//!
//! [`Lottery`] is a thread-safe weighted multiset that tracks how often each
//! entry was drawn. [`WeightMap`] and [`ProbabilityMap`] pick a key from a
//! caller-owned mapping. Everything draws from one process-wide [`Random`]
//! source which tests may swap with [`replace_source`]; most operations also
//! have a `_with` form taking the source explicitly.

mod rng_error;
pub use rng_error::RngError;

pub mod random;
pub use random::Random;

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod std_random;
pub use std_random::StdRandom;

mod source;
pub use source::{replace_source, source};

pub mod weighted;

mod weight;
pub use weight::{Weight, WeightMap};

mod probability;
pub use probability::{Probability, ProbabilityMap, P50};

mod lottery;
pub use lottery::{Entry, Lottery, DEFAULT_WEIGHT};

pub mod range;
pub use range::{n, num, range, Number};

pub mod slice;
pub use slice::{pick, pick_n, pick_n_distinct, pick_n_unique, shuffle, unique};
