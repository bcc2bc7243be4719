// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{source, Random, RngError};

/// Primitive numbers that can be drawn uniformly.
pub trait Number: Copy + PartialOrd {
    const ZERO: Self;

    /// Uniform value in `[min, max)`. Requires `0 <= min < max`.
    fn between(min: Self, max: Self, random: &dyn Random) -> Self;

    /// Floats in `[0, 1)`, integers over the whole type.
    fn any(random: &dyn Random) -> Self;
}

fn u64_any(random: &dyn Random) -> u64 {
    let high = random.u64(0..1 << 32);
    let low = random.u64(0..1 << 32);
    (high << 32) | low
}

macro_rules! impl_integer {
    ($($t:ty),*) => {$(
        impl Number for $t {
            const ZERO: Self = 0;

            fn between(min: Self, max: Self, random: &dyn Random) -> Self {
                let span = (max - min) as u64;
                min + random.u64(0..span) as Self
            }

            fn any(random: &dyn Random) -> Self {
                u64_any(random) as Self
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Number for $t {
            const ZERO: Self = 0.0;

            fn between(min: Self, max: Self, random: &dyn Random) -> Self {
                let value = min + (random.f64() * (max - min) as f64) as Self;
                // narrowing can round up onto the excluded bound
                if value < max {
                    value
                } else {
                    min
                }
            }

            fn any(random: &dyn Random) -> Self {
                Self::between(0.0, 1.0, random)
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float!(f32, f64);

/// Uniform value in `[min, max)`.
///
/// Fails when `min < 0` or `max <= 0`. When `min >= max` the result is `max`.
pub fn range<T: Number>(min: T, max: T) -> Result<T, RngError> {
    range_with(min, max, source().as_ref())
}

pub fn range_with<T: Number>(min: T, max: T, random: &dyn Random) -> Result<T, RngError> {
    if !(min >= T::ZERO) {
        return Err(RngError::NegativeMin);
    }
    if !(max > T::ZERO) {
        return Err(RngError::NonPositiveMax);
    }
    if min >= max {
        return Ok(max);
    }
    Ok(T::between(min, max, random))
}

/// Uniform value in `[0, n)`. Fails when `n <= 0`.
pub fn n<T: Number>(n: T) -> Result<T, RngError> {
    n_with(n, source().as_ref())
}

pub fn n_with<T: Number>(n: T, random: &dyn Random) -> Result<T, RngError> {
    if !(n > T::ZERO) {
        return Err(RngError::NonPositiveBound);
    }
    Ok(T::between(T::ZERO, n, random))
}

/// A random number of type `T`: floats in `[0, 1)`, integers over their
/// whole range.
pub fn num<T: Number>() -> T {
    T::any(source().as_ref())
}
