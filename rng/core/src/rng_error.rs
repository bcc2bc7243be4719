// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// Range lower bound below zero
    #[error("min must be greater than or equal to 0")]
    NegativeMin,

    /// Range upper bound at or below zero
    #[error("max must be greater than 0")]
    NonPositiveMax,

    /// Exclusive bound at or below zero
    #[error("n must be greater than 0")]
    NonPositiveBound,

    /// More distinct picks requested than the population holds
    #[error("cannot pick {requested} distinct elements from {available}")]
    TooManyDistinct { requested: usize, available: usize },

    /// More unique picks requested than distinct values exist
    #[error("cannot pick {requested} unique elements, only {available} distinct values")]
    NotEnoughUnique { requested: usize, available: usize },
}

impl RngError {
    /// Whether the call was malformed, as opposed to well-formed input that
    /// was merely insufficient.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, RngError::NotEnoughUnique { .. })
    }
}
