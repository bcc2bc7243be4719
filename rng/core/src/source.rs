// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Process-wide random source.
//!
//! Created lazily from OS entropy on first use. [`replace_source`] swaps it
//! for every later call from any component; it is meant for deterministic
//! test setups and should happen before concurrent use begins.

use crate::{Random, StdRandom};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static SOURCE: OnceLock<RwLock<Arc<dyn Random>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<dyn Random>> {
    SOURCE.get_or_init(|| RwLock::new(Arc::new(StdRandom::from_os_rng())))
}

/// The current process-wide source.
pub fn source() -> Arc<dyn Random> {
    slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide source. Draws already holding the previous
/// source finish with it.
pub fn replace_source(random: Arc<dyn Random>) {
    *slot().write().unwrap_or_else(PoisonError::into_inner) = random;
    tracing::debug!("process-wide random source replaced");
}
