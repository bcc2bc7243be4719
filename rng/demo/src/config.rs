// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Seeds the process-wide source for a reproducible run
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_draws")]
    pub draws: usize,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub entries: Vec<EntryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryConfig {
    pub value: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_draws() -> usize {
    100_000
}

fn default_weight() -> f64 {
    rng_core::DEFAULT_WEIGHT
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

fn scenario(name: &str, entries: &[(&str, f64)]) -> Scenario {
    Scenario {
        name: name.to_string(),
        entries: entries
            .iter()
            .map(|&(value, weight)| EntryConfig {
                value: value.to_string(),
                weight,
            })
            .collect(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            draws: default_draws(),
            scenarios: vec![
                scenario("empty", &[]),
                scenario(
                    "long tail",
                    &[
                        ("Alice", 1.0),
                        ("Charlie", 2.5),
                        ("Dave", 0.25),
                        ("Eve", 0.1),
                        ("Grace", 0.02),
                    ],
                ),
                scenario(
                    "tiny weights",
                    &[("Alice", 2.0), ("Charlie", 0.003), ("Frank", 1e-5)],
                ),
                scenario(
                    "zero weight",
                    &[("Alice", 0.25), ("Charlie", 2.0), ("Dave", 0.0)],
                ),
                scenario("uniform", &[("Alice", 1.0), ("Bob", 1.0), ("Charlie", 1.0)]),
                scenario(
                    "one positive",
                    &[("Dave", 1.0), ("Alice", -1.0), ("Bob", -1.0), ("Charlie", -1.0)],
                ),
                scenario(
                    "all negative",
                    &[("Alice", -1.0), ("Bob", -1.0), ("Charlie", -1.0)],
                ),
            ],
        }
    }
}
