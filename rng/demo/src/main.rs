// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod config;

use clap::Parser;
use config::{Config, Scenario};
use rng_core::{range, replace_source, FastrandRandom, Lottery, WeightMap};
use std::{path::PathBuf, sync::Arc, time::Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(about = "Draws from weighted lotteries and prints how often each entry won")]
struct Args {
    /// JSON configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Overrides the configured seed
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the configured number of draws per scenario
    #[arg(long)]
    draws: Option<usize>,

    /// Print entry snapshots as JSON
    #[arg(long)]
    json: bool,
}

fn run_scenario(
    scenario: &Scenario,
    draws: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let lottery = Lottery::new();
    for entry in &scenario.entries {
        lottery.append_weighted(entry.weight, [entry.value.clone()]);
    }

    let start = Instant::now();
    let drawn = lottery.draw_n(draws).into_iter().flatten().count();
    tracing::info!(
        scenario = %scenario.name,
        drawn,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scenario finished"
    );

    let items = lottery.items();
    if json {
        println!("{}", serde_json::to_string(&items)?);
        return Ok(());
    }

    println!("{} ({} entries):", scenario.name, items.len());
    for item in items {
        let share = if drawn == 0 {
            0.0
        } else {
            item.draw_count as f64 * 100.0 / drawn as f64
        };
        println!(
            "  {:<10} weight {:>8} drawn {:>8} ({:.2}%)",
            item.value, item.weight, item.draw_count, share
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rng_demo=info,rng_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(
                "Failed to load {}: {}. Using default configuration",
                args.config.display(),
                e
            );
            Config::default()
        }
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(draws) = args.draws {
        config.draws = draws;
    }

    if let Some(seed) = config.seed {
        replace_source(Arc::new(FastrandRandom::with_seed(seed)));
        tracing::info!(seed, "using seeded random source");
    }

    println!("=== WEIGHTED LOTTERY ===");
    println!("Draws per scenario: {}", config.draws);
    for scenario in &config.scenarios {
        run_scenario(scenario, config.draws, args.json)?;
    }

    println!("=== WEIGHT MAP ===");
    let loot = WeightMap::from([("common", 70), ("uncommon", 25), ("rare", 5)]);
    let picks: Vec<_> = (0..10).map(|_| loot.pick_or_default()).collect();
    println!("{}", picks.join(", "));

    println!("=== RANGE ===");
    let mut samples = (0..10)
        .map(|_| range(0.0f32, 3.0))
        .collect::<Result<Vec<_>, _>>()?;
    samples.sort_by(f32::total_cmp);
    println!("{:?}", samples);

    Ok(())
}
