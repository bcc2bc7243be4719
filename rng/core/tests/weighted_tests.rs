// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod common;

use common::ScriptedRandom;
use rng_core::{weighted, Probability, ProbabilityMap, WeightMap, P50};
use std::collections::HashMap;

// ============================================================
// WeightMap
// ============================================================

#[test]
fn test_weight_map_empty_picks_nothing() {
    let map = WeightMap::<String>::new();
    assert_eq!(map.pick(), None);
    assert_eq!(map.pick_or_default(), "");
}

#[test]
fn test_weight_map_all_zero_picks_nothing() {
    let map = WeightMap::from([("a", 0), ("b", 0)]);
    assert_eq!(map.pick(), None);
    assert_eq!(map.pick_or_default(), "");
}

#[test]
fn test_weight_map_only_positive_weight_wins() {
    let map = WeightMap::from([("a", 0), ("b", 5), ("c", 0)]);
    for _ in 0..1_000 {
        assert_eq!(map.pick(), Some("b"));
    }
}

#[test]
fn test_weight_map_picks_proportionally() {
    let map = WeightMap::from([(1, 1), (2, 3)]);
    let mut counts = HashMap::new();
    for _ in 0..20_000 {
        *counts.entry(map.pick_or_default()).or_insert(0) += 1;
    }

    assert_eq!(counts.get(&0), None);
    assert!(counts[&2] > counts[&1] * 2, "counts: {:?}", counts);
}

#[test]
fn test_weight_map_scans_keys_in_sorted_order() {
    let map: WeightMap<&str> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();

    // total 6: a covers [0, 1), b [1, 3), c [3, 6)
    let random = ScriptedRandom::ints(&[0, 1, 2, 5]);
    let picks: Vec<_> = (0..4).map(|_| map.pick_with(&random).unwrap()).collect();
    assert_eq!(picks, vec!["a", "b", "b", "c"]);
}

#[test]
fn test_weight_map_accessors() {
    let mut map = WeightMap::new();
    assert!(map.is_empty());
    assert_eq!(map.insert("a", 2), None);
    assert_eq!(map.insert("a", 4), Some(2));
    assert_eq!(map.get(&"a"), Some(4));
    assert_eq!(map.len(), 1);
    assert_eq!(map.remove(&"a"), Some(4));
    assert!(map.is_empty());
}

// ============================================================
// ProbabilityMap
// ============================================================

#[test]
fn test_probability_map_single_certain_key() {
    let map = ProbabilityMap::from([("only", 1.0)]);
    for _ in 0..1_000 {
        assert_eq!(map.pick(), Some("only"));
    }
}

#[test]
fn test_probability_map_without_positive_entries_picks_nothing() {
    assert_eq!(ProbabilityMap::<i32>::new().pick_or_default(), 0);

    let map = ProbabilityMap::from([("a", 0.0), ("b", -0.5)]);
    assert_eq!(map.pick(), None);
    assert_eq!(map.pick_or_default(), "");
}

#[test]
fn test_probability_map_ignores_negative_entries() {
    let map = ProbabilityMap::from([("neg", -3.0), ("pos", 0.1)]);
    for _ in 0..1_000 {
        assert_eq!(map.pick(), Some("pos"));
    }
}

#[test]
fn test_probability_map_scripted_picks() {
    let map = ProbabilityMap::from([("a", 0.2), ("b", 0.8)]);
    let random = ScriptedRandom::floats(&[0.1, 0.5, 0.0]);
    assert_eq!(map.pick_with(&random), Some("a"));
    assert_eq!(map.pick_with(&random), Some("b"));
    assert_eq!(map.pick_with(&random), Some("a"));
}

#[test]
fn test_probability_map_rounding_edge_picks_nothing() {
    // unlike a lottery, the maps have no fallback past the last partial sum
    let map = ProbabilityMap::from([("a", 0.5), ("b", 0.5)]);
    let random = ScriptedRandom::floats(&[1.0]);
    assert_eq!(map.pick_with(&random), None);
}

#[test]
fn test_probability_map_picks_proportionally() {
    let map = ProbabilityMap::from([("rare", 0.1), ("common", 0.9)]);
    let mut counts = HashMap::new();
    for _ in 0..10_000 {
        *counts.entry(map.pick_or_default()).or_insert(0) += 1;
    }
    assert!(counts["common"] > counts["rare"] * 4, "counts: {:?}", counts);
}

// ============================================================
// Probability::check
// ============================================================

#[test]
fn test_check_is_clamped_outside_unit_interval() {
    for _ in 0..100 {
        assert!(!Probability(0.0).check());
        assert!(!Probability(-1.0).check());
        assert!(Probability(1.0).check());
        assert!(Probability(2.0).check());
    }
}

#[test]
fn test_check_compares_against_draw() {
    let random = ScriptedRandom::floats(&[0.49, 0.5, 0.51]);
    assert!(P50.check_with(&random));
    assert!(!P50.check_with(&random));
    assert!(!P50.check_with(&random));
}

#[test]
fn test_check_p50_is_roughly_fair() {
    let hits = (0..10_000).filter(|_| P50.check()).count();
    assert!((4_000..=6_000).contains(&hits), "hits: {}", hits);
}

// ============================================================
// shared cumulative scan
// ============================================================

#[test]
fn test_pick_index_skips_non_positive_weights() {
    let random = ScriptedRandom::floats(&[0.0, 0.75]);
    let weights = [-2.0, 0.0, 1.0, 3.0];
    assert_eq!(weighted::pick_index(weights, &random), Some(2));
    assert_eq!(weighted::pick_index(weights, &random), Some(3));
}

#[test]
fn test_pick_index_without_eligible_weights() {
    let random = ScriptedRandom::floats(&[0.5]);
    assert_eq!(weighted::pick_index(Vec::<f64>::new(), &random), None);
    assert_eq!(weighted::pick_index([0.0, -1.0, f64::NAN], &random), None);
    assert_eq!(weighted::pick_index([0u64, 0], &random), None);
}

#[test]
fn test_pick_index_integer_total_saturates() {
    let random = ScriptedRandom::ints(&[u64::MAX - 1]);
    assert_eq!(weighted::pick_index([u64::MAX, u64::MAX], &random), Some(0));
}
