//! Property tests for basket keys, ranking and the local solver.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use proptest::prelude::*;
use trade_advisor::application::error::ApplicationError;
use trade_advisor::application::services::{RankingStrategy, ValueThenUnitsStrategy};
use trade_advisor::domain::entities::{RankedAllocation, RateTable, TradeRequest};
use trade_advisor::domain::value_objects::{ResourceCounts, ResourceKind};
use trade_advisor::infrastructure::solver::{LocalSolver, SolverClient};

fn basket(max: u32) -> impl Strategy<Value = ResourceCounts> {
    (0..=max, 0..=max, 0..=max, 0..=max).prop_map(|(s, t, d, c)| ResourceCounts::new(s, t, d, c))
}

/// Small value range so ties are common.
fn value_of(basket: &ResourceCounts, seed: u32) -> u32 {
    (basket.shards * 3 + basket.tools * 5 + basket.demons * 7 + basket.crystals * 11 + seed) % 5
}

fn table_for(allocations: &[ResourceCounts], seed: u32) -> RateTable {
    allocations
        .iter()
        .map(|b| (*b, value_of(b, seed)))
        .collect()
}

fn key(ranked: &RankedAllocation) -> (u32, u64) {
    (ranked.value(), ranked.unit_count())
}

proptest! {
    #[test]
    fn canonical_key_is_injective(a in basket(1_000), b in basket(1_000)) {
        prop_assert_eq!(a == b, a.canonical_key() == b.canonical_key());
    }

    #[test]
    fn canonical_key_decodes_to_same_basket(a in basket(u32::MAX)) {
        let key = a.canonical_key();
        prop_assert_eq!(key.clone(), a.canonical_key());
        prop_assert_eq!(ResourceCounts::from_canonical_key(&key).unwrap(), a);
    }

    #[test]
    fn ranking_is_monotonic(allocations in prop::collection::vec(basket(3), 0..16), seed in 0u32..5) {
        let table = table_for(&allocations, seed);
        let ranked = ValueThenUnitsStrategy::new().rank(&allocations, &table).unwrap();

        prop_assert_eq!(ranked.len(), allocations.len());
        for pair in ranked.windows(2) {
            prop_assert!(key(&pair[0]) >= key(&pair[1]));
        }
        for (i, r) in ranked.iter().enumerate() {
            prop_assert_eq!(r.position(), i + 1);
            prop_assert_eq!(Some(r.value()), table.get(&r.allocation()));
        }
    }

    #[test]
    fn ranking_is_stable_on_ties(allocations in prop::collection::vec(basket(3), 0..16), seed in 0u32..5) {
        let table = table_for(&allocations, seed);
        let ranked = ValueThenUnitsStrategy::new().rank(&allocations, &table).unwrap();

        for r in &ranked {
            let tie = key(r);
            let in_output: Vec<ResourceCounts> = ranked
                .iter()
                .filter(|o| key(o) == tie)
                .map(RankedAllocation::allocation)
                .collect();
            let in_input: Vec<ResourceCounts> = allocations
                .iter()
                .filter(|b| (value_of(b, seed), b.unit_count()) == tie)
                .copied()
                .collect();
            prop_assert_eq!(in_output, in_input);
        }
    }

    #[test]
    fn ranking_is_idempotent(allocations in prop::collection::vec(basket(3), 0..16), seed in 0u32..5) {
        let table = table_for(&allocations, seed);
        let strategy = ValueThenUnitsStrategy::new();

        let once = strategy.rank(&allocations, &table).unwrap();
        prop_assert_eq!(strategy.rank(&allocations, &table).unwrap(), once.clone());

        let order: Vec<ResourceCounts> = once.iter().map(RankedAllocation::allocation).collect();
        let twice = strategy.rank(&order, &table).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn missing_rate_fails_whole_ranking(
        allocations in prop::collection::vec(basket(3), 1..8),
        seed in 0u32..5,
    ) {
        let unrated = ResourceCounts::new(100, 0, 0, 0);
        let table = table_for(&allocations, seed);
        let mut with_unrated = allocations.clone();
        with_unrated.push(unrated);

        let err = ValueThenUnitsStrategy::new().rank(&with_unrated, &table).unwrap_err();
        prop_assert_eq!(err, ApplicationError::rate_lookup_inconsistency(unrated));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn local_best_trade_spends_whole_hand(s in 0u32..3, t in 0u32..3, d in 0u32..3, c in 0u32..3) {
        prop_assume!(s + t + d + c > 0);
        let request = TradeRequest::new()
            .with_holding(ResourceKind::Shard, s)
            .with_holding(ResourceKind::Tool, t)
            .with_holding(ResourceKind::Demon, d)
            .with_holding(ResourceKind::Crystal, c);

        let response = tokio_test::block_on(LocalSolver::new().solve(&request)).unwrap();
        let solved = response.solved().unwrap();
        let best = solved.best();

        prop_assert_eq!(best.combined_basket(), ResourceCounts::new(s, t, d, c));
        let valued: u32 = best
            .allocations()
            .iter()
            .map(|b| solved.rate_table().get(b).unwrap())
            .sum();
        prop_assert_eq!(valued, best.total_value());
        for alternative in solved.alternatives() {
            prop_assert!(alternative.total_value() <= best.total_value());
        }
    }
}
