// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property checks: reload idempotence, lookup determinism, cache correctness.
#![allow(clippy::unwrap_used)]

use compressor_core::{CompressionRegistry, ItemKey, ItemStack};
use compressor_dry_tests::recipes::{top_left_block, SyntheticRecipe};
use compressor_dry_tests::{item_variant, tagged, wildcard, SyntheticRecipeBuilder};
use proptest::prelude::*;

const LABELS: [&str; 4] = ["a", "b", "c", "d"];

/// One generated host rule: (input label, input variant or wildcard, rule shape).
type RuleSeed = (usize, Option<u16>, u8);

fn build_rule(index: usize, (label, variant, shape): RuleSeed) -> SyntheticRecipe {
    let input = match variant {
        Some(v) => item_variant(LABELS[label], v),
        None => wildcard(LABELS[label]),
    };
    let output = item_variant("out", u16::try_from(index).unwrap_or(u16::MAX));
    let name = format!("rule-{index}");
    match shape % 4 {
        0 => SyntheticRecipeBuilder::compression(name, input, 4, output).build(),
        1 => SyntheticRecipeBuilder::compression(name, input, 9, output).build(),
        2 => SyntheticRecipeBuilder::compression(name, input.clone(), 9, output)
            .matcher(top_left_block(input, 2))
            .build(),
        _ => SyntheticRecipeBuilder::compression(name, input, 6, output).build(),
    }
}

fn build_rules(seeds: &[RuleSeed]) -> Vec<SyntheticRecipe> {
    seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| build_rule(i, *seed))
        .collect()
}

fn rule_seeds() -> impl Strategy<Value = Vec<RuleSeed>> {
    prop::collection::vec((0..LABELS.len(), prop::option::of(0u16..3), any::<u8>()), 0..12)
}

fn queries() -> impl Strategy<Value = Vec<ItemStack>> {
    prop::collection::vec(
        (0..LABELS.len(), 0u16..3).prop_map(|(label, v)| item_variant(LABELS[label], v)),
        0..24,
    )
}

proptest! {
    #[test]
    fn reload_is_idempotent(seeds in rule_seeds(), probes in queries()) {
        let mut registry = CompressionRegistry::new();
        let first_report = registry.reload(build_rules(&seeds));
        let first = registry.tables().clone();
        for q in &probes {
            let _ = registry.lookup(q);
        }
        let second_report = registry.reload(build_rules(&seeds));
        prop_assert_eq!(&first, registry.tables());
        prop_assert_eq!(first_report, second_report);
    }

    #[test]
    fn cached_answers_equal_fresh_scans(seeds in rule_seeds(), probes in queries()) {
        let mut registry = CompressionRegistry::new();
        registry.reload(build_rules(&seeds));
        for q in probes.iter().chain(probes.iter()) {
            let fresh = registry.resolve(q);
            let cached = registry.lookup(q);
            prop_assert_eq!(fresh, cached);
        }
    }

    #[test]
    fn repeated_lookups_are_deterministic(seeds in rule_seeds(), probes in queries()) {
        let mut registry = CompressionRegistry::new();
        registry.reload(build_rules(&seeds));
        let once: Vec<_> = probes.iter().map(|q| registry.lookup(q)).collect();
        let twice: Vec<_> = probes.iter().map(|q| registry.lookup(q)).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn metadata_queries_never_answer_or_cache(seeds in rule_seeds(), label in 0..LABELS.len()) {
        let mut registry = CompressionRegistry::new();
        registry.reload(build_rules(&seeds));
        let query = tagged(LABELS[label], b"side-data");
        prop_assert!(registry.lookup(&query).is_none());
        prop_assert!(!registry.is_cached(&ItemKey::of(&query)));
        prop_assert_eq!(registry.cached_len(), 0);
    }

    #[test]
    fn large_table_has_priority(seeds in rule_seeds(), probes in queries()) {
        let mut registry = CompressionRegistry::new();
        registry.reload(build_rules(&seeds));
        for q in &probes {
            let in_large = registry.tables().large().iter().find(|r| r.compresses(q)).cloned();
            if let Some(expected) = in_large {
                prop_assert_eq!(registry.lookup(q), Some(expected));
            }
        }
    }
}
