// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Concurrent access through [`SharedRegistry`].
#![allow(clippy::unwrap_used)]

use std::thread;

use compressor_core::{RegistryConfig, SharedRegistry};
use compressor_dry_tests::{item, item_variant, tagged, SyntheticRecipeBuilder};

fn block_rules() -> Vec<compressor_dry_tests::SyntheticRecipe> {
    (0..8u16)
        .map(|i| {
            SyntheticRecipeBuilder::compression(
                format!("block-{i}"),
                item_variant("ingot", i),
                9,
                item_variant("block", i),
            )
            .build()
        })
        .collect()
}

#[test]
fn concurrent_lookups_agree_with_single_threaded_answers() {
    let shared = SharedRegistry::default();
    shared.reload(block_rules());

    thread::scope(|scope| {
        for worker in 0..4u16 {
            let shared = shared.clone();
            scope.spawn(move || {
                for round in 0..50u16 {
                    let variant = (worker + round) % 12;
                    let answer = shared.lookup(&item_variant("ingot", variant));
                    if variant < 8 {
                        let recipe = answer.unwrap();
                        assert_eq!(recipe.result(), &item_variant("block", variant));
                        assert_eq!(recipe.source().count, 9);
                    } else {
                        assert!(answer.is_none());
                    }
                }
            });
        }
    });

    // Twelve distinct keys were asked about; every answer is cached once.
    assert_eq!(shared.cached_len(), 12);
    let stats = shared.stats();
    assert_eq!(stats.hits + stats.misses, 200);
    assert_eq!(stats.misses, 12);
}

#[test]
fn reload_through_one_handle_is_seen_by_clones() {
    let shared = SharedRegistry::default();
    let other = shared.clone();
    shared.reload(block_rules());
    assert!(other.lookup(&item_variant("ingot", 1)).is_some());

    other.reload([SyntheticRecipeBuilder::compression("dust", item("dust"), 4, item("pile")).build()]);
    assert!(shared.lookup(&item_variant("ingot", 1)).is_none());
    assert_eq!(shared.lookup(&item("dust")).unwrap().source().count, 4);
    assert_eq!(shared.with_registry(|r| r.generation()), 2);
}

#[test]
fn metadata_rejections_are_counted_without_caching() {
    let shared = SharedRegistry::default();
    shared.reload(block_rules());
    assert!(shared.lookup(&tagged("ingot", b"nbt")).is_none());
    assert_eq!(shared.stats().metadata_rejections, 1);
    assert_eq!(shared.cached_len(), 0);
}

#[test]
fn uncached_misses_keep_being_resolved() {
    let shared = SharedRegistry::with_config(RegistryConfig {
        cache_misses: false,
        ..RegistryConfig::default()
    });
    shared.reload(block_rules());
    assert!(shared.lookup(&item("cobblestone")).is_none());
    assert!(shared.lookup(&item("cobblestone")).is_none());
    assert_eq!(shared.cached_len(), 0);
    assert_eq!(shared.stats().misses, 2);
}
