// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end reload/lookup scenarios against synthetic host rules.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use compressor_core::{CompressionRegistry, GenericRecipe, Ingredient, ItemKey};
use compressor_dry_tests::recipes::top_left_block;
use compressor_dry_tests::{
    item, item_variant, tagged, wildcard, CountingRecipe, SyntheticRecipeBuilder,
};

#[test]
fn nine_identical_inputs_compress_into_one_output() {
    let rule = SyntheticRecipeBuilder::compression("block", item("a"), 9, item("b")).build();
    let mut registry = CompressionRegistry::new();
    registry.reload([rule]);

    let recipe = registry.lookup(&item("a")).expect("compressed recipe for A");
    assert_eq!(recipe.source().item, item("a").item);
    assert_eq!(recipe.source().count, 9);
    assert_eq!(recipe.result(), &item("b"));
}

#[test]
fn two_by_two_shape_registered_as_nine_cells_is_recovered_as_small() {
    let rule = SyntheticRecipeBuilder::new("misregistered", 9)
        .ingredients(vec![
            Ingredient::Item(item("a")),
            Ingredient::Item(item("a")),
            Ingredient::Empty,
            Ingredient::Item(item("a")),
            Ingredient::Item(item("a")),
        ])
        .empty_slots(4)
        .matcher(top_left_block(item("a"), 2))
        .result(item("c"))
        .build();
    let mut registry = CompressionRegistry::new();
    let report = registry.reload([rule]);

    let recipe = registry.lookup(&item("a")).expect("fallback recipe");
    assert_eq!(recipe.source().count, 4);
    assert_eq!(recipe.result(), &item("c"));
    assert_eq!(registry.tables().small().len(), 1);
    assert!(registry.tables().large().is_empty());
    assert_eq!(report.fallback_recorded, 1);
}

#[test]
fn unknown_item_is_answered_from_cache_the_second_time() {
    let rule = CountingRecipe::new(
        SyntheticRecipeBuilder::compression("block", item("a"), 9, item("b")).build(),
    );
    let counts = rule.counts();
    let mut registry = CompressionRegistry::new();
    registry.reload([rule]);
    let calls_after_reload = counts.matches();
    assert!(calls_after_reload > 0);

    assert!(registry.lookup(&item("d")).is_none());
    assert!(registry.lookup(&item("d")).is_none());

    let stats = registry.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert!(registry.is_cached(&ItemKey::of(&item("d"))));
    // Lookups never call back into host rules.
    assert_eq!(counts.matches(), calls_after_reload);
}

#[test]
fn metadata_bearing_stack_never_compresses() {
    let rule = SyntheticRecipeBuilder::compression("block", item("a"), 9, item("b")).build();
    let mut registry = CompressionRegistry::new();
    registry.reload([rule]);

    assert!(registry.lookup(&tagged("a", b"enchanted")).is_none());
    assert_eq!(registry.cached_len(), 0);
    assert!(registry.lookup(&item("a")).is_some());
    assert!(registry.lookup(&tagged("a", b"enchanted")).is_none());
    assert!(registry.lookup(&tagged("a", b"branded")).is_none());
}

#[test]
fn nine_cell_recipe_wins_over_four_cell_recipe() {
    let small = SyntheticRecipeBuilder::compression("small", item("a"), 4, item("small_out")).build();
    let large = SyntheticRecipeBuilder::compression("large", item("a"), 9, item("large_out")).build();
    let mut registry = CompressionRegistry::new();
    let rules: Vec<Box<dyn GenericRecipe>> = vec![Box::new(small), Box::new(large)];
    registry.reload(rules);

    assert_eq!(registry.tables().small().len(), 1);
    assert_eq!(registry.tables().large().len(), 1);
    let recipe = registry.lookup(&item("a")).unwrap();
    assert_eq!(recipe.result(), &item("large_out"));
    assert_eq!(recipe.source().count, 9);
}

#[test]
fn first_discovered_duplicate_wins() {
    let first = SyntheticRecipeBuilder::compression("first", item("a"), 9, item("first")).build();
    let second = SyntheticRecipeBuilder::compression("second", item("a"), 9, item("second")).build();
    let mut registry = CompressionRegistry::new();
    registry.reload([first, second]);

    assert_eq!(registry.tables().large().len(), 2);
    assert_eq!(registry.lookup(&item("a")).unwrap().result(), &item("first"));
}

#[test]
fn wildcard_source_serves_every_variant() {
    let rule = SyntheticRecipeBuilder::compression("logs", wildcard("log"), 9, item("log_pile"))
        .build();
    let mut registry = CompressionRegistry::new();
    registry.reload([rule]);

    for variant in [0, 1, 5] {
        let recipe = registry.lookup(&item_variant("log", variant)).unwrap();
        assert_eq!(recipe.result(), &item("log_pile"));
    }
    assert_eq!(registry.cached_len(), 3);
}

#[test]
fn alternatives_each_become_a_recipe() {
    let ore_rule = SyntheticRecipeBuilder::new("ingot_block", 9)
        .ingredient(Ingredient::Alternatives(vec![
            item("copper_ingot"),
            item("tin_ingot"),
        ]))
        .always_matches()
        .result(item("metal_block"))
        .build();
    let mut registry = CompressionRegistry::new();
    registry.reload([ore_rule]);

    assert!(registry.lookup(&item("copper_ingot")).is_some());
    assert!(registry.lookup(&item("tin_ingot")).is_some());
    assert!(registry.lookup(&item("iron_ingot")).is_none());
}

#[test]
fn rules_of_other_sizes_are_ignored() {
    let shapeless_pair = SyntheticRecipeBuilder::new("pair", 2)
        .ingredient(Ingredient::Item(item("a")))
        .always_matches()
        .result(item("b"))
        .build();
    let mut registry = CompressionRegistry::new();
    let report = registry.reload([shapeless_pair]);

    assert!(registry.tables().is_empty());
    assert_eq!(report.skipped_arity, 1);
    assert!(registry.lookup(&item("a")).is_none());
}

#[test]
fn reload_forgets_previous_answers() {
    let mut registry = CompressionRegistry::new();
    registry.reload([SyntheticRecipeBuilder::compression("x", item("a"), 9, item("b")).build()]);
    assert!(registry.lookup(&item("a")).is_some());

    registry.reload([SyntheticRecipeBuilder::compression("y", item("c"), 9, item("d")).build()]);
    assert!(registry.lookup(&item("a")).is_none());
    assert!(registry.lookup(&item("c")).is_some());
    assert_eq!(registry.generation(), 2);
}
