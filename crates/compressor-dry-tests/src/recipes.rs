// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Synthetic host rules for tests.
//!
//! Provides pre-built grid predicates, a builder for custom host rules, and a
//! wrapper that counts how often the miner (or anything else) calls into a
//! rule.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use compressor_core::{CraftingGrid, GenericRecipe, Ingredient, ItemStack};

/// Boxed grid predicate.
pub type MatchFn = Box<dyn Fn(&CraftingGrid) -> bool + Send + Sync>;

/// Boxed result function.
pub type ResultFn = Box<dyn Fn(&CraftingGrid) -> Option<ItemStack> + Send + Sync>;

// --- Grid predicates ---

/// Predicate that always returns true.
pub fn always_match(_: &CraftingGrid) -> bool {
    true
}

/// Predicate that always returns false.
pub fn never_match(_: &CraftingGrid) -> bool {
    false
}

/// Predicate accepting grids holding exactly `cells` items, all of which
/// `input` accepts.
pub fn homogeneous(input: ItemStack, cells: usize) -> impl Fn(&CraftingGrid) -> bool {
    move |grid| grid.occupied().count() == cells && grid.occupied().all(|s| input.accepts(s))
}

/// Predicate accepting only grids whose top-left `side × side` block holds
/// items `input` accepts while every other cell is empty.
pub fn top_left_block(input: ItemStack, side: usize) -> impl Fn(&CraftingGrid) -> bool {
    move |grid| {
        (0..grid.height()).all(|row| {
            (0..grid.width()).all(|col| match grid.get(col, row) {
                Some(stack) => col < side && row < side && input.accepts(stack),
                None => col >= side || row >= side,
            })
        })
    }
}

// --- Synthetic rule ---

/// Host rule assembled from closures.
pub struct SyntheticRecipe {
    name: String,
    arity: usize,
    ingredients: Vec<Ingredient>,
    matcher: MatchFn,
    result: ResultFn,
}

impl core::fmt::Debug for SyntheticRecipe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SyntheticRecipe")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl GenericRecipe for SyntheticRecipe {
    fn arity(&self) -> usize {
        self.arity
    }

    fn matches(&self, grid: &CraftingGrid) -> bool {
        (self.matcher)(grid)
    }

    fn crafting_result(&self, grid: &CraftingGrid) -> Option<ItemStack> {
        (self.result)(grid)
    }

    fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Builder for creating synthetic host rules in tests.
///
/// # Example
///
/// ```
/// use compressor_dry_tests::{item, SyntheticRecipeBuilder};
///
/// let rule = SyntheticRecipeBuilder::compression("iron_block", item("iron_ingot"), 9, item("iron_block"))
///     .build();
/// ```
pub struct SyntheticRecipeBuilder {
    name: String,
    arity: usize,
    ingredients: Vec<Ingredient>,
    matcher: MatchFn,
    result: ResultFn,
}

impl SyntheticRecipeBuilder {
    /// Create a builder for a rule of `arity` cells that never matches and
    /// produces nothing.
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            ingredients: Vec::new(),
            matcher: Box::new(never_match),
            result: Box::new(|_| None),
        }
    }

    /// A rule accepting exactly `arity` copies of `input` and producing
    /// `output`; `input` is its only declared ingredient.
    pub fn compression(
        name: impl Into<String>,
        input: ItemStack,
        arity: usize,
        output: ItemStack,
    ) -> Self {
        Self::new(name, arity)
            .ingredient(Ingredient::Item(input.clone()))
            .matcher(homogeneous(input, arity))
            .result(output)
    }

    /// Append a declared ingredient slot.
    pub fn ingredient(mut self, slot: Ingredient) -> Self {
        self.ingredients.push(slot);
        self
    }

    /// Append `count` empty slots.
    pub fn empty_slots(mut self, count: usize) -> Self {
        self.ingredients
            .extend(std::iter::repeat(Ingredient::Empty).take(count));
        self
    }

    /// Replace every declared slot.
    pub fn ingredients(mut self, slots: Vec<Ingredient>) -> Self {
        self.ingredients = slots;
        self
    }

    /// Set the grid predicate.
    pub fn matcher(mut self, f: impl Fn(&CraftingGrid) -> bool + Send + Sync + 'static) -> Self {
        self.matcher = Box::new(f);
        self
    }

    /// Always produce `output` (whatever the grid).
    pub fn result(mut self, output: ItemStack) -> Self {
        self.result = Box::new(move |_| Some(output.clone()));
        self
    }

    /// Produce nothing even when the grid matches.
    pub fn no_result(mut self) -> Self {
        self.result = Box::new(|_| None);
        self
    }

    /// Use the "always match" predicate.
    pub fn always_matches(self) -> Self {
        self.matcher(always_match)
    }

    /// Build the rule.
    pub fn build(self) -> SyntheticRecipe {
        SyntheticRecipe {
            name: self.name,
            arity: self.arity,
            ingredients: self.ingredients,
            matcher: self.matcher,
            result: self.result,
        }
    }
}

// --- Call counting ---

#[derive(Default, Debug)]
struct CallCountsInner {
    matches: AtomicUsize,
    results: AtomicUsize,
}

/// Shared counters of calls into a [`CountingRecipe`]. Clones share state.
#[derive(Clone, Default, Debug)]
pub struct CallCounts {
    inner: Arc<CallCountsInner>,
}

impl CallCounts {
    /// Number of `matches` calls.
    pub fn matches(&self) -> usize {
        self.inner.matches.load(Ordering::SeqCst)
    }

    /// Number of `crafting_result` calls.
    pub fn results(&self) -> usize {
        self.inner.results.load(Ordering::SeqCst)
    }

    /// Reset both counters to zero.
    pub fn reset(&self) {
        self.inner.matches.store(0, Ordering::SeqCst);
        self.inner.results.store(0, Ordering::SeqCst);
    }
}

/// Wraps a host rule and counts calls to its grid predicate and result
/// function.
#[derive(Debug)]
pub struct CountingRecipe<R> {
    inner: R,
    counts: CallCounts,
}

impl<R> CountingRecipe<R> {
    /// Wrap `inner` with fresh counters.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            counts: CallCounts::default(),
        }
    }

    /// Handle to the counters; stays valid after the rule is moved.
    pub fn counts(&self) -> CallCounts {
        self.counts.clone()
    }
}

impl<R: GenericRecipe> GenericRecipe for CountingRecipe<R> {
    fn arity(&self) -> usize {
        self.inner.arity()
    }

    fn matches(&self, grid: &CraftingGrid) -> bool {
        self.counts.inner.matches.fetch_add(1, Ordering::SeqCst);
        self.inner.matches(grid)
    }

    fn crafting_result(&self, grid: &CraftingGrid) -> Option<ItemStack> {
        self.counts.inner.results.fetch_add(1, Ordering::SeqCst);
        self.inner.crafting_result(grid)
    }

    fn ingredients(&self) -> &[Ingredient] {
        self.inner.ingredients()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
