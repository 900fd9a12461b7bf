// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Derived compression recipes and the tables that hold them.
use std::sync::Arc;

use crate::item::ItemStack;

/// Grid size class a compressed recipe was derived from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GridSize {
    /// Four input cells (2×2).
    Small,
    /// Nine input cells (3×3).
    Large,
}

impl GridSize {
    /// Number of identical inputs consumed by one compression.
    pub fn cells(self) -> u32 {
        match self {
            Self::Small => 4,
            Self::Large => 9,
        }
    }

    /// Classifies a host recipe arity; other arities have no size class.
    pub fn from_arity(arity: usize) -> Option<Self> {
        match arity {
            4 => Some(Self::Small),
            9 => Some(Self::Large),
            _ => None,
        }
    }
}

/// "N identical inputs → one output" pairing discovered during a reload.
///
/// The source stack carries the input quantity (4 or 9). Immutable once
/// built.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CompressedRecipe {
    source: ItemStack,
    result: ItemStack,
}

impl CompressedRecipe {
    /// Pairs `source` (already carrying its input quantity) with `result`.
    pub fn new(source: ItemStack, result: ItemStack) -> Self {
        Self { source, result }
    }

    /// The consumed input, quantity included.
    pub fn source(&self) -> &ItemStack {
        &self.source
    }

    /// The produced output.
    pub fn result(&self) -> &ItemStack {
        &self.result
    }

    /// Returns `true` when this recipe compresses `query`.
    pub fn compresses(&self, query: &ItemStack) -> bool {
        self.source.accepts(query)
    }
}

/// Recipes derived from 4-cell matches (`small`) and 9-cell matches
/// (`large`), each in discovery order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RecipeTables {
    pub(crate) small: Vec<Arc<CompressedRecipe>>,
    pub(crate) large: Vec<Arc<CompressedRecipe>>,
}

impl RecipeTables {
    /// Recipes derived from 4-cell grids, in discovery order.
    pub fn small(&self) -> &[Arc<CompressedRecipe>] {
        &self.small
    }

    /// Recipes derived from 9-cell grids, in discovery order.
    pub fn large(&self) -> &[Arc<CompressedRecipe>] {
        &self.large
    }

    /// Total recipe count.
    pub fn len(&self) -> usize {
        self.small.len() + self.large.len()
    }

    /// Returns `true` when both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.small.is_empty() && self.large.is_empty()
    }

    pub(crate) fn push(&mut self, size: GridSize, recipe: CompressedRecipe) {
        let table = match size {
            GridSize::Small => &mut self.small,
            GridSize::Large => &mut self.large,
        };
        table.push(Arc::new(recipe));
    }

    /// First recipe compressing `query`: `large` first, then `small`.
    pub fn find(&self, query: &ItemStack) -> Option<&Arc<CompressedRecipe>> {
        self.large
            .iter()
            .chain(&self.small)
            .find(|recipe| recipe.compresses(query))
    }

    pub(crate) fn clear(&mut self) {
        self.small.clear();
        self.large.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::{make_item_id, Variant};

    fn recipe(source: &str, variant: Variant, count: u32, result: &str) -> CompressedRecipe {
        CompressedRecipe::new(
            ItemStack::new(make_item_id(source), variant, count),
            ItemStack::of(make_item_id(result)),
        )
    }

    #[test]
    fn arity_classification() {
        assert_eq!(GridSize::from_arity(4), Some(GridSize::Small));
        assert_eq!(GridSize::from_arity(9), Some(GridSize::Large));
        assert_eq!(GridSize::from_arity(1), None);
        assert_eq!(GridSize::from_arity(6), None);
    }

    #[test]
    fn find_prefers_large_over_earlier_small() {
        let mut tables = RecipeTables::default();
        tables.push(GridSize::Small, recipe("iron", Variant::Exact(0), 4, "small"));
        tables.push(GridSize::Large, recipe("iron", Variant::Exact(0), 9, "large"));
        let hit = tables.find(&ItemStack::of(make_item_id("iron")));
        assert_eq!(hit.map(|r| r.source().count), Some(9));
    }

    #[test]
    fn find_respects_wildcard_and_exact_variants() {
        let mut tables = RecipeTables::default();
        tables.push(GridSize::Large, recipe("log", Variant::Exact(2), 9, "birch"));
        tables.push(GridSize::Large, recipe("log", Variant::Any, 9, "any"));
        let birch = ItemStack::new(make_item_id("log"), Variant::Exact(2), 1);
        let oak = ItemStack::new(make_item_id("log"), Variant::Exact(0), 1);
        assert_eq!(
            tables.find(&birch).map(|r| r.result().item),
            Some(make_item_id("birch"))
        );
        assert_eq!(
            tables.find(&oak).map(|r| r.result().item),
            Some(make_item_id("any"))
        );
        assert!(tables.find(&ItemStack::of(make_item_id("stone"))).is_none());
    }
}
