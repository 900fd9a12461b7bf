// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Capability interface a host exposes for each of its crafting rules.
use crate::grid::CraftingGrid;
use crate::item::{Ingredient, ItemStack};

/// A host-defined crafting rule, opaque beyond these queries.
///
/// Every concrete rule shape (shaped, shapeless, alternative-ingredient
/// variants of both, anything a third party registers) is handled through
/// this one interface; the miner never inspects the concrete type.
pub trait GenericRecipe {
    /// Number of physical input cells the rule was declared for.
    fn arity(&self) -> usize;

    /// Returns `true` when the rule accepts `grid`.
    fn matches(&self, grid: &CraftingGrid) -> bool;

    /// Output produced from `grid`, or `None` when the rule declines.
    fn crafting_result(&self, grid: &CraftingGrid) -> Option<ItemStack>;

    /// Declared raw input slots, in declaration order.
    fn ingredients(&self) -> &[Ingredient];

    /// Human-readable name for logs.
    fn name(&self) -> &str {
        "<anonymous>"
    }
}

impl<T: GenericRecipe + ?Sized> GenericRecipe for &T {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn matches(&self, grid: &CraftingGrid) -> bool {
        (**self).matches(grid)
    }

    fn crafting_result(&self, grid: &CraftingGrid) -> Option<ItemStack> {
        (**self).crafting_result(grid)
    }

    fn ingredients(&self) -> &[Ingredient] {
        (**self).ingredients()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: GenericRecipe + ?Sized> GenericRecipe for Box<T> {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn matches(&self, grid: &CraftingGrid) -> bool {
        (**self).matches(grid)
    }

    fn crafting_result(&self, grid: &CraftingGrid) -> Option<ItemStack> {
        (**self).crafting_result(grid)
    }

    fn ingredients(&self) -> &[Ingredient] {
        (**self).ingredients()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Items worth probing a rule with: every element of the first non-empty
/// declared slot (one item for a literal slot, all alternatives otherwise).
pub fn probe_candidates<R: GenericRecipe + ?Sized>(recipe: &R) -> &[ItemStack] {
    recipe
        .ingredients()
        .iter()
        .find(|slot| !slot.is_empty())
        .map_or(&[][..], Ingredient::items)
}
