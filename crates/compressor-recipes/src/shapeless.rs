// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shapeless rules: a bag of ingredients in any arrangement.

use compressor_core::{CraftingGrid, GenericRecipe, Ingredient, ItemStack};

/// Matches when the occupied grid cells can be paired one-to-one with the
/// declared ingredients, regardless of position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapelessRecipe {
    name: String,
    ingredients: Vec<Ingredient>,
    result: ItemStack,
}

impl ShapelessRecipe {
    pub(crate) fn new(name: String, ingredients: Vec<Ingredient>, result: ItemStack) -> Self {
        Self {
            name,
            ingredients,
            result,
        }
    }

    /// Declared output.
    pub fn result(&self) -> &ItemStack {
        &self.result
    }

    /// Tries to give `stack` an ingredient, re-seating earlier stacks along
    /// an augmenting path when every accepting ingredient is taken.
    fn seat(
        &self,
        stack: usize,
        stacks: &[&ItemStack],
        owner: &mut [Option<usize>],
        visited: &mut [bool],
    ) -> bool {
        for (slot, ingredient) in self.ingredients.iter().enumerate() {
            if visited[slot] || !ingredient.accepts(stacks[stack]) {
                continue;
            }
            visited[slot] = true;
            let free = match owner[slot] {
                None => true,
                Some(previous) => self.seat(previous, stacks, owner, visited),
            };
            if free {
                owner[slot] = Some(stack);
                return true;
            }
        }
        false
    }
}

impl GenericRecipe for ShapelessRecipe {
    fn arity(&self) -> usize {
        self.ingredients.len()
    }

    fn matches(&self, grid: &CraftingGrid) -> bool {
        let stacks: Vec<&ItemStack> = grid.occupied().collect();
        if stacks.len() != self.ingredients.len() {
            return false;
        }
        let mut owner = vec![None; self.ingredients.len()];
        (0..stacks.len()).all(|stack| {
            let mut visited = vec![false; self.ingredients.len()];
            self.seat(stack, &stacks, &mut owner, &mut visited)
        })
    }

    fn crafting_result(&self, _grid: &CraftingGrid) -> Option<ItemStack> {
        Some(self.result.clone())
    }

    fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compressor_core::{make_item_id, SyntheticGrid, Variant};

    fn stack(label: &str) -> ItemStack {
        ItemStack::of(make_item_id(label))
    }

    fn grid_of(labels: &[&str]) -> CraftingGrid {
        let mut grid = CraftingGrid::new(3, 3);
        for (i, label) in labels.iter().enumerate() {
            grid.set(i % 3, i / 3, Some(stack(label)));
        }
        grid
    }

    fn recipe(ingredients: Vec<Ingredient>) -> ShapelessRecipe {
        ShapelessRecipe::new("test".into(), ingredients, stack("out"))
    }

    #[test]
    fn four_identical_ingredients_match_small_grid() {
        let recipe = recipe(vec![Ingredient::Item(stack("a")); 4]);
        assert_eq!(recipe.arity(), 4);
        assert!(recipe.matches(SyntheticGrid::small().fill(&stack("a"))));
        assert!(!recipe.matches(SyntheticGrid::large().fill(&stack("a"))));
    }

    #[test]
    fn alternatives_are_reseated_to_find_a_pairing() {
        // The first stack could take either slot; only one pairing works.
        let recipe = recipe(vec![
            Ingredient::Alternatives(vec![stack("a"), stack("b")]),
            Ingredient::Item(stack("a")),
        ]);
        assert!(recipe.matches(&grid_of(&["a", "b"])));
        assert!(!recipe.matches(&grid_of(&["b", "b"])));
    }

    #[test]
    fn wildcard_ingredient_accepts_any_variant() {
        let any_log = ItemStack::new(make_item_id("log"), Variant::Any, 1);
        let recipe = recipe(vec![Ingredient::Item(any_log)]);
        let mut grid = CraftingGrid::new(2, 2);
        grid.set(1, 1, Some(ItemStack::new(make_item_id("log"), Variant::Exact(3), 1)));
        assert!(recipe.matches(&grid));
    }

    #[test]
    fn count_mismatch_rejects() {
        let recipe = recipe(vec![Ingredient::Item(stack("a")); 2]);
        assert!(!recipe.matches(&grid_of(&["a"])));
        assert!(!recipe.matches(&grid_of(&["a", "a", "a"])));
    }
}
