// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shaped rules: a fixed pattern placed anywhere in the grid.

use compressor_core::{CraftingGrid, GenericRecipe, Ingredient, ItemStack};

/// A `width × height` pattern of ingredient cells.
///
/// The pattern matches a grid when it can be placed at some offset with every
/// grid cell outside it empty. Empty pattern cells require empty grid cells.
/// Mirrored rules also accept the pattern flipped left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapedRecipe {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<Ingredient>,
    result: ItemStack,
    mirrored: bool,
}

impl ShapedRecipe {
    /// `cells` is row-major and holds exactly `width * height` slots.
    pub(crate) fn new(
        name: String,
        width: usize,
        height: usize,
        cells: Vec<Ingredient>,
        result: ItemStack,
        mirrored: bool,
    ) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            name,
            width,
            height,
            cells,
            result,
            mirrored,
        }
    }

    /// Pattern width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pattern height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the left-right flip of the pattern is accepted.
    pub fn mirrored(&self) -> bool {
        self.mirrored
    }

    /// Declared output.
    pub fn result(&self) -> &ItemStack {
        &self.result
    }

    fn slot_at(
        &self,
        col: usize,
        row: usize,
        origin: (usize, usize),
        mirror: bool,
    ) -> Option<&Ingredient> {
        let x = col.checked_sub(origin.0)?;
        let y = row.checked_sub(origin.1)?;
        if x >= self.width || y >= self.height {
            return None;
        }
        let x = if mirror { self.width - 1 - x } else { x };
        self.cells.get(y * self.width + x)
    }

    fn matches_at(&self, grid: &CraftingGrid, origin: (usize, usize), mirror: bool) -> bool {
        (0..grid.height()).all(|row| {
            (0..grid.width()).all(|col| {
                let cell = grid.get(col, row);
                match self.slot_at(col, row, origin, mirror) {
                    Some(slot) if !slot.is_empty() => {
                        cell.is_some_and(|stack| slot.accepts(stack))
                    }
                    _ => cell.is_none(),
                }
            })
        })
    }
}

impl GenericRecipe for ShapedRecipe {
    fn arity(&self) -> usize {
        self.width * self.height
    }

    fn matches(&self, grid: &CraftingGrid) -> bool {
        if self.width > grid.width() || self.height > grid.height() {
            return false;
        }
        (0..=grid.width() - self.width).any(|dx| {
            (0..=grid.height() - self.height).any(|dy| {
                self.matches_at(grid, (dx, dy), false)
                    || (self.mirrored && self.matches_at(grid, (dx, dy), true))
            })
        })
    }

    fn crafting_result(&self, _grid: &CraftingGrid) -> Option<ItemStack> {
        Some(self.result.clone())
    }

    fn ingredients(&self) -> &[Ingredient] {
        &self.cells
    }

    fn name(&self) -> &str {
        &self.name
    }
}
