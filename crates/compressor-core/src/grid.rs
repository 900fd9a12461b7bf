// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Crafting grids and the synthetic grids used to probe host recipes.
use crate::item::ItemStack;

/// A fixed-size crafting grid as seen by host recipe predicates.
///
/// Cells are stored row-major; `(col, row)` addresses outside the grid read
/// as empty and ignore writes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CraftingGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<ItemStack>>,
}

impl CraftingGrid {
    /// Creates an empty `width × height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Returns the stack at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Option<&ItemStack> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[row * self.width + col].as_ref()
    }

    /// Replaces the stack at `(col, row)`.
    pub fn set(&mut self, col: usize, row: usize, stack: Option<ItemStack>) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = stack;
        }
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<ItemStack>] {
        &self.cells
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = &ItemStack> {
        self.cells.iter().flatten()
    }
}

/// How a [`SyntheticGrid`] spreads the probe over its cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FillMode {
    /// Every cell receives the probe.
    Full,
    /// Only the top-left `side × side` block receives the probe; the rest
    /// stays empty. Models a 2×2 recipe registered against a 3×3 shape.
    Degenerate {
        /// Edge length of the filled block.
        side: usize,
    },
}

/// A reusable grid filled homogeneously with copies of one probe item.
#[derive(Clone, Debug)]
pub struct SyntheticGrid {
    grid: CraftingGrid,
    mode: FillMode,
}

impl SyntheticGrid {
    /// Creates an empty synthetic grid.
    pub fn new(width: usize, height: usize, mode: FillMode) -> Self {
        Self {
            grid: CraftingGrid::new(width, height),
            mode,
        }
    }

    /// 2×2, every cell filled.
    pub fn small() -> Self {
        Self::new(2, 2, FillMode::Full)
    }

    /// 3×3 with only the top-left 2×2 block filled.
    pub fn small_degenerate() -> Self {
        Self::new(3, 3, FillMode::Degenerate { side: 2 })
    }

    /// 3×3, every cell filled.
    pub fn large() -> Self {
        Self::new(3, 3, FillMode::Full)
    }

    /// Fill mode of this grid.
    pub fn mode(&self) -> FillMode {
        self.mode
    }

    /// Overwrites every cell: a count-1 copy of `probe` where the fill mode
    /// places one, empty everywhere else.
    pub fn fill(&mut self, probe: &ItemStack) -> &CraftingGrid {
        let single = probe.with_count(1);
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                let placed = match self.mode {
                    FillMode::Full => true,
                    FillMode::Degenerate { side } => col < side && row < side,
                };
                self.grid.set(col, row, placed.then(|| single.clone()));
            }
        }
        &self.grid
    }

    /// The grid as last filled.
    pub fn grid(&self) -> &CraftingGrid {
        &self.grid
    }
}
