// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Derives compression recipes by probing host rules with homogeneous grids.
//!
//! Every host rule declared for 4 or 9 cells is probed with the items of its
//! first non-empty ingredient slot. A rule that accepts a grid filled
//! entirely with one item is a compression: the probe (with the grid's cell
//! count as quantity) becomes the source, the rule's output the result.
//!
//! 9-cell rules that reject the full 3×3 grid get a second chance with a
//! 3×3 grid holding only a 2×2 block. Some producers register 2×2 shapes
//! against a 3×3 definition; those land in the small table.
use tracing::debug;

use crate::config::RegistryConfig;
use crate::grid::SyntheticGrid;
use crate::host::{probe_candidates, GenericRecipe};
use crate::item::ItemStack;
use crate::recipe::{CompressedRecipe, GridSize, RecipeTables};

/// Counters describing one mining pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MiningReport {
    /// Host rules visited.
    pub recipes_scanned: usize,
    /// Rules whose arity is neither 4 nor 9.
    pub skipped_arity: usize,
    /// Rules of a usable arity without any non-empty ingredient slot.
    pub without_probe: usize,
    /// Probe candidates examined.
    pub probes_tested: usize,
    /// Probes discarded because their kind is null.
    pub malformed_probes: usize,
    /// Probes discarded because they carry extended metadata.
    pub metadata_probes: usize,
    /// Probes whose synthetic grids the rule rejected.
    pub rejected_probes: usize,
    /// Accepted probes for which the rule produced no output.
    pub empty_results: usize,
    /// Recipes appended to the small table (fallback included).
    pub small_recorded: usize,
    /// Recipes appended to the large table.
    pub large_recorded: usize,
    /// Small recipes that came from the degenerate 3×3 fallback.
    pub fallback_recorded: usize,
}

enum Attempt {
    Rejected,
    Empty,
    Recorded(CompressedRecipe),
}

/// Owns the three scratch grids and runs mining passes.
#[derive(Debug)]
pub struct RecipeMiner {
    small: SyntheticGrid,
    small_degenerate: SyntheticGrid,
    large: SyntheticGrid,
    degenerate_fallback: bool,
}

impl RecipeMiner {
    /// Creates a miner honouring `config`.
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            small: SyntheticGrid::small(),
            small_degenerate: SyntheticGrid::small_degenerate(),
            large: SyntheticGrid::large(),
            degenerate_fallback: config.degenerate_fallback,
        }
    }

    /// Scans `recipes` in order and returns freshly built tables.
    pub fn mine<I>(&mut self, recipes: I) -> (RecipeTables, MiningReport)
    where
        I: IntoIterator,
        I::Item: GenericRecipe,
    {
        let mut tables = RecipeTables::default();
        let mut report = MiningReport::default();
        for recipe in recipes {
            self.mine_recipe(&recipe, &mut tables, &mut report);
        }
        (tables, report)
    }

    fn mine_recipe<R>(&mut self, recipe: &R, tables: &mut RecipeTables, report: &mut MiningReport)
    where
        R: GenericRecipe + ?Sized,
    {
        report.recipes_scanned += 1;
        let Some(size) = GridSize::from_arity(recipe.arity()) else {
            report.skipped_arity += 1;
            return;
        };
        let candidates = probe_candidates(recipe);
        if candidates.is_empty() {
            report.without_probe += 1;
            return;
        }
        for candidate in candidates {
            report.probes_tested += 1;
            if candidate.item.is_null() {
                debug!(recipe = recipe.name(), "discarding probe with null item kind");
                report.malformed_probes += 1;
                continue;
            }
            if candidate.has_metadata() {
                report.metadata_probes += 1;
                continue;
            }
            let probe = candidate.with_count(1);
            self.probe(recipe, size, &probe, tables, report);
        }
    }

    fn probe<R>(
        &mut self,
        recipe: &R,
        size: GridSize,
        probe: &ItemStack,
        tables: &mut RecipeTables,
        report: &mut MiningReport,
    ) where
        R: GenericRecipe + ?Sized,
    {
        let (grid, outcome) = match size {
            GridSize::Small => (
                GridSize::Small,
                try_grid(&mut self.small, recipe, probe, GridSize::Small),
            ),
            GridSize::Large => match try_grid(&mut self.large, recipe, probe, GridSize::Large) {
                Attempt::Rejected if self.degenerate_fallback => (
                    GridSize::Small,
                    try_grid(&mut self.small_degenerate, recipe, probe, GridSize::Small),
                ),
                other => (GridSize::Large, other),
            },
        };
        match outcome {
            Attempt::Rejected => report.rejected_probes += 1,
            Attempt::Empty => report.empty_results += 1,
            Attempt::Recorded(compressed) => {
                debug!(
                    recipe = recipe.name(),
                    source = %compressed.source().item,
                    count = compressed.source().count,
                    result = %compressed.result().item,
                    "recorded compressed recipe"
                );
                match grid {
                    GridSize::Small => {
                        report.small_recorded += 1;
                        if size == GridSize::Large {
                            report.fallback_recorded += 1;
                        }
                    }
                    GridSize::Large => report.large_recorded += 1,
                }
                tables.push(grid, compressed);
            }
        }
    }
}

impl Default for RecipeMiner {
    fn default() -> Self {
        Self::new(&RegistryConfig::default())
    }
}

fn try_grid<R>(
    grid: &mut SyntheticGrid,
    recipe: &R,
    probe: &ItemStack,
    size: GridSize,
) -> Attempt
where
    R: GenericRecipe + ?Sized,
{
    let filled = grid.fill(probe);
    if !recipe.matches(filled) {
        return Attempt::Rejected;
    }
    match recipe.crafting_result(filled) {
        Some(result) => Attempt::Recorded(CompressedRecipe::new(
            probe.with_count(size.cells()),
            result,
        )),
        None => Attempt::Empty,
    }
}
