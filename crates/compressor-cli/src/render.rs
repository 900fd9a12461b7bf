// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Table output.

use std::sync::Arc;

use comfy_table::Table;
use compressor_core::{CompressedRecipe, MiningReport, RecipeTables};
use compressor_recipes::ItemNames;

pub(crate) fn lookups(
    names: &ItemNames,
    answers: &[(String, Option<Arc<CompressedRecipe>>)],
) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Item", "Consumes", "Produces"]);
    for (query, answer) in answers {
        let (consumes, produces) = match answer {
            Some(recipe) => (
                format!("{} × {}", recipe.source().count, names.describe(recipe.source())),
                format!("{} × {}", recipe.result().count, names.describe(recipe.result())),
            ),
            None => ("-".to_owned(), "no compressed recipe".to_owned()),
        };
        table.add_row(vec![query.clone(), consumes, produces]);
    }
    table
}

pub(crate) fn tables(names: &ItemNames, tables: &RecipeTables) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Table", "#", "Source", "Count", "Result", "Result count"]);
    let rows = tables
        .large()
        .iter()
        .enumerate()
        .map(|(i, r)| ("large", i, r))
        .chain(tables.small().iter().enumerate().map(|(i, r)| ("small", i, r)));
    for (size, index, recipe) in rows {
        table.add_row(vec![
            size.to_owned(),
            index.to_string(),
            names.describe(recipe.source()),
            recipe.source().count.to_string(),
            names.describe(recipe.result()),
            recipe.result().count.to_string(),
        ]);
    }
    table
}

pub(crate) fn report(report: &MiningReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Mining", "Count"]);
    for (label, value) in [
        ("recipes scanned", report.recipes_scanned),
        ("skipped (arity)", report.skipped_arity),
        ("without probe", report.without_probe),
        ("probes tested", report.probes_tested),
        ("malformed probes", report.malformed_probes),
        ("metadata probes", report.metadata_probes),
        ("rejected probes", report.rejected_probes),
        ("empty results", report.empty_results),
        ("small recorded", report.small_recorded),
        ("large recorded", report.large_recorded),
        ("fallback recorded", report.fallback_recorded),
    ] {
        table.add_row(vec![label.to_owned(), value.to_string()]);
    }
    table
}
