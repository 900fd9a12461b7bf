// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reverse mapping from hashed item ids to the labels they came from.

use compressor_core::{make_item_id, ItemId, ItemStack, Variant};
use rustc_hash::FxHashMap;

/// Labels of every item a recipe book mentions, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct ItemNames {
    by_id: FxHashMap<ItemId, String>,
}

impl ItemNames {
    /// Creates an empty name table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes `label` into an id and remembers the label for it.
    pub fn register(&mut self, label: &str) -> ItemId {
        let id = make_item_id(label);
        self.by_id
            .entry(id)
            .or_insert_with(|| label.to_owned());
        id
    }

    /// Label registered for `id`.
    pub fn label(&self, id: &ItemId) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` when no label is registered.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Human-readable `label[@variant]` for `stack`.
    ///
    /// Variant 0 is omitted, the wildcard prints as `@*`, and ids without a
    /// label print as their short hex form.
    pub fn describe(&self, stack: &ItemStack) -> String {
        let label = self
            .label(&stack.item)
            .map_or_else(|| stack.item.to_string(), str::to_owned);
        match stack.variant {
            Variant::Exact(0) => label,
            variant => format!("{label}@{variant}"),
        }
    }
}
