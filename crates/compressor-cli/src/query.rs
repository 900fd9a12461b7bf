// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parsing `label[@variant]` item arguments.

use anyhow::{bail, Context, Result};
use compressor_core::{make_item_id, ItemStack, Variant};

/// Parses `label`, `label@3` or `label@*` into a single-item stack.
pub(crate) fn parse_item(text: &str) -> Result<ItemStack> {
    let (label, variant) = match text.rsplit_once('@') {
        None => (text, Variant::default()),
        Some((label, "*")) => (label, Variant::Any),
        Some((label, n)) => {
            let n = n
                .parse::<u16>()
                .with_context(|| format!("invalid variant in `{text}`"))?;
            (label, Variant::Exact(n))
        }
    };
    if label.is_empty() {
        bail!("empty item label in `{text}`");
    }
    Ok(ItemStack::new(make_item_id(label), variant, 1))
}
