// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Item stack shorthands keyed by human-readable labels.

use bytes::Bytes;
use compressor_core::{make_item_id, ItemStack, Variant};

/// One item of `label`, variant 0.
pub fn item(label: &str) -> ItemStack {
    ItemStack::of(make_item_id(label))
}

/// One item of `label` with an exact variant.
pub fn item_variant(label: &str, variant: u16) -> ItemStack {
    ItemStack::new(make_item_id(label), Variant::Exact(variant), 1)
}

/// One item of `label` accepting every variant.
pub fn wildcard(label: &str) -> ItemStack {
    ItemStack::new(make_item_id(label), Variant::Any, 1)
}

/// One item of `label` carrying `metadata` as extended data.
pub fn tagged(label: &str, metadata: &'static [u8]) -> ItemStack {
    item(label).with_metadata(Bytes::from_static(metadata))
}
