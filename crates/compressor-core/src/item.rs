// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Item stacks and recipe ingredient slots.
use bytes::Bytes;

use crate::ident::{ItemId, Variant};

/// A quantity of one item kind/variant, optionally carrying extended
/// per-stack metadata (enchantments, custom names, ...).
///
/// Metadata is opaque to this crate; only its presence matters. An empty
/// byte string is normalised to "no metadata".
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ItemStack {
    /// Item kind.
    pub item: ItemId,
    /// Item variant.
    pub variant: Variant,
    /// Quantity.
    pub count: u32,
    metadata: Option<Bytes>,
}

impl ItemStack {
    /// Creates a stack without metadata.
    pub fn new(item: ItemId, variant: Variant, count: u32) -> Self {
        Self {
            item,
            variant,
            count,
            metadata: None,
        }
    }

    /// Creates a single item of variant 0.
    pub fn of(item: ItemId) -> Self {
        Self::new(item, Variant::default(), 1)
    }

    /// Attaches extended metadata. Empty bytes clear it.
    pub fn with_metadata(mut self, metadata: Bytes) -> Self {
        self.metadata = (!metadata.is_empty()).then_some(metadata);
        self
    }

    /// Returns a copy with `count` replaced.
    pub fn with_count(&self, count: u32) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }

    /// Extended metadata, if any.
    pub fn metadata(&self) -> Option<&Bytes> {
        self.metadata.as_ref()
    }

    /// Returns `true` when extended metadata is attached.
    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    /// Returns `true` when `self` and `other` are the same kind and the
    /// variant of `self` accepts the variant of `other`.
    pub fn accepts(&self, other: &ItemStack) -> bool {
        self.item == other.item && self.variant.accepts(other.variant)
    }
}

/// One declared input slot of a host recipe.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Ingredient {
    /// No item required.
    #[default]
    Empty,
    /// Exactly this item.
    Item(ItemStack),
    /// Any one of these items (ore-dictionary style).
    Alternatives(Vec<ItemStack>),
}

impl Ingredient {
    /// Returns `true` for slots that declare no usable item.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Item(_) => false,
            Self::Alternatives(items) => items.is_empty(),
        }
    }

    /// Returns `true` when `stack` satisfies this slot.
    pub fn accepts(&self, stack: &ItemStack) -> bool {
        match self {
            Self::Empty => false,
            Self::Item(item) => item.accepts(stack),
            Self::Alternatives(items) => items.iter().any(|item| item.accepts(stack)),
        }
    }

    /// The items this slot declares, in declaration order.
    pub fn items(&self) -> &[ItemStack] {
        match self {
            Self::Empty => &[],
            Self::Item(item) => std::slice::from_ref(item),
            Self::Alternatives(items) => items,
        }
    }
}
