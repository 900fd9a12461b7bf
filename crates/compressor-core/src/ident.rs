// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Item identifiers and the identity key used by the lookup cache.
use blake3::Hasher;

use crate::item::ItemStack;

/// Canonical 256-bit hash used for item kind identifiers.
pub type Hash = [u8; 32];

/// Strongly typed identifier for an item kind.
///
/// Ids produced by [`make_item_id`] are stable, label-derived hashes
/// (`blake3("item:" || label)`). Hosts with their own numbering may construct
/// ids directly from any 32 bytes; the only reserved value is [`ItemId::NULL`].
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ItemId(pub Hash);

impl ItemId {
    /// The null kind: what a broken third-party reference resolves to.
    ///
    /// Stacks of this kind never enter the recipe tables.
    pub const NULL: Self = Self([0; 32]);

    /// Returns the canonical byte representation of this id.
    #[must_use]
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// Returns `true` for [`ItemId::NULL`].
    pub fn is_null(&self) -> bool {
        self.0 == [0; 32]
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Produces a stable, domain‑separated item identifier (prefix `b"item:"`) using BLAKE3.
pub fn make_item_id(label: &str) -> ItemId {
    let mut hasher = Hasher::new();
    hasher.update(b"item:");
    hasher.update(label.as_bytes());
    ItemId(hasher.finalize().into())
}

/// Sub-kind selector of an item (damage value, colour, wood type, ...).
///
/// `Any` is the wildcard a recipe uses to accept every variant of a kind. It
/// is a distinct tag rather than a reserved number, so no real variant can
/// ever be mistaken for it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variant {
    /// One concrete variant.
    Exact(u16),
    /// Every variant of the kind.
    Any,
}

impl Variant {
    /// Returns `true` when a recipe declaring `self` accepts `other`.
    pub fn accepts(self, other: Self) -> bool {
        self == Self::Any || self == other
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::Exact(0)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Any => f.write_str("*"),
        }
    }
}

/// Identity of a stack for caching purposes: kind, variant and whether
/// extended metadata is attached. Quantity is not part of the identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ItemKey {
    /// Item kind.
    pub item: ItemId,
    /// Item variant.
    pub variant: Variant,
    /// Whether the stack carried extended metadata.
    pub has_metadata: bool,
}

impl ItemKey {
    /// Derives the identity key of `stack`.
    pub fn of(stack: &ItemStack) -> Self {
        Self {
            item: stack.item,
            variant: stack.variant,
            has_metadata: stack.has_metadata(),
        }
    }
}

impl From<&ItemStack> for ItemKey {
    fn from(stack: &ItemStack) -> Self {
        Self::of(stack)
    }
}
