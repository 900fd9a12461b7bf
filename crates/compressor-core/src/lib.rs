// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! compressor-core: compressed-recipe mining and lookup.
//!
//! A host hands over its crafting rules as [`GenericRecipe`] objects. On
//! [`CompressionRegistry::reload`] every rule declared for 4 or 9 cells is
//! probed with synthetic grids filled with a single item; rules that accept
//! such a grid are "N identical inputs → one output" compressions and are
//! recorded as [`CompressedRecipe`]s. [`CompressionRegistry::lookup`] then
//! answers, per item identity, whether a compressed form exists.
//!
//! # Absence Semantics
//!
//! Nothing here fails. A rule without a probe, a rejected grid, a missing
//! output, a metadata-bearing item: all are `None` or a skip, never an error.
//! The only fallible surface is the config port ([`ConfigError`]).
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod config;
mod grid;
mod host;
mod ident;
mod item;
mod miner;
mod recipe;
mod registry;
mod shared;

/// Registry configuration and its storage port.
pub use config::{ConfigError, ConfigService, ConfigStore, RegistryConfig, REGISTRY_CONFIG_KEY};
/// Crafting grids and synthetic probe grids.
pub use grid::{CraftingGrid, FillMode, SyntheticGrid};
/// Host rule capability interface.
pub use host::{probe_candidates, GenericRecipe};
/// Item identifiers and the cache identity key.
pub use ident::{make_item_id, Hash, ItemId, ItemKey, Variant};
/// Item stacks and ingredient slots.
pub use item::{Ingredient, ItemStack};
/// Mining pass and its report.
pub use miner::{MiningReport, RecipeMiner};
/// Derived recipes and their tables.
pub use recipe::{CompressedRecipe, GridSize, RecipeTables};
/// Single-owner lookup engine.
pub use registry::{CompressionRegistry, LookupStats};
/// Lock-protected engine handle.
pub use shared::SharedRegistry;
