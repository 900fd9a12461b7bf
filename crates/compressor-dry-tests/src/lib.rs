// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for compressor crates.
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`items`] - Item stack shorthands (plain, variant, tagged)
//! - [`recipes`] - Synthetic host rules and a call-counting wrapper
#![forbid(unsafe_code)]

pub mod config;
pub mod items;
pub mod recipes;

// Re-export commonly used items at crate root for convenience
pub use config::InMemoryConfigStore;
pub use items::{item, item_variant, tagged, wildcard};
pub use recipes::{CallCounts, CountingRecipe, SyntheticRecipe, SyntheticRecipeBuilder};
