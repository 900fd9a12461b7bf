// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON recipe books: a reference host for the compressed-recipe registry.
//!
//! A [`RecipeBook`] parses shaped and shapeless crafting rules, each of which
//! implements [`compressor_core::GenericRecipe`], so a book can be handed
//! straight to [`compressor_core::CompressionRegistry::reload`]:
//!
//! ```
//! use compressor_core::{make_item_id, CompressionRegistry, ItemStack};
//! use compressor_recipes::RecipeBook;
//!
//! let book = RecipeBook::from_json(r####"{
//!     "recipes": [{
//!         "type": "shaped",
//!         "pattern": ["###", "###", "###"],
//!         "key": { "#": { "item": "cobblestone" } },
//!         "result": { "item": "compressed_cobblestone" }
//!     }]
//! }"####).unwrap();
//!
//! let mut registry = CompressionRegistry::new();
//! registry.reload(book.recipes());
//! let cobble = ItemStack::of(make_item_id("cobblestone"));
//! assert_eq!(registry.lookup(&cobble).unwrap().source().count, 9);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod book;
mod error;
mod ir;
mod names;
mod shaped;
mod shapeless;

pub use book::{BookRecipe, RecipeBook};
pub use error::RecipeBookError;
pub use names::ItemNames;
pub use shaped::ShapedRecipe;
pub use shapeless::ShapelessRecipe;
