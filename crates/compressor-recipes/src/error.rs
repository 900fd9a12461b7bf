// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised while loading a recipe book.

use thiserror::Error;

/// Reasons a recipe book cannot be loaded.
#[derive(Debug, Error)]
pub enum RecipeBookError {
    /// The document is not valid JSON or does not have the book's shape.
    #[error("invalid recipe book JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The book file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A shaped pattern holds no non-blank cell.
    #[error("recipe `{recipe}`: pattern is empty")]
    EmptyPattern {
        /// Recipe name.
        recipe: String,
    },
    /// Pattern rows differ in length.
    #[error("recipe `{recipe}`: pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        /// Recipe name.
        recipe: String,
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A pattern uses a symbol the key does not define.
    #[error("recipe `{recipe}`: pattern symbol `{symbol}` is not defined in the key")]
    UndefinedSymbol {
        /// Recipe name.
        recipe: String,
        /// The undefined symbol.
        symbol: char,
    },
    /// A key entry is not a single non-space character.
    #[error("recipe `{recipe}`: key `{key}` must be a single non-space character")]
    InvalidKey {
        /// Recipe name.
        recipe: String,
        /// The offending key.
        key: String,
    },
    /// A shapeless recipe declares no ingredients.
    #[error("recipe `{recipe}`: shapeless recipe has no ingredients")]
    EmptyIngredients {
        /// Recipe name.
        recipe: String,
    },
    /// An ingredient is an empty list of alternatives.
    #[error("recipe `{recipe}`: ingredient lists no alternatives")]
    EmptyAlternatives {
        /// Recipe name.
        recipe: String,
    },
    /// A variant is neither a number nor `"*"`.
    #[error("recipe `{recipe}`: variant `{variant}` is neither a number nor \"*\"")]
    InvalidVariant {
        /// Recipe name.
        recipe: String,
        /// The offending variant text.
        variant: String,
    },
}
