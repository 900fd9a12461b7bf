// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Loading recipe books from JSON.

use std::collections::BTreeMap;
use std::path::Path;

use bytes::Bytes;
use compressor_core::{CraftingGrid, GenericRecipe, Ingredient, ItemStack, Variant};
use tracing::{debug, instrument};

use crate::error::RecipeBookError;
use crate::ir::{BookIr, IngredientIr, ItemRefIr, RecipeIr, VariantIr};
use crate::names::ItemNames;
use crate::shaped::ShapedRecipe;
use crate::shapeless::ShapelessRecipe;

/// One rule from a recipe book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookRecipe {
    /// Positional pattern.
    Shaped(ShapedRecipe),
    /// Unordered ingredient bag.
    Shapeless(ShapelessRecipe),
}

impl BookRecipe {
    /// Declared output.
    pub fn result(&self) -> &ItemStack {
        match self {
            Self::Shaped(r) => r.result(),
            Self::Shapeless(r) => r.result(),
        }
    }
}

impl GenericRecipe for BookRecipe {
    fn arity(&self) -> usize {
        match self {
            Self::Shaped(r) => r.arity(),
            Self::Shapeless(r) => r.arity(),
        }
    }

    fn matches(&self, grid: &CraftingGrid) -> bool {
        match self {
            Self::Shaped(r) => r.matches(grid),
            Self::Shapeless(r) => r.matches(grid),
        }
    }

    fn crafting_result(&self, grid: &CraftingGrid) -> Option<ItemStack> {
        match self {
            Self::Shaped(r) => r.crafting_result(grid),
            Self::Shapeless(r) => r.crafting_result(grid),
        }
    }

    fn ingredients(&self) -> &[Ingredient] {
        match self {
            Self::Shaped(r) => r.ingredients(),
            Self::Shapeless(r) => r.ingredients(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Shaped(r) => r.name(),
            Self::Shapeless(r) => r.name(),
        }
    }
}

/// Parsed recipe book: rules in document order plus the labels they use.
#[derive(Clone, Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<BookRecipe>,
    names: ItemNames,
}

impl RecipeBook {
    /// Parses a book from JSON text.
    pub fn from_json(text: &str) -> Result<Self, RecipeBookError> {
        let ir: BookIr = serde_json::from_str(text)?;
        let mut book = Self::default();
        for (index, recipe) in ir.recipes.into_iter().enumerate() {
            let recipe = book.convert(index, recipe)?;
            book.recipes.push(recipe);
        }
        debug!(
            recipes = book.recipes.len(),
            items = book.names.len(),
            "recipe book parsed"
        );
        Ok(book)
    }

    /// Reads and parses the book at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecipeBookError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Rules in document order.
    pub fn recipes(&self) -> &[BookRecipe] {
        &self.recipes
    }

    /// First rule called `name`.
    pub fn recipe(&self, name: &str) -> Option<&BookRecipe> {
        self.recipes.iter().find(|r| r.name() == name)
    }

    /// Labels of every item the book mentions.
    pub fn names(&self) -> &ItemNames {
        &self.names
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` for a book without rules.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn convert(&mut self, index: usize, recipe: RecipeIr) -> Result<BookRecipe, RecipeBookError> {
        match recipe {
            RecipeIr::Shaped {
                name,
                pattern,
                key,
                result,
                mirrored,
            } => {
                let name = name.unwrap_or_else(|| format!("shaped#{index}"));
                let (width, height, cells) = self.pattern(&name, &pattern, key)?;
                let result = self.item_ref(&name, result)?;
                Ok(BookRecipe::Shaped(ShapedRecipe::new(
                    name, width, height, cells, result, mirrored,
                )))
            }
            RecipeIr::Shapeless {
                name,
                ingredients,
                result,
            } => {
                let name = name.unwrap_or_else(|| format!("shapeless#{index}"));
                if ingredients.is_empty() {
                    return Err(RecipeBookError::EmptyIngredients { recipe: name });
                }
                let ingredients = ingredients
                    .into_iter()
                    .map(|ir| self.ingredient(&name, ir))
                    .collect::<Result<Vec<_>, _>>()?;
                let result = self.item_ref(&name, result)?;
                Ok(BookRecipe::Shapeless(ShapelessRecipe::new(
                    name,
                    ingredients,
                    result,
                )))
            }
        }
    }

    fn pattern(
        &mut self,
        recipe: &str,
        rows: &[String],
        key: BTreeMap<String, IngredientIr>,
    ) -> Result<(usize, usize, Vec<Ingredient>), RecipeBookError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(RecipeBookError::EmptyPattern {
                recipe: recipe.to_owned(),
            });
        }

        let mut symbols = BTreeMap::new();
        for (symbol, ingredient) in key {
            let mut chars = symbol.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) if ch != ' ' => ch,
                _ => {
                    return Err(RecipeBookError::InvalidKey {
                        recipe: recipe.to_owned(),
                        key: symbol,
                    })
                }
            };
            symbols.insert(ch, self.ingredient(recipe, ingredient)?);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != width {
                return Err(RecipeBookError::RaggedPattern {
                    recipe: recipe.to_owned(),
                    row,
                    expected: width,
                    found,
                });
            }
            for symbol in text.chars() {
                if symbol == ' ' {
                    cells.push(Ingredient::Empty);
                    continue;
                }
                let slot = symbols
                    .get(&symbol)
                    .ok_or_else(|| RecipeBookError::UndefinedSymbol {
                        recipe: recipe.to_owned(),
                        symbol,
                    })?;
                cells.push(slot.clone());
            }
        }
        if cells.iter().all(Ingredient::is_empty) {
            return Err(RecipeBookError::EmptyPattern {
                recipe: recipe.to_owned(),
            });
        }
        Ok((width, rows.len(), cells))
    }

    fn ingredient(&mut self, recipe: &str, ir: IngredientIr) -> Result<Ingredient, RecipeBookError> {
        match ir {
            IngredientIr::One(item) => Ok(Ingredient::Item(self.item_ref(recipe, item)?)),
            IngredientIr::Any(items) if items.is_empty() => {
                Err(RecipeBookError::EmptyAlternatives {
                    recipe: recipe.to_owned(),
                })
            }
            IngredientIr::Any(items) => items
                .into_iter()
                .map(|item| self.item_ref(recipe, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Ingredient::Alternatives),
        }
    }

    fn item_ref(&mut self, recipe: &str, ir: ItemRefIr) -> Result<ItemStack, RecipeBookError> {
        let variant = match ir.variant {
            None => Variant::default(),
            Some(VariantIr::Exact(n)) => Variant::Exact(n),
            Some(VariantIr::Text(text)) if text == "*" => Variant::Any,
            Some(VariantIr::Text(text)) => {
                return Err(RecipeBookError::InvalidVariant {
                    recipe: recipe.to_owned(),
                    variant: text,
                })
            }
        };
        let id = self.names.register(&ir.item);
        let stack = ItemStack::new(id, variant, ir.count.unwrap_or(1));
        Ok(match ir.metadata {
            Some(metadata) => stack.with_metadata(Bytes::from(metadata)),
            None => stack,
        })
    }
}
