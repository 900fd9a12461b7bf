// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serde shapes of the recipe book document.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BookIr {
    #[serde(default)]
    pub recipes: Vec<RecipeIr>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum RecipeIr {
    Shaped {
        #[serde(default)]
        name: Option<String>,
        pattern: Vec<String>,
        key: BTreeMap<String, IngredientIr>,
        result: ItemRefIr,
        #[serde(default = "mirrored_default")]
        mirrored: bool,
    },
    Shapeless {
        #[serde(default)]
        name: Option<String>,
        ingredients: Vec<IngredientIr>,
        result: ItemRefIr,
    },
}

fn mirrored_default() -> bool {
    true
}

/// One item reference, or a list of alternatives.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum IngredientIr {
    One(ItemRefIr),
    Any(Vec<ItemRefIr>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ItemRefIr {
    pub item: String,
    #[serde(default)]
    pub variant: Option<VariantIr>,
    #[serde(default)]
    pub count: Option<u32>,
    /// Extended data, stored as the UTF-8 bytes of the string.
    #[serde(default)]
    pub metadata: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum VariantIr {
    Exact(u16),
    Text(String),
}
