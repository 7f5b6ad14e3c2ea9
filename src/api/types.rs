//! Wire shapes accepted from and sent to the recipe service.
//!
//! These mirror JSON loosely: anything optional on the wire is `Option` or
//! defaulted here, and the [`mapper`](super::mapper) decides what is
//! required. Hypermedia (`@controls`, `@error`) is read where it carries
//! data the client needs, never used to drive navigation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recipe object as the service returns it.
#[derive(Deserialize, Debug, Default)]
pub struct WireRecipe {
    #[serde(default)]
    pub id: Option<Value>,
    /// Mason-style id; `id` wins when both are present.
    #[serde(default)]
    pub recipe_id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Option<WireLines>,
    /// Ingredient rows in object form; used when `ingredients` is absent.
    #[serde(default, rename = "recipeIngredients")]
    pub recipe_ingredients: Option<WireLines>,
    #[serde(default)]
    pub steps: Option<WireLines>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Kept raw; entries that are not reviews are skipped by the mapper.
    #[serde(default)]
    pub reviews: Option<Value>,
    /// Everything else: scalar extras become metadata.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A list-valued field: either a JSON array or one newline-separated string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WireLines {
    List(Vec<Value>),
    Text(String),
}

/// One page of the recipe collection.
#[derive(Deserialize, Debug, Default)]
pub struct WireCollection {
    /// Kept raw so one bad item cannot fail the whole page.
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default, alias = "previous")]
    pub prev: Option<String>,
    #[serde(default, rename = "@controls")]
    pub controls: Option<WireControls>,
}

#[derive(Deserialize, Debug, Default)]
pub struct WireControls {
    #[serde(default)]
    pub next: Option<WireLink>,
    #[serde(default, alias = "previous")]
    pub prev: Option<WireLink>,
}

#[derive(Deserialize, Debug)]
pub struct WireLink {
    pub href: String,
}

/// Error body accompanying a non-2xx status.
#[derive(Deserialize, Debug, Default)]
pub struct WireError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, rename = "@error")]
    pub mason: Option<WireMasonError>,
}

#[derive(Deserialize, Debug, Default)]
pub struct WireMasonError {
    #[serde(default, rename = "@message")]
    pub message: Option<String>,
    #[serde(default, rename = "@messages")]
    pub messages: Vec<String>,
}

/// Body of a create or update request. `id` is only present on update.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecipeBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}
