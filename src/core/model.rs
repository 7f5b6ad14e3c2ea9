//! # Domain Model
//!
//! The in-memory shapes of server resources. Everything here is owned by
//! the server: the client only ever holds copies it fetched.
//!
//! ```text
//! RecipeList (one page)
//! ├── items: Vec<RecipeSummary>   // id + title only
//! ├── next / prev                 // opaque pagination cursors
//! └── dropped                     // malformed entries skipped while decoding
//!
//! Recipe (one resource)
//! ├── id: RecipeId                // server-assigned, never edited
//! ├── title, ingredients, steps   // editable through the form
//! ├── metadata                    // author, date, ... (read-only)
//! └── reviews                     // rating + feedback (read-only)
//! ```

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Server-assigned identifier.
///
/// Servers disagree on whether ids are strings or integers. The original
/// JSON flavour is remembered so an update sends the id back exactly as it
/// arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeId {
    text: String,
    numeric: bool,
}

impl RecipeId {
    /// Builds an id from a JSON value. Only non-empty strings and integers qualify.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self {
                text: s.clone(),
                numeric: false,
            }),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(Self {
                text: n.to_string(),
                numeric: true,
            }),
            _ => None,
        }
    }

    /// The id as it should appear on the wire.
    pub fn to_json(&self) -> Value {
        if self.numeric
            && let Ok(n) = self.text.parse::<i64>()
        {
            return Value::from(n);
        }
        Value::String(self.text.clone())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        Self {
            text: s.to_string(),
            numeric: false,
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A full recipe as returned by the single-resource endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub metadata: BTreeMap<String, String>,
    pub reviews: Vec<Review>,
}

/// A review attached to a recipe. Shown, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: Option<String>,
    pub rating: Option<String>,
    pub feedback: String,
}

impl Review {
    /// One-line rendering: `4 stars: Lovely`, or just the feedback.
    pub fn summary(&self) -> String {
        match (&self.rating, self.feedback.is_empty()) {
            (Some(rating), true) => format!("{rating} stars"),
            (Some(rating), false) => format!("{rating} stars: {}", self.feedback),
            (None, _) => self.feedback.clone(),
        }
    }
}

/// What a collection page shows for each recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
}

/// One fetched page of the recipe collection. Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeList {
    pub items: Vec<RecipeSummary>,
    pub next: Option<String>,
    pub prev: Option<String>,
    /// Entries skipped because they lacked an id or title.
    pub dropped: usize,
}

impl RecipeList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// The editable subset of a recipe: what create and update requests carry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
        }
    }
}
