//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;

use crate::core::model::{Recipe, RecipeId, RecipeList, RecipeSummary};
use crate::core::state::App;

/// A page whose items get ids "1", "2", ... in order.
pub fn sample_page(titles: &[&str]) -> RecipeList {
    RecipeList {
        items: titles
            .iter()
            .enumerate()
            .map(|(i, title)| RecipeSummary {
                id: RecipeId::from((i + 1).to_string().as_str()),
                title: title.to_string(),
            })
            .collect(),
        next: None,
        prev: None,
        dropped: 0,
    }
}

pub fn sample_recipe(id: &str, title: &str) -> Recipe {
    Recipe {
        id: RecipeId::from(id),
        title: title.to_string(),
        ingredients: vec!["water".to_string(), "salt".to_string()],
        steps: vec!["boil".to_string()],
        metadata: BTreeMap::from([("author".to_string(), "ann".to_string())]),
        reviews: Vec::new(),
    }
}

/// Creates a test App on a two-item list.
pub fn test_app() -> App {
    App::new(sample_page(&["Pancakes", "Soup"]))
}
