//! # Requests and Results
//!
//! The core never performs I/O. When a transition needs server data,
//! `update()` returns an [`ApiRequest`] describing *what* to fetch or
//! change; the adapter executes it and feeds the [`Payload`] (or the
//! [`ErrorDetail`](super::error::ErrorDetail)) back as an action tagged
//! with the same [`RequestId`].

use std::fmt;

use super::model::{Recipe, RecipeDraft, RecipeId, RecipeList};

/// Identity of one issued request. Monotonic within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestKind {
    /// GET a collection page. `None` is the first page.
    FetchPage { cursor: Option<String> },
    /// GET a single recipe.
    FetchRecipe(RecipeId),
    /// POST a new recipe.
    Create(RecipeDraft),
    /// PUT the editable fields of an existing recipe.
    Update { id: RecipeId, draft: RecipeDraft },
    /// DELETE a recipe.
    Delete(RecipeId),
}

impl RequestKind {
    /// Short description for logs and the busy indicator.
    pub fn describe(&self) -> String {
        match self {
            RequestKind::FetchPage { cursor: None } => "Loading recipes".to_string(),
            RequestKind::FetchPage { cursor: Some(_) } => "Loading page".to_string(),
            RequestKind::FetchRecipe(id) => format!("Loading recipe {id}"),
            RequestKind::Create(_) => "Creating recipe".to_string(),
            RequestKind::Update { id, .. } => format!("Saving recipe {id}"),
            RequestKind::Delete(id) => format!("Deleting recipe {id}"),
        }
    }
}

/// A request the adapter must run, tagged for correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub id: RequestId,
    pub kind: RequestKind,
}

/// Successful, already-mapped result of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Page(RecipeList),
    Recipe(Recipe),
    Created,
    /// The server may echo the updated resource; `None` means it did not.
    Updated(Option<Recipe>),
    Deleted,
}
