//! # Resource Model Mapper
//!
//! Pure translation between wire JSON and the domain model. No state, no
//! I/O. Decoding fails closed: a single resource missing required fields
//! becomes `MalformedResponse` instead of a half-filled `Recipe`.

use std::collections::BTreeMap;

use log::warn;
use serde_json::Value;

use super::transport::{ApiResponse, Body};
use super::types::{RecipeBody, WireCollection, WireError, WireLines, WireRecipe};
use crate::core::error::{ErrorDetail, ErrorKind};
use crate::core::model::{Recipe, RecipeDraft, RecipeId, RecipeList, RecipeSummary, Review};

/// Splits a response into a 2xx JSON body or the error it represents.
///
/// A 2xx with an empty body yields `Ok(None)`; callers that need data treat
/// that as malformed themselves.
pub fn classify(response: ApiResponse) -> Result<Option<Value>, ErrorDetail> {
    if !(200..300).contains(&response.status) {
        return Err(decode_error(response.status, &response.body));
    }
    match response.body {
        Body::Empty => Ok(None),
        Body::Json(value) => Ok(Some(value)),
        Body::Invalid(excerpt) => Err(ErrorDetail::malformed(format!(
            "response is not JSON: {excerpt}"
        ))
        .with_status(response.status)),
    }
}

/// Maps a non-2xx response to an [`ErrorDetail`], pulling a message out of
/// whichever error shape the server used.
pub fn decode_error(status: u16, body: &Body) -> ErrorDetail {
    let kind = ErrorKind::from_status(status);
    let message = match body {
        Body::Json(value) => error_message(value),
        Body::Invalid(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
    .unwrap_or_else(|| format!("HTTP {status}"));
    ErrorDetail::new(kind, message).with_status(status)
}

fn error_message(value: &Value) -> Option<String> {
    let wire: WireError = serde_json::from_value(value.clone()).ok()?;
    if let Some(mason) = wire.mason {
        let mut parts: Vec<String> = mason.message.into_iter().collect();
        parts.extend(mason.messages);
        if !parts.is_empty() {
            return Some(parts.join(": "));
        }
    }
    wire.message.or(wire.error).filter(|m| !m.trim().is_empty())
}

/// Decodes a single recipe. Missing id or title is a hard failure.
pub fn decode_recipe(value: &Value) -> Result<Recipe, ErrorDetail> {
    let wire: WireRecipe = serde_json::from_value(value.clone())
        .map_err(|e| ErrorDetail::malformed(format!("recipe body: {e}")))?;
    let id = wire
        .id
        .as_ref()
        .and_then(RecipeId::from_json)
        .or_else(|| wire.recipe_id.as_ref().and_then(RecipeId::from_json))
        .ok_or_else(|| ErrorDetail::malformed("recipe has no identifier"))?;
    let title = required_title(wire.title.as_deref())
        .ok_or_else(|| ErrorDetail::malformed(format!("recipe {id} has no title")))?;

    let mut metadata = BTreeMap::new();
    if let Some(map) = &wire.metadata {
        for (key, value) in map {
            if let Some(text) = scalar_text(value) {
                metadata.insert(key.clone(), text);
            }
        }
    }
    for (key, value) in &wire.extra {
        if key.starts_with('@') {
            continue;
        }
        if let Some(text) = scalar_text(value) {
            metadata.entry(key.clone()).or_insert(text);
        }
    }

    Ok(Recipe {
        id,
        title,
        ingredients: lines(wire.ingredients.or(wire.recipe_ingredients)),
        steps: lines(wire.steps),
        metadata,
        reviews: wire.reviews.as_ref().map(reviews).unwrap_or_default(),
    })
}

/// Decodes one collection page, dropping items without an id or title.
pub fn decode_page(value: &Value) -> Result<RecipeList, ErrorDetail> {
    let wire: WireCollection = serde_json::from_value(value.clone())
        .map_err(|e| ErrorDetail::malformed(format!("collection body: {e}")))?;

    let mut items = Vec::with_capacity(wire.items.len());
    let mut dropped = 0;
    for (index, item) in wire.items.iter().enumerate() {
        match decode_summary(item) {
            Some(summary) => items.push(summary),
            None => {
                warn!("Dropping collection item {index}: missing id or title");
                dropped += 1;
            }
        }
    }

    let controls = wire.controls.unwrap_or_default();
    Ok(RecipeList {
        items,
        next: wire.next.or(controls.next.map(|link| link.href)),
        prev: wire.prev.or(controls.prev.map(|link| link.href)),
        dropped,
    })
}

fn decode_summary(item: &Value) -> Option<RecipeSummary> {
    let object = item.as_object()?;
    let id = object
        .get("id")
        .and_then(RecipeId::from_json)
        .or_else(|| object.get("recipe_id").and_then(RecipeId::from_json))?;
    let title = required_title(object.get("title")?.as_str())?;
    Some(RecipeSummary { id, title })
}

fn required_title(title: Option<&str>) -> Option<String> {
    title.filter(|t| !t.trim().is_empty()).map(str::to_string)
}

fn lines(field: Option<WireLines>) -> Vec<String> {
    match field {
        None => Vec::new(),
        Some(WireLines::Text(text)) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Some(WireLines::List(values)) => values.iter().filter_map(line_text).collect(),
    }
}

/// One list entry as display text. Objects are ingredient rows of the form
/// `{name|ingredient_id, qty, metric}`.
fn line_text(value: &Value) -> Option<String> {
    if let Some(text) = scalar_text(value) {
        return Some(text);
    }
    let object = value.as_object()?;
    let name = object
        .get("name")
        .or_else(|| object.get("ingredient_id"))
        .and_then(scalar_text)?;
    let qty = object.get("qty").and_then(scalar_text).unwrap_or_default();
    let metric = object.get("metric").and_then(scalar_text).unwrap_or_default();
    let amount = format!("{qty}{metric}");
    Some(if amount.is_empty() {
        name
    } else {
        format!("{name} ({amount})")
    })
}

/// Reviews as `{review_id|id, rating, feedback}` objects or bare strings.
/// Entries with neither rating nor feedback are skipped.
fn reviews(value: &Value) -> Vec<Review> {
    let Some(entries) = value.as_array() else {
        warn!("Ignoring reviews: expected an array");
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            if let Value::String(text) = entry {
                return (!text.trim().is_empty()).then(|| Review {
                    id: None,
                    rating: None,
                    feedback: text.trim().to_string(),
                });
            }
            let object = entry.as_object()?;
            let rating = object.get("rating").and_then(scalar_text);
            let feedback = object
                .get("feedback")
                .and_then(scalar_text)
                .map(|text| text.trim().to_string())
                .unwrap_or_default();
            if rating.is_none() && feedback.is_empty() {
                return None;
            }
            Some(Review {
                id: object
                    .get("review_id")
                    .or_else(|| object.get("id"))
                    .and_then(scalar_text),
                rating,
                feedback,
            })
        })
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Body for `POST` on the collection. Never carries an id.
pub fn encode_create(draft: &RecipeDraft) -> Value {
    body_value(RecipeBody {
        id: None,
        title: draft.title.clone(),
        ingredients: draft.ingredients.clone(),
        steps: draft.steps.clone(),
    })
}

/// Body for `PUT` on a recipe. The id goes back exactly as it arrived.
pub fn encode_update(id: &RecipeId, draft: &RecipeDraft) -> Value {
    body_value(RecipeBody {
        id: Some(id.to_json()),
        title: draft.title.clone(),
        ingredients: draft.ingredients.clone(),
        steps: draft.steps.clone(),
    })
}

fn body_value(body: RecipeBody) -> Value {
    // Only strings and string vectors: serialization cannot fail.
    serde_json::to_value(body).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_recipe_full() {
        let recipe = decode_recipe(&json!({
            "id": "7",
            "title": "Pancakes",
            "ingredients": ["flour", "milk"],
            "steps": ["mix", "fry"],
            "metadata": {"author": "ann", "date": "2024-01-02"}
        }))
        .unwrap();
        assert_eq!(recipe.id.as_str(), "7");
        assert_eq!(recipe.ingredients, vec!["flour", "milk"]);
        assert_eq!(recipe.steps, vec!["mix", "fry"]);
        assert_eq!(recipe.metadata.get("author").map(String::as_str), Some("ann"));
    }

    #[test]
    fn test_decode_recipe_mason_shape() {
        let recipe = decode_recipe(&json!({
            "recipe_id": 3,
            "title": "Soup",
            "steps": "boil water\n\nadd salt\n",
            "recipeIngredients": [{"ingredient_id": 4, "qty": 200, "metric": "g"}],
            "author": "bob",
            "servings": 2,
            "@controls": {"self": {"href": "/api/recipes/3/"}}
        }))
        .unwrap();
        assert_eq!(recipe.id.to_json(), json!(3));
        assert_eq!(recipe.steps, vec!["boil water", "add salt"]);
        assert_eq!(recipe.ingredients, vec!["4 (200g)"]);
        assert_eq!(recipe.metadata.get("servings").map(String::as_str), Some("2"));
        assert!(!recipe.metadata.contains_key("@controls"));
    }

    #[test]
    fn test_decode_recipe_with_both_id_spellings() {
        let recipe = decode_recipe(&json!({"id": 3, "recipe_id": 8, "title": "Soup"})).unwrap();
        assert_eq!(recipe.id.to_json(), json!(3));

        let recipe = decode_recipe(&json!({"id": null, "recipe_id": 8, "title": "Soup"})).unwrap();
        assert_eq!(recipe.id.to_json(), json!(8));

        let summary = decode_summary(&json!({"id": null, "recipe_id": 8, "title": "Soup"})).unwrap();
        assert_eq!(summary.id, recipe.id);
    }

    #[test]
    fn test_plain_ingredients_win_over_ingredient_rows() {
        let recipe = decode_recipe(&json!({
            "id": "5",
            "title": "Bread",
            "ingredients": ["flour", "yeast"],
            "recipeIngredients": [{"ingredient_id": 1, "qty": 500, "metric": "g"}]
        }))
        .unwrap();
        assert_eq!(recipe.ingredients, vec!["flour", "yeast"]);
    }

    #[test]
    fn test_decode_reviews() {
        let recipe = decode_recipe(&json!({
            "id": "2",
            "title": "Soup",
            "reviews": [
                {"review_id": 11, "user_id": 4, "rating": 5, "feedback": "Lovely"},
                "Needs salt",
                {"review_id": 12},
                42
            ]
        }))
        .unwrap();
        assert_eq!(
            recipe.reviews,
            vec![
                Review {
                    id: Some("11".into()),
                    rating: Some("5".into()),
                    feedback: "Lovely".into(),
                },
                Review {
                    id: None,
                    rating: None,
                    feedback: "Needs salt".into(),
                },
            ]
        );
        assert!(!recipe.metadata.contains_key("reviews"));

        let recipe = decode_recipe(&json!({"id": "2", "title": "Soup", "reviews": "n/a"})).unwrap();
        assert!(recipe.reviews.is_empty());
    }

    #[test]
    fn test_decode_recipe_missing_title_is_malformed() {
        let err = decode_recipe(&json!({"id": "7", "steps": []})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedResponse);
        let err = decode_recipe(&json!({"title": "No id"})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedResponse);
        let err = decode_recipe(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_editable_fields_survive_decode_then_encode() {
        let wire = json!({
            "id": 12,
            "title": "Stew",
            "ingredients": ["beef", "carrot"],
            "steps": ["brown", "simmer"],
            "metadata": {"author": "cy"}
        });
        let recipe = decode_recipe(&wire).unwrap();
        let encoded = encode_update(&recipe.id, &RecipeDraft::from(&recipe));
        for field in ["id", "title", "ingredients", "steps"] {
            assert_eq!(encoded[field], wire[field], "field {field}");
        }
        assert!(encoded.get("metadata").is_none());
    }

    #[test]
    fn test_encode_create_omits_id() {
        let body = encode_create(&RecipeDraft {
            title: "Soup".into(),
            ..Default::default()
        });
        assert_eq!(body, json!({"title": "Soup", "ingredients": [], "steps": []}));
    }

    #[test]
    fn test_page_drops_item_missing_title() {
        let page = decode_page(&json!({
            "items": [
                {"id": "1", "title": "Pancakes"},
                {"id": "2"},
                {"id": "3", "title": "Soup"}
            ],
            "next": "abc"
        }))
        .unwrap();
        let titles: Vec<_> = page.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Pancakes", "Soup"]);
        assert_eq!(page.dropped, 1);
        assert_eq!(page.next.as_deref(), Some("abc"));
        assert_eq!(page.prev, None);
    }

    #[test]
    fn test_page_cursors_from_controls() {
        let page = decode_page(&json!({
            "items": [],
            "@controls": {
                "next": {"href": "/api/recipes/?page=3"},
                "prev": {"href": "/api/recipes/?page=1"}
            }
        }))
        .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.next.as_deref(), Some("/api/recipes/?page=3"));
        assert_eq!(page.prev.as_deref(), Some("/api/recipes/?page=1"));
    }

    #[test]
    fn test_page_with_wrong_items_type_is_malformed() {
        let err = decode_page(&json!({"items": "nope"})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_decode_error_shapes() {
        let err = decode_error(404, &Body::Json(json!({"message": "Recipe not found"})));
        assert_eq!(err.kind, ErrorKind::ClientError);
        assert_eq!(err.message, "Recipe not found");
        assert_eq!(err.status, Some(404));

        let err = decode_error(
            409,
            &Body::Json(json!({"@error": {"@message": "Conflict", "@messages": ["recipe in use"]}})),
        );
        assert_eq!(err.message, "Conflict: recipe in use");

        let err = decode_error(502, &Body::Empty);
        assert_eq!(err.kind, ErrorKind::ServerError);
        assert_eq!(err.message, "HTTP 502");
    }

    #[test]
    fn test_classify() {
        let ok = classify(ApiResponse {
            status: 200,
            body: Body::Json(json!({"a": 1})),
        });
        assert_eq!(ok.unwrap(), Some(json!({"a": 1})));

        let empty = classify(ApiResponse {
            status: 204,
            body: Body::Empty,
        });
        assert_eq!(empty.unwrap(), None);

        let err = classify(ApiResponse {
            status: 200,
            body: Body::Invalid("<html>".into()),
        })
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedResponse);
    }
}
