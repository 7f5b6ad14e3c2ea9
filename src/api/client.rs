//! Executes core [`RequestKind`]s against the recipe service.
//!
//! Path building lives here; the transport only knows methods and paths,
//! the mapper only knows JSON. The result is always either a [`Payload`]
//! or an [`ErrorDetail`], never a raw transport error.

use std::sync::Arc;

use log::{info, warn};
use serde_json::Value;

use super::mapper;
use super::transport::{Method, Transport, TransportFailure, is_absolute_url};
use crate::core::error::ErrorDetail;
use crate::core::model::{RecipeId, RecipeList};
use crate::core::request::{Payload, RequestKind};

pub struct RecipeClient {
    transport: Arc<dyn Transport>,
    collection: String,
}

impl RecipeClient {
    pub fn new(transport: Arc<dyn Transport>, collection_path: &str) -> Self {
        let trimmed = collection_path.trim_end_matches('/');
        Self {
            transport,
            collection: format!("{trimmed}/"),
        }
    }

    /// Path of the collection, always with a trailing slash.
    pub fn collection_path(&self) -> &str {
        &self.collection
    }

    pub fn recipe_path(&self, id: &RecipeId) -> String {
        format!("{}{}/", self.collection, id.as_str())
    }

    /// Where a pagination cursor points. Links are followed verbatim; opaque
    /// tokens go back to the collection as `?cursor=`.
    pub fn page_path(&self, cursor: Option<&str>) -> String {
        match cursor {
            None => self.collection.clone(),
            Some(c) if c.starts_with('/') || is_absolute_url(c) => c.to_string(),
            Some(token) => format!("{}?cursor={}", self.collection, urlencoding::encode(token)),
        }
    }

    pub async fn fetch_page(&self, cursor: Option<&str>) -> Result<RecipeList, ErrorDetail> {
        let body = self
            .send(Method::Get, &self.page_path(cursor), None)
            .await?
            .ok_or_else(|| ErrorDetail::malformed("empty collection response"))?;
        let page = mapper::decode_page(&body)?;
        info!(
            "Fetched page: {} recipes, {} dropped, next={:?}",
            page.len(),
            page.dropped,
            page.next
        );
        Ok(page)
    }

    pub async fn execute(&self, kind: &RequestKind) -> Result<Payload, ErrorDetail> {
        match kind {
            RequestKind::FetchPage { cursor } => self.fetch_page(cursor.as_deref()).await.map(Payload::Page),
            RequestKind::FetchRecipe(id) => {
                let body = self
                    .send(Method::Get, &self.recipe_path(id), None)
                    .await?
                    .ok_or_else(|| ErrorDetail::malformed(format!("empty body for recipe {id}")))?;
                mapper::decode_recipe(&body).map(Payload::Recipe)
            }
            RequestKind::Create(draft) => {
                let body = mapper::encode_create(draft);
                self.send(Method::Post, &self.collection, Some(&body)).await?;
                Ok(Payload::Created)
            }
            RequestKind::Update { id, draft } => {
                let body = mapper::encode_update(id, draft);
                let echoed = self.send(Method::Put, &self.recipe_path(id), Some(&body)).await?;
                // Servers commonly answer 204; an echo that does not decode is ignored.
                Ok(Payload::Updated(
                    echoed.and_then(|value| mapper::decode_recipe(&value).ok()),
                ))
            }
            RequestKind::Delete(id) => {
                self.send(Method::Delete, &self.recipe_path(id), None).await?;
                Ok(Payload::Deleted)
            }
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ErrorDetail> {
        let response = self
            .transport
            .request(method, path, body)
            .await
            .map_err(network_error)?;
        let status = response.status;
        mapper::classify(response).inspect_err(|e| {
            warn!("{} {} failed with {}: {}", method.as_str(), path, status, e);
        })
    }
}

fn network_error(failure: TransportFailure) -> ErrorDetail {
    warn!("Transport failure: {failure}");
    ErrorDetail::network(failure.to_string())
}
