//! # Transport Adapter
//!
//! One logical HTTP request per call: bounded timeout, no retries. The
//! body comes back already classified as empty, JSON, or unparseable so
//! the mapper never touches raw bytes.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::core::config::ResolvedConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    /// Non-empty body that is not JSON. Carries a short excerpt.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Body,
}

/// Failures below HTTP: nothing usable came back.
#[derive(Debug, thiserror::Error)]
pub enum TransportFailure {
    #[error("cannot reach {0}")]
    Unreachable(String),
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, TransportFailure>;
}

/// reqwest-backed transport bound to one base URL.
pub struct HttpTransport {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ResolvedConfig) -> Result<Self, TransportFailure> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&config.accept)
                .map_err(|e| TransportFailure::Transport(format!("invalid Accept header: {e}")))?,
        );
        if let Some(key) = &config.api_key {
            let name = HeaderName::from_bytes(config.api_key_header.as_bytes()).map_err(|e| {
                TransportFailure::Transport(format!("invalid credential header name: {e}"))
            })?;
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| TransportFailure::Transport(format!("invalid credential: {e}")))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(concat!("cookbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportFailure::Transport(e.to_string()))?;

        info!(
            "HTTP transport ready: base_url={}, timeout={:?}, credential={}",
            config.base_url,
            config.timeout,
            config.api_key.is_some()
        );

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            client,
        })
    }

    /// Absolute URLs pass through; anything else is joined onto the base URL.
    fn url_for(&self, path: &str) -> String {
        if is_absolute_url(path) {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> TransportFailure {
        if error.is_timeout() {
            TransportFailure::Timeout(self.timeout)
        } else if error.is_connect() {
            TransportFailure::Unreachable(url.to_string())
        } else {
            TransportFailure::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, TransportFailure> {
        let url = self.url_for(path);
        info!("{} {}", method.as_str(), url);

        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.classify(&url, e))?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| self.classify(&url, e))?;
        debug!("{} {} -> {} ({} bytes)", method.as_str(), url, status, bytes.len());

        Ok(ApiResponse {
            status,
            body: parse_body(&bytes),
        })
    }
}

const EXCERPT_LEN: usize = 200;

fn parse_body(bytes: &[u8]) -> Body {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Body::Empty;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Body::Json(value),
        Err(_) => {
            let text = String::from_utf8_lossy(bytes);
            Body::Invalid(text.chars().take(EXCERPT_LEN).collect())
        }
    }
}

/// True for `http://` and `https://` URLs, which bypass the base URL.
pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(b""), Body::Empty);
        assert_eq!(parse_body(b"  \n"), Body::Empty);
        assert_eq!(parse_body(br#"{"a":1}"#), Body::Json(json!({"a": 1})));
        assert_eq!(
            parse_body(b"<html>oops</html>"),
            Body::Invalid("<html>oops</html>".into())
        );
    }

    #[test]
    fn test_invalid_body_excerpt_is_bounded() {
        let long = "x".repeat(1000);
        match parse_body(long.as_bytes()) {
            Body::Invalid(excerpt) => assert_eq!(excerpt.len(), EXCERPT_LEN),
            other => panic!("expected invalid body, got {other:?}"),
        }
    }

    #[test]
    fn test_absolute_url_needs_scheme_separator() {
        assert!(is_absolute_url("http://host/api/recipes/?page=2"));
        assert!(is_absolute_url("https://host/x"));
        assert!(!is_absolute_url("httpbin42"));
        assert!(!is_absolute_url("/api/recipes/"));
    }
}
