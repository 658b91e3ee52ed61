use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::api::AppState;
use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Flat allow list of API keys.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    keys: Arc<HashSet<String>>,
}

impl ApiKeys {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: Arc::new(keys.into_iter().map(Into::into).collect()),
        }
    }

    pub fn check(&self, api_key: Option<&str>) -> Result<(), ApiError> {
        match api_key {
            Some(key) if self.keys.contains(key) => Ok(()),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Rejects requests whose `x-api-key` header is missing or unknown.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Err(err) = state.api_keys.check(extract_api_key(request.headers())) {
        debug!(path = %request.uri().path(), "api key rejected");
        return Err(err);
    }
    Ok(next.run(request).await)
}
