//! Standalone CORS-forwarding proxy.
//!
//! Every request, whatever its method or path, is relayed to a fixed backend
//! origin and the backend's JSON body and status come back unchanged. Preflight
//! `OPTIONS` requests are answered locally with an empty 200. A fixed set of
//! permissive CORS headers is attached to every response.
//!
//! Upstream failures are logged and reported to the client only as
//! `{"error": "Proxy error"}`.

pub mod cors;
pub mod forward;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{ConfigError, ProxyConfig};
use crate::http::error::ApiError;

pub const PROXY_ERROR: &str = "Proxy error";

/// Why forwarding failed. Never shown to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    #[error("upstream body is not JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Shared proxy state.
#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    /// Backend origin with no trailing slash.
    pub backend_origin: Arc<str>,
    pub allowed_origin: HeaderValue,
}

impl ProxyState {
    pub fn new(config: &ProxyConfig) -> Result<Self, ProxyError> {
        config.validate()?;
        let allowed_origin =
            HeaderValue::from_str(&config.allowed_origin).map_err(|_| ConfigError::InvalidValue {
                key: "allowed_origin",
                expected: "a valid header value",
                value: config.allowed_origin.clone(),
            })?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(ProxyError::Client)?;

        Ok(Self {
            client,
            backend_origin: Arc::from(config.backend_origin()),
            allowed_origin,
        })
    }
}

/// Fallback handler for every proxied request.
pub async fn proxy_request(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    match forward::forward(&state, method, &uri, &headers, body).await {
        Ok((status, json)) => (status, Json(json)).into_response(),
        Err(e) => {
            warn!(error = %e, path = %uri.path(), "Proxy error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(PROXY_ERROR)),
            )
                .into_response()
        }
    }
}

/// Router that forwards everything and stamps CORS headers on the way out.
pub fn create_proxy_router(state: ProxyState) -> Router {
    Router::new()
        .fallback(proxy_request)
        .layer(middleware::map_response_with_state(
            state.clone(),
            cors::add_cors_headers,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
