//! Fixed cross-origin headers attached to every proxy response.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};

use super::ProxyState;

pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Insert the full CORS header set for `origin`.
pub fn insert_cors_headers(headers: &mut HeaderMap, origin: &HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}

/// Response mapper applied to the whole proxy router.
pub async fn add_cors_headers(State(state): State<ProxyState>, mut response: Response) -> Response {
    insert_cors_headers(response.headers_mut(), &state.allowed_origin);
    response
}
