//! Request forwarding to the backend origin.

use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode, Uri},
};
use serde_json::Value;

use super::{ProxyError, ProxyState};

/// Headers that describe the inbound connection rather than the request and
/// are never forwarded.
const SKIPPED_HEADERS: [header::HeaderName; 10] = [
    header::HOST,
    header::CONTENT_LENGTH,
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    // The client is built without decompression, so the body must arrive plain.
    header::ACCEPT_ENCODING,
];

/// Copy of `headers` without connection-level entries.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in SKIPPED_HEADERS.iter() {
        out.remove(name);
    }
    out.remove("keep-alive");
    out
}

/// Backend URL for an inbound request: same path and query on the backend
/// origin.
pub fn target_url(backend_origin: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{}", backend_origin, path_and_query)
}

/// Send the request upstream and decode its JSON body. The body is only sent
/// for methods other than GET.
pub async fn forward(
    state: &ProxyState,
    method: Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Value), ProxyError> {
    let url = target_url(&state.backend_origin, uri);
    let send_body = method != Method::GET;

    let mut request = state
        .client
        .request(method, &url)
        .headers(forwardable_headers(headers));
    if send_body {
        request = request.body(body);
    }

    let response = request.send().await.map_err(ProxyError::Upstream)?;
    let status = response.status();
    let json = response.json::<Value>().await.map_err(ProxyError::Decode)?;
    Ok((status, json))
}
