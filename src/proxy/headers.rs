use axum::http::{
    header::{
        AUTHORIZATION, CONNECTION, CONTENT_TYPE, PROXY_AUTHENTICATE, PROXY_AUTHORIZATION, TE,
        TRAILER, TRANSFER_ENCODING, UPGRADE,
    },
    HeaderMap, HeaderName, HeaderValue,
};
use tracing::debug;

pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// Credentials copied to the backend only when the caller sent them.
pub static FORWARDED_HEADERS: [HeaderName; 2] = [AUTHORIZATION, X_API_KEY];

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

static HOP_BY_HOP: [HeaderName; 7] = [
    CONNECTION,
    TRANSFER_ENCODING,
    TE,
    TRAILER,
    UPGRADE,
    PROXY_AUTHORIZATION,
    PROXY_AUTHENTICATE,
];

/// Builds the outbound header set. Nothing outside the allowlist is copied and
/// nothing absent from the inbound request is synthesized, except the
/// `Content-Type` fallback.
pub fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(FORWARDED_HEADERS.len() + 1);

    let content_type = inbound
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    headers.insert(CONTENT_TYPE, content_type);

    for name in &FORWARDED_HEADERS {
        if let Some(value) = inbound.get(name) {
            debug!(header = %name, "Forwarding header");
            headers.insert(name.clone(), value.clone());
        }
    }

    headers
}

/// Copies backend response headers, minus the hop-by-hop ones the server
/// connection manages itself.
pub fn passthrough_headers(backend: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(backend.len());
    for (name, value) in backend {
        if HOP_BY_HOP.contains(name) || name.as_str() == "keep-alive" {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}
