use axum::{
    body::Body,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
        },
        HeaderMap, HeaderName, HeaderValue, Response, StatusCode,
    },
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-API-Key";

/// How long browsers may cache a preflight answer, in seconds.
pub const PREFLIGHT_MAX_AGE: &str = "86400";

static CORS_HEADERS: [(HeaderName, &str); 3] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
    (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
    (ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
];

/// Sets the fixed CORS headers, replacing whatever the backend sent.
pub fn apply(headers: &mut HeaderMap) {
    for (name, value) in &CORS_HEADERS {
        headers.insert(name.clone(), HeaderValue::from_static(*value));
    }
}

/// Empty 200 answer to a browser preflight. The routing table is never
/// consulted for these.
pub fn preflight_response() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::OK;
    let headers = response.headers_mut();
    apply(headers);
    headers.insert(
        ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
    response
}

/// Response middleware that stamps CORS headers on everything leaving the
/// router, including error bodies.
pub async fn annotate(mut response: Response<Body>) -> Response<Body> {
    apply(response.headers_mut());
    response
}
