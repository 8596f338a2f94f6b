use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
};
use tracing::debug;

use crate::{app::AppState, error::AppError, routing::Backend};

mod client;
pub mod headers;
mod upstream;

pub use client::CLIENT;
pub use headers::{outbound_headers, passthrough_headers};
pub use upstream::{HttpUpstream, OutboundRequest, Upstream};

/// Resolves the route for an inbound request and builds the request the
/// selected backend will receive. Fails before touching the body when the
/// path matches no route or the backend origin is unset.
pub async fn prepare(
    state: &AppState,
    request: Request<Body>,
) -> Result<(Backend, OutboundRequest), AppError> {
    let path = request.uri().path();
    let decision = state.routes.resolve(path).ok_or(AppError::RouteNotFound)?;

    let origin = state
        .backends
        .origin(decision.backend)
        .ok_or(AppError::BackendNotConfigured(decision.backend))?;

    let query = request
        .uri()
        .query()
        .filter(|q| !q.is_empty())
        .map(|q| format!("?{}", q))
        .unwrap_or_default();
    let url = format!("{}{}{}", origin, decision.path, query);
    debug!(
        backend = %decision.backend,
        from = %path,
        url = %url,
        "Rewrote request path"
    );

    let method = request.method().clone();
    let headers = outbound_headers(request.headers());

    let body = if method == Method::GET || method == Method::HEAD {
        None
    } else {
        Some(to_bytes(request.into_body(), usize::MAX).await?)
    };

    Ok((
        decision.backend,
        OutboundRequest {
            method,
            url,
            headers,
            body,
        },
    ))
}
