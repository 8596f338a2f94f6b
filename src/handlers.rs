use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, Response},
    response::IntoResponse,
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};

use crate::{
    app::AppState,
    cors,
    error::AppError,
    proxy,
    routing::Backend,
    telemetry::{self, Outcome},
};

/// Single entry point for every path and method.
pub async fn edge_request(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
) -> Response<Body> {
    let start = Instant::now();

    if request.method() == Method::OPTIONS {
        let response = cors::preflight_response();
        telemetry::record(Outcome::Preflight, None, 200, start.elapsed());
        return response;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let (response, outcome, backend) = match forward(&state, request).await {
        Ok((backend, response)) => (response, Outcome::Forwarded, Some(backend)),
        Err((backend, e)) => {
            match &e {
                AppError::RouteNotFound => {
                    info!(method = %method, path = %path, "No route for request")
                }
                AppError::BackendNotConfigured(backend) => {
                    warn!(backend = %backend, path = %path, "Backend origin not configured")
                }
                other => error!(
                    method = %method,
                    path = %path,
                    upstream = state.upstream.name(),
                    "Proxy error: {}",
                    other
                ),
            }
            let outcome = e.outcome();
            (e.into_response(), outcome, backend)
        }
    };

    telemetry::record(outcome, backend, response.status().as_u16(), start.elapsed());
    response
}

async fn forward(
    state: &AppState,
    request: Request<Body>,
) -> Result<(Backend, Response<Body>), (Option<Backend>, AppError)> {
    let (backend, outbound) = proxy::prepare(state, request)
        .await
        .map_err(|e| (None, e))?;

    let response = state
        .upstream
        .send(outbound)
        .await
        .map_err(|e| (Some(backend), e))?;

    Ok((backend, response))
}
