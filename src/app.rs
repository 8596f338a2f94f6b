use axum::{middleware::map_response, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    config::{AppConfig, BackendOrigins},
    cors,
    error::AppError,
    handlers,
    proxy::{HttpUpstream, Upstream},
    routing::RouteTable,
};

/// Read-only state shared by every request.
pub struct AppState {
    pub backends: BackendOrigins,
    pub routes: RouteTable,
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(backends: BackendOrigins, routes: RouteTable, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            backends,
            routes,
            upstream,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let upstream = match config.upstream_timeout {
            Some(timeout) => HttpUpstream::with_timeout(timeout)?,
            None => HttpUpstream::new(),
        };

        Ok(Self::new(
            config.backends.clone(),
            RouteTable::new(config.ui_prefix.clone()),
            Arc::new(upstream),
        ))
    }
}

/// Every path and method lands on the one fallback handler; classification
/// happens in [`RouteTable`], not in axum's router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::edge_request)
        .with_state(Arc::new(state))
        .layer(map_response(cors::annotate))
        .layer(TraceLayer::new_for_http())
}
