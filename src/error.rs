use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{routing::Backend, telemetry::Outcome};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    RouteNotFound,

    #[error("{0} backend is not configured")]
    BackendNotConfigured(Backend),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to read request body: {0}")]
    RequestBody(#[from] axum::Error),

    #[error("{0}")]
    Unavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::BackendNotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Transport(_)
            | AppError::RequestBody(_)
            | AppError::Unavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            AppError::RouteNotFound => Outcome::NotFound,
            AppError::BackendNotConfigured(_) => Outcome::NotConfigured,
            _ => Outcome::Unavailable,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::RouteNotFound => ErrorBody {
                error: "Not found",
                details: None,
            },
            AppError::BackendNotConfigured(_) => ErrorBody {
                error: "Backend not configured",
                details: None,
            },
            other => ErrorBody {
                error: "Backend unavailable",
                details: Some(other.to_string()),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}
