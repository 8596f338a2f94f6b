use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Response},
};
use futures_util::StreamExt;
use std::time::Duration;
use tracing::{debug, error};

use super::{client, headers::passthrough_headers};
use crate::error::AppError;

/// A fully resolved request bound for one backend.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// `None` for GET and HEAD.
    pub body: Option<Bytes>,
}

/// Performs the single outbound round trip for a routed request. Any HTTP
/// response the backend produces is `Ok`, whatever its status.
#[async_trait]
pub trait Upstream: Send + Sync {
    fn name(&self) -> &str;

    async fn send(&self, request: OutboundRequest) -> Result<Response<Body>, AppError>;
}

pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new() -> Self {
        Self {
            client: client::CLIENT.clone(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: client::client_with_timeout(timeout)?,
        })
    }
}

impl Default for HttpUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, request: OutboundRequest) -> Result<Response<Body>, AppError> {
        let OutboundRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        Ok(into_axum_response(response))
    }
}

/// Re-wraps a backend response, streaming its body rather than buffering it.
fn into_axum_response(response: reqwest::Response) -> Response<Body> {
    let status = response.status();
    let headers = passthrough_headers(response.headers());
    debug!(status = %status, "Backend responded");

    let stream = response.bytes_stream().map(|result| {
        result.map_err(|e| {
            error!("Backend body stream error: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })
    });

    let mut proxied = Response::new(Body::from_stream(stream));
    *proxied.status_mut() = status;
    *proxied.headers_mut() = headers;
    proxied
}
