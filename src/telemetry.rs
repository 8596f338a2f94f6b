//! Request counters and latency, reported through the `metrics` facade. Nothing
//! is exported unless the embedding process installs a recorder.

use metrics::{counter, histogram};
use std::time::Duration;

use crate::routing::Backend;

pub const REQUESTS: &str = "edge_router.requests";
pub const DURATION: &str = "edge_router.duration_seconds";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Preflight,
    Forwarded,
    NotFound,
    NotConfigured,
    Unavailable,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Preflight => "preflight",
            Outcome::Forwarded => "forwarded",
            Outcome::NotFound => "not_found",
            Outcome::NotConfigured => "not_configured",
            Outcome::Unavailable => "unavailable",
        }
    }
}

pub fn record(outcome: Outcome, backend: Option<Backend>, status: u16, elapsed: Duration) {
    let backend = backend.map_or("none", |b| b.name());
    counter!(
        REQUESTS,
        "outcome" => outcome.as_str(),
        "backend" => backend,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(DURATION, "outcome" => outcome.as_str(), "backend" => backend)
        .record(elapsed.as_secs_f64());
}
