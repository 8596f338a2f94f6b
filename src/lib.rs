//! Edge router in front of the OKE billing API and the orchestration UI.
//!
//! Requests under `/api/` go to the billing service with a versioned path,
//! requests under the UI prefix go to the orchestration UI with the prefix
//! stripped, and everything leaves with the same CORS headers.

pub mod app;
pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod proxy;
pub mod routing;
pub mod telemetry;

pub use app::{build_router, AppState};
pub use config::{AppConfig, BackendOrigins, ConfigError};
pub use error::AppError;
pub use proxy::{HttpUpstream, OutboundRequest, Upstream};
pub use routing::{Backend, RouteDecision, RouteTable};
