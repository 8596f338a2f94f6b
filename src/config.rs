use std::{env, time::Duration};

use dotenv::dotenv;
use reqwest::Url;
use tracing::warn;

use crate::routing::{Backend, API_PREFIX, DEFAULT_UI_PREFIX};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number, got {0:?}")]
    InvalidPort(String),

    #[error("{var} is not a valid http(s) URL: {value:?}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("UI_PROXY_PREFIX {0:?} must be a non-empty path that does not collide with /api")]
    InvalidUiPrefix(String),

    #[error("UPSTREAM_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Origins of the two services behind the router. Either may be absent; a
/// route that selects an unset origin is answered with a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendOrigins {
    pub billing: Option<String>,
    pub orchestration_ui: Option<String>,
}

impl BackendOrigins {
    pub fn origin(&self, backend: Backend) -> Option<&str> {
        match backend {
            Backend::Billing => self.billing.as_deref(),
            Backend::OrchestrationUi => self.orchestration_ui.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub host: String,
    pub backends: BackendOrigins,
    pub ui_prefix: String,
    pub upstream_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let port_raw = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        // OKE_BACKEND_URL is the older name used by the pages deployment.
        let billing = match non_empty_var("OKE_BILLING_URL") {
            Some(value) => Some(parse_origin("OKE_BILLING_URL", &value)?),
            None => non_empty_var("OKE_BACKEND_URL")
                .map(|value| parse_origin("OKE_BACKEND_URL", &value))
                .transpose()?,
        };
        let orchestration_ui = non_empty_var("OKE_TEMPORAL_URL")
            .map(|value| parse_origin("OKE_TEMPORAL_URL", &value))
            .transpose()?;

        if billing.is_none() {
            warn!("No billing backend configured; /api routes will answer 500");
        }
        if orchestration_ui.is_none() {
            warn!("No orchestration UI backend configured; UI routes will answer 500");
        }

        let ui_prefix = normalize_ui_prefix(
            &env::var("UI_PROXY_PREFIX").unwrap_or_else(|_| DEFAULT_UI_PREFIX.to_string()),
        )?;

        let upstream_timeout = non_empty_var("UPSTREAM_TIMEOUT_SECS")
            .map(|raw| match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(ConfigError::InvalidTimeout(raw)),
            })
            .transpose()?;

        Ok(Self {
            port,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            backends: BackendOrigins {
                billing,
                orchestration_ui,
            },
            ui_prefix,
            upstream_timeout,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Validates a backend origin and drops any trailing slash so that
/// `origin + path` never doubles it.
pub fn parse_origin(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        var,
        value: value.to_string(),
    };

    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }

    Ok(value.trim_end_matches('/').to_string())
}

pub fn normalize_ui_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidUiPrefix(raw.to_string()));
    }

    let prefix = format!("/{}", trimmed);
    if prefix == API_PREFIX || prefix.starts_with("/api/") {
        return Err(ConfigError::InvalidUiPrefix(raw.to_string()));
    }
    Ok(prefix)
}
