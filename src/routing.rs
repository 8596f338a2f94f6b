use std::fmt;

/// Literal path answered by the billing backend's health endpoint.
pub const HEALTH_PATH: &str = "/api/health";
pub const BACKEND_HEALTH_PATH: &str = "/health";

pub const API_PREFIX: &str = "/api";
pub const VERSIONED_API_PREFIX: &str = "/api/v1";

pub const DEFAULT_UI_PREFIX: &str = "/temporal";

/// The two origins this router can forward to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Billing,
    OrchestrationUi,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Billing => "billing",
            Backend::OrchestrationUi => "orchestration-ui",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecision {
    pub backend: Backend,
    pub path: String,
}

impl RouteDecision {
    fn new(backend: Backend, path: impl Into<String>) -> Self {
        Self {
            backend,
            path: path.into(),
        }
    }
}

/// Classifies inbound paths. Rules are checked in a fixed order and only the
/// leading prefix of a path is ever rewritten.
#[derive(Debug, Clone)]
pub struct RouteTable {
    ui_prefix: String,
}

impl RouteTable {
    /// `ui_prefix` is expected in normalized form: leading `/`, no trailing `/`.
    pub fn new(ui_prefix: impl Into<String>) -> Self {
        Self {
            ui_prefix: ui_prefix.into(),
        }
    }

    pub fn ui_prefix(&self) -> &str {
        &self.ui_prefix
    }

    pub fn resolve(&self, path: &str) -> Option<RouteDecision> {
        if path == HEALTH_PATH {
            return Some(RouteDecision::new(Backend::Billing, BACKEND_HEALTH_PATH));
        }

        if let Some(rest) = strip_segment_prefix(path, API_PREFIX) {
            return Some(RouteDecision::new(
                Backend::Billing,
                format!("{}{}", VERSIONED_API_PREFIX, rest),
            ));
        }

        if let Some(rest) = strip_segment_prefix(path, &self.ui_prefix) {
            return Some(RouteDecision::new(Backend::OrchestrationUi, rest));
        }

        None
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_UI_PREFIX)
    }
}

/// Strips `prefix` only when it is followed by `/`, returning the remainder
/// with its leading slash intact.
fn strip_segment_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix).filter(|rest| rest.starts_with('/'))
}
