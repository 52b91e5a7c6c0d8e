//! Where the location provider lives and how long to wait for it.

use crate::request::Scope;
use std::time::Duration;

/// Public location service the widget talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://crio-location-selector.onrender.com";

/// Request timeout used by native clients.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Ignored by the browser provider, which relies on the browser's own limits.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for a lookup.
    pub fn url_for(&self, scope: &Scope) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), scope.path())
    }
}
