//! Application Configuration
//!
//! Runtime configuration for the console, persisted as TOML in the
//! platform config directory (see `utils::config_store`).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_SERVER_URL, REQUEST_TIMEOUT_SECS, SEARCH_DEBOUNCE_MS,
};

/// Console configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the employee resource collection
    pub server_url: String,
    /// Records per page in the list view
    pub page_size: usize,
    /// Search debounce window in milliseconds
    pub search_debounce_ms: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Replace out-of-range values with the defaults.
    ///
    /// The config file is user-editable, and the pager requires a positive
    /// page size, so zero values are clamped here at the load boundary. A
    /// zero debounce is allowed (it applies searches immediately).
    pub fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            warn!(
                "page_size 0 in configuration, falling back to {}",
                DEFAULT_PAGE_SIZE
            );
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.request_timeout_secs == 0 {
            warn!(
                "request_timeout_secs 0 in configuration, falling back to {}",
                REQUEST_TIMEOUT_SECS
            );
            self.request_timeout_secs = REQUEST_TIMEOUT_SECS;
        }
        self
    }
}
