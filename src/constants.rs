//! Application Constants
//!
//! Centralized tunables for the list view and the REST collaborator.

/// Number of records shown per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Quiet period after the last keystroke before a search is applied
pub const SEARCH_DEBOUNCE_MS: u64 = 2000;

/// Trimmed queries of this length or shorter are treated as "no filter"
pub const SEARCH_MIN_CHARS: usize = 2;

/// Default base URL of the employee resource collection
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000/posts";

/// HTTP request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
