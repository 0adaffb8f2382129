//! Search Term Normalization
//!
//! Maps raw search input to a filter intent. Queries at or below the
//! minimum length are treated as "no filter", never as a filter on a
//! short string.

use crate::constants::SEARCH_MIN_CHARS;

/// What a debounced search input asks the list to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchIntent {
    /// Empty input: clear the active filter and reload
    Clear,
    /// Non-empty but too short: leave the list alone
    TooShort,
    /// Apply the trimmed term as the server-side name filter
    Filter(String),
}

/// Derive the filter intent from raw search input.
pub fn derive_match(term: &str) -> MatchIntent {
    if term.is_empty() {
        return MatchIntent::Clear;
    }

    let trimmed = term.trim();
    if trimmed.chars().count() <= SEARCH_MIN_CHARS {
        return MatchIntent::TooShort;
    }

    MatchIntent::Filter(trimmed.to_string())
}
