// SPDX-License-Identifier: MPL-2.0
//! Image search port definition.
//!
//! [`ImageSearch`] fetches one page of results for a query.
//! [`ImageDownloader`] fetches the bytes behind a preview or full-size URL.
//!
//! Neither port caches or retries: one call is one network request, and any
//! failure is reported once as a [`SearchError`].

use crate::domain::search::{ImageRecord, PageNumber, SearchQuery};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// SearchError
// =============================================================================

/// Errors that can occur while talking to the image search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No API key is configured.
    MissingApiKey,

    /// The request could not be completed (DNS, connection, timeout, body read).
    Network(String),

    /// The service answered with a non-success HTTP status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Canonical reason or response body excerpt.
        reason: String,
    },

    /// The response body could not be decoded.
    Malformed(String),

    /// The configured endpoint is not a valid URL.
    InvalidEndpoint(String),
}

impl SearchError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SearchError::MissingApiKey => "error-search-missing-key",
            SearchError::Network(_) => "error-search-network",
            SearchError::Status { code: 429, .. } => "error-search-rate-limited",
            SearchError::Status { .. } => "error-search-status",
            SearchError::Malformed(_) => "error-search-malformed",
            SearchError::InvalidEndpoint(_) => "error-search-invalid-endpoint",
        }
    }

    /// Human-readable message shown in the error banner details.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MissingApiKey => write!(f, "No API key configured"),
            SearchError::Network(msg) => write!(f, "Network error: {msg}"),
            SearchError::Status { code, reason } if reason.is_empty() => {
                write!(f, "HTTP status {code}")
            }
            SearchError::Status { code, reason } => write!(f, "HTTP status {code}: {reason}"),
            SearchError::Malformed(msg) => write!(f, "Malformed response: {msg}"),
            SearchError::InvalidEndpoint(msg) => write!(f, "Invalid endpoint: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

// =============================================================================
// SearchRequest
// =============================================================================

/// Parameters of one page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub page: PageNumber,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: SearchQuery, page: PageNumber) -> Self {
        Self { query, page }
    }
}

// =============================================================================
// Ports
// =============================================================================

/// Fetches one page of image search results.
pub trait ImageSearch: Send + Sync {
    /// Performs exactly one request for `request.query` at `request.page`.
    ///
    /// Resolves with the normalized records of that page (possibly empty).
    fn fetch_images(
        &self,
        request: SearchRequest,
    ) -> BoxFuture<'static, SearchResult<Vec<ImageRecord>>>;
}

/// Downloads raw image bytes for display.
pub trait ImageDownloader: Send + Sync {
    fn fetch_image_bytes(&self, url: String) -> BoxFuture<'static, SearchResult<Vec<u8>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_status_has_dedicated_key() {
        let err = SearchError::Status {
            code: 429,
            reason: "Too Many Requests".into(),
        };
        assert_eq!(err.i18n_key(), "error-search-rate-limited");
    }

    #[test]
    fn other_statuses_share_key() {
        let err = SearchError::Status {
            code: 500,
            reason: String::new(),
        };
        assert_eq!(err.i18n_key(), "error-search-status");
        assert_eq!(err.to_string(), "HTTP status 500");
    }

    #[test]
    fn invalid_endpoint_has_own_key() {
        let err = SearchError::InvalidEndpoint("not a url".into());
        assert_eq!(err.i18n_key(), "error-search-invalid-endpoint");
        assert!(err.message().contains("not a url"));
    }

    #[test]
    fn network_message_is_preserved() {
        let err = SearchError::Network("rate limited".into());
        assert!(err.message().contains("rate limited"));
    }
}
