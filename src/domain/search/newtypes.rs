// SPDX-License-Identifier: MPL-2.0
//! Search newtypes.
//!
//! Type-safe wrappers ensuring queries are never blank and page numbers
//! never drop below one.

use std::fmt;

// =============================================================================
// SearchQuery
// =============================================================================

/// A trimmed, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims the input and returns `None` when nothing is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PageNumber
// =============================================================================

/// One-based page number of a paginated search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates a page number, clamping zero to the first page.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// Returns the following page.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// RequestToken
// =============================================================================

/// Identifies one fetch. Tokens are issued in increasing order so a
/// completion can be matched against the latest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the token issued after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let query = SearchQuery::parse("  cats  ").expect("query");
        assert_eq!(query.as_str(), "cats");
    }

    #[test]
    fn blank_query_is_rejected() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse(" \t\n ").is_none());
    }

    #[test]
    fn page_zero_clamps_to_first() {
        assert_eq!(PageNumber::new(0), PageNumber::FIRST);
        assert!(PageNumber::default().is_first());
    }

    #[test]
    fn page_next_increments_by_one() {
        assert_eq!(PageNumber::new(3).next().value(), 4);
    }

    #[test]
    fn tokens_increase() {
        let first = RequestToken::default();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.value(), first.value() + 1);
    }
}
