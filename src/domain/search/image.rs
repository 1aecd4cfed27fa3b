// SPDX-License-Identifier: MPL-2.0
//! Image records returned by an image search.

use serde_json::{Map, Value};
use std::fmt;

/// Identifier of an image within a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ImageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single normalized search result.
///
/// Records are immutable once built. Every field the API returned besides
/// the ones normalized here is kept in [`metadata`](Self::metadata) as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    id: ImageId,
    preview_url: String,
    large_image_url: String,
    tags: String,
    metadata: Map<String, Value>,
}

impl ImageRecord {
    /// Creates a record without extra metadata.
    pub fn new(
        id: impl Into<ImageId>,
        preview_url: impl Into<String>,
        large_image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            preview_url: preview_url.into(),
            large_image_url: large_image_url.into(),
            tags: String::new(),
            metadata: Map::new(),
        }
    }

    /// Sets the comma separated tag list (used as alt text).
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Attaches the remaining API fields.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    #[must_use]
    pub fn large_image_url(&self) -> &str {
        &self.large_image_url
    }

    #[must_use]
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Fields passed through from the API without interpretation.
    #[must_use]
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }
}
