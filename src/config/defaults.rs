// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Search**: Image search service endpoint, paging and timeouts
//! - **Gallery**: Thumbnail cell geometry

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Endpoint of the Pixabay image search API.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://pixabay.com/api/";

/// Number of results requested per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Smallest page size accepted by the API.
pub const MIN_PER_PAGE: u32 = 3;

/// Largest page size accepted by the API.
pub const MAX_PER_PAGE: u32 = 200;

/// Image type filter sent with every request.
pub const DEFAULT_IMAGE_TYPE: &str = "photo";

/// Orientation filter sent with every request.
pub const DEFAULT_ORIENTATION: &str = "horizontal";

/// HTTP request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default thumbnail cell width in logical pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 320;

/// Default thumbnail cell height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 240;

/// Minimum thumbnail edge in logical pixels.
pub const MIN_THUMBNAIL_EDGE: u32 = 64;

/// Maximum thumbnail edge in logical pixels.
pub const MAX_THUMBNAIL_EDGE: u32 = 1024;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Paging validation
    assert!(MIN_PER_PAGE > 0);
    assert!(MAX_PER_PAGE >= MIN_PER_PAGE);
    assert!(DEFAULT_PER_PAGE >= MIN_PER_PAGE);
    assert!(DEFAULT_PER_PAGE <= MAX_PER_PAGE);

    // Timeout validation
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    // Thumbnail validation
    assert!(MIN_THUMBNAIL_EDGE > 0);
    assert!(MAX_THUMBNAIL_EDGE >= MIN_THUMBNAIL_EDGE);
    assert!(DEFAULT_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_EDGE);
    assert!(DEFAULT_THUMBNAIL_WIDTH <= MAX_THUMBNAIL_EDGE);
    assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_EDGE);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_EDGE);
};
