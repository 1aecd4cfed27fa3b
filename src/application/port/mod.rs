// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`search`]: Paginated image search and image byte downloads
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so handles can be shared with async tasks
//! - Methods return boxed `'static` futures; callers wrap them in `Task::perform`

pub mod search;

pub use search::{ImageDownloader, ImageSearch, SearchError, SearchRequest, SearchResult};
