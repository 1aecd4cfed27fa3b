// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types of the image search gallery.
//!
//! This module contains pure domain types and value objects. Apart from
//! `serde_json` (used to carry opaque API metadata untouched) it has no
//! dependencies beyond `std`, so every rule here is testable in isolation.
//!
//! # Modules
//!
//! - [`search`]: Search types ([`ImageRecord`](search::ImageRecord),
//!   [`SearchQuery`](search::SearchQuery), [`PageNumber`](search::PageNumber),
//!   [`RequestToken`](search::RequestToken))

pub mod search;
