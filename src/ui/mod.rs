// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Views are plain functions of their inputs following the Elm-style
//! "state down, messages up" pattern. The gallery views emit
//! [`crate::gallery::Message`] directly; the search form has its own
//! message type and reports submissions as an [`searchbar::Event`].
//!
//! # Views
//!
//! - [`searchbar`] - Query input and submit button
//! - [`gallery`] - Responsive thumbnail grid with banner, loader and pagination
//! - [`gallery_item`] - A single thumbnail cell with its remove button
//! - [`load_more`] - Pagination button
//! - [`loader`] - Centered animated spinner
//! - [`modal`] - Full-size image overlay
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Downloaded previews and spinner animation
//! - [`components`] - Reusable UI components (error banner)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod gallery_item;
pub mod load_more;
pub mod loader;
pub mod modal;
pub mod searchbar;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
