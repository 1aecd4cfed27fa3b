// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image search gallery built with the Iced GUI framework.
//!
//! Queries go to the Pixabay API; results are shown as a responsive grid with
//! page-by-page loading, a full-size overlay and per-image removal. The
//! [`gallery`] controller holds the search state and is independent of the UI.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
