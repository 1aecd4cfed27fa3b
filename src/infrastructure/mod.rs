// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`pixabay`]: Image search and image download over HTTP (implements
//!   [`ImageSearch`] and [`ImageDownloader`])
//!
//! [`ImageSearch`]: crate::application::port::ImageSearch
//! [`ImageDownloader`]: crate::application::port::ImageDownloader

pub mod pixabay;

pub use pixabay::{PixabayClient, PixabaySettings};
