// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`error_banner`] - Search failure presentation with a localized title

pub mod error_banner;
