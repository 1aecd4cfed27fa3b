// SPDX-License-Identifier: MPL-2.0
//! Search domain types.

pub mod image;
pub mod newtypes;

pub use image::{ImageId, ImageRecord};
pub use newtypes::{PageNumber, RequestToken, SearchQuery};
