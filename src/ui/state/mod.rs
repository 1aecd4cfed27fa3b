// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State owned by the application shell rather than the gallery controller:
//! downloaded image renditions and the loader animation.

pub mod previews;
pub mod spinner;

pub use previews::{Preview, PreviewKind, Previews};
pub use spinner::SpinnerState;
