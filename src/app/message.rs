// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::SearchResult;
use crate::domain::search::ImageId;
use crate::gallery;
use crate::ui::searchbar;
use crate::ui::state::PreviewKind;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Searchbar(searchbar::Message),
    Gallery(gallery::Message),
    /// An image download finished.
    PreviewLoaded {
        kind: PreviewKind,
        id: ImageId,
        result: SearchResult<Vec<u8>>,
    },
    EscapePressed,
    Tick(Instant), // Spinner animation
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional query submitted on startup.
    pub query: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional API key. Takes precedence over the environment and settings file.
    pub api_key: Option<String>,
}
