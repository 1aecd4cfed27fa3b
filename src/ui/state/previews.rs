// SPDX-License-Identifier: MPL-2.0
//! Downloaded image bytes for the gallery, keyed by image id.
//!
//! Thumbnails and full-size images are tracked separately. A download result
//! is only stored if its entry still exists, so results for images removed or
//! cleared in the meantime are dropped.

use crate::application::port::SearchError;
use crate::domain::search::ImageId;
use iced::widget::image::Handle;
use std::collections::HashMap;

/// Which rendition of an image a download is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    Thumbnail,
    FullSize,
}

/// Load state of one rendition.
#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(Handle),
    Failed(SearchError),
}

impl Preview {
    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Preview::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Preview::Loading)
    }
}

/// Per-image load states.
#[derive(Debug, Clone, Default)]
pub struct Previews {
    thumbnails: HashMap<ImageId, Preview>,
    full_size: HashMap<ImageId, Preview>,
}

impl Previews {
    fn map(&self, kind: PreviewKind) -> &HashMap<ImageId, Preview> {
        match kind {
            PreviewKind::Thumbnail => &self.thumbnails,
            PreviewKind::FullSize => &self.full_size,
        }
    }

    fn map_mut(&mut self, kind: PreviewKind) -> &mut HashMap<ImageId, Preview> {
        match kind {
            PreviewKind::Thumbnail => &mut self.thumbnails,
            PreviewKind::FullSize => &mut self.full_size,
        }
    }

    /// Marks a download as started.
    ///
    /// Returns `false` when the rendition is already loading or loaded, in
    /// which case no new download is needed. A failed entry is retried.
    pub fn request(&mut self, kind: PreviewKind, id: ImageId) -> bool {
        let map = self.map_mut(kind);
        match map.get(&id) {
            Some(Preview::Loading | Preview::Ready(_)) => false,
            _ => {
                map.insert(id, Preview::Loading);
                true
            }
        }
    }

    /// Stores a download result. Ignored if the entry no longer exists.
    pub fn finish(&mut self, kind: PreviewKind, id: ImageId, result: Result<Vec<u8>, SearchError>) {
        let Some(entry) = self.map_mut(kind).get_mut(&id) else {
            tracing::debug!(%id, ?kind, "dropping download for image no longer shown");
            return;
        };
        *entry = match result {
            Ok(bytes) => Preview::Ready(Handle::from_bytes(bytes)),
            Err(error) => {
                tracing::warn!(%id, ?kind, %error, "image download failed");
                Preview::Failed(error)
            }
        };
    }

    #[must_use]
    pub fn get(&self, kind: PreviewKind, id: ImageId) -> Option<&Preview> {
        self.map(kind).get(&id)
    }

    /// Whether any download is still running.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.thumbnails
            .values()
            .chain(self.full_size.values())
            .any(Preview::is_loading)
    }

    /// Forgets both renditions of one image.
    pub fn remove(&mut self, id: ImageId) {
        self.thumbnails.remove(&id);
        self.full_size.remove(&id);
    }

    pub fn clear(&mut self) {
        self.thumbnails.clear();
        self.full_size.clear();
    }
}
