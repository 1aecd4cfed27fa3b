// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component messages are routed to their state machines here, and the
//! gallery controller's effects are turned into Iced tasks.

use super::Message;
use crate::application::port::{ImageDownloader, ImageSearch};
use crate::domain::search::{ImageId, ImageRecord};
use crate::gallery::{self, Effect};
use crate::ui::gallery::SCROLLABLE_ID;
use crate::ui::searchbar::{self, Event as SearchbarEvent};
use crate::ui::state::{PreviewKind, Previews, SpinnerState};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub searchbar: &'a mut searchbar::State,
    pub gallery: &'a mut gallery::State,
    pub previews: &'a mut Previews,
    pub spinner: &'a mut SpinnerState,
    pub search: &'a Arc<dyn ImageSearch>,
    pub downloader: &'a Arc<dyn ImageDownloader>,
    pub notice: &'a mut Option<String>,
}

/// Routes a top-level message and returns the follow-up task.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Searchbar(message) => match ctx.searchbar.update(message) {
            SearchbarEvent::None => Task::none(),
            SearchbarEvent::Submitted(query) => {
                handle_gallery_message(ctx, gallery::Message::SubmitQuery(query))
            }
        },
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::PreviewLoaded { kind, id, result } => {
            if let Err(error) = &result {
                tracing::debug!(?kind, %id, %error, "image download failed");
            }
            ctx.previews.finish(kind, id, result);
            Task::none()
        }
        Message::EscapePressed => {
            if ctx.gallery.is_overlay_open() {
                handle_gallery_message(ctx, gallery::Message::CloseOverlay)
            } else {
                Task::none()
            }
        }
        Message::Tick(_) => {
            ctx.spinner.tick();
            Task::none()
        }
        Message::DismissNotice => {
            *ctx.notice = None;
            Task::none()
        }
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let effect = ctx.gallery.handle(message);
    run_effect(ctx, effect)
}

fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Fetch { token, request } => {
            if request.page.is_first() {
                // New result set: drop images downloaded for the previous one
                ctx.previews.clear();
                ctx.spinner.reset();
            }
            Task::perform(ctx.search.fetch_images(request), move |result| {
                Message::Gallery(gallery::Message::FetchCompleted { token, result })
            })
        }
        Effect::ScrollToEnd { appended } => {
            let downloads: Vec<Task<Message>> = appended
                .iter()
                .filter_map(|record| request_download(ctx, PreviewKind::Thumbnail, record))
                .collect();
            let scroll = operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 1.0 });
            Task::batch(downloads.into_iter().chain(std::iter::once(scroll)))
        }
        Effect::OverlayOpened(record) => {
            request_download(ctx, PreviewKind::FullSize, &record).unwrap_or_else(Task::none)
        }
        Effect::ImageRemoved(id) => {
            ctx.previews.remove(id);
            Task::none()
        }
    }
}

/// Starts downloading one rendition of `record` unless it is already loading
/// or loaded.
fn request_download(
    ctx: &mut UpdateContext<'_>,
    kind: PreviewKind,
    record: &ImageRecord,
) -> Option<Task<Message>> {
    let id = record.id();
    if !ctx.previews.request(kind, id) {
        return None;
    }
    let url = match kind {
        PreviewKind::Thumbnail => record.preview_url(),
        PreviewKind::FullSize => record.large_image_url(),
    };
    Some(download(ctx.downloader, kind, id, url.to_owned()))
}

fn download(
    downloader: &Arc<dyn ImageDownloader>,
    kind: PreviewKind,
    id: ImageId,
    url: String,
) -> Task<Message> {
    Task::perform(downloader.fetch_image_bytes(url), move |result| {
        Message::PreviewLoaded { kind, id, result }
    })
}
