// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: owns the search state and drives the request lifecycle.
//!
//! The controller never performs I/O. [`State::handle`] applies a [`Message`]
//! and returns an [`Effect`] describing the follow-up work (fetching a page,
//! scrolling to new content) for the application to execute.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --SubmitQuery--> Loading --FetchCompleted(Ok)--> Success --LoadMore--> Loading
//!                          |                                                   ^
//!                          +--FetchCompleted(Err)--> Failure --LoadMore--------+
//! ```
//!
//! Each fetch carries a [`RequestToken`]. Only the completion whose token
//! matches the one in flight is applied; others are dropped.

use crate::application::port::{SearchError, SearchRequest, SearchResult};
use crate::domain::search::{ImageId, ImageRecord, PageNumber, RequestToken, SearchQuery};
use std::collections::HashSet;

/// Search and presentation state of the gallery.
#[derive(Debug, Clone, Default)]
pub struct State {
    query: Option<SearchQuery>,
    page: PageNumber,
    images: Vec<ImageRecord>,
    is_loading: bool,
    error: Option<SearchError>,
    selected_image: Option<ImageRecord>,
    is_overlay_open: bool,
    in_flight: Option<RequestToken>,
    last_token: RequestToken,
}

/// Messages handled by the gallery controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// A trimmed, non-empty query was submitted from the search form.
    SubmitQuery(SearchQuery),
    /// Fetch the next page for the current query.
    LoadMore,
    /// Open the overlay for the image with this id.
    SelectImage(ImageId),
    /// Hide the overlay, keeping the selection.
    CloseOverlay,
    /// Drop the image with this id from the current results.
    RemoveImage(ImageId),
    /// A fetch finished.
    FetchCompleted {
        token: RequestToken,
        result: SearchResult<Vec<ImageRecord>>,
    },
}

/// Work requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch one page; deliver the outcome as [`Message::FetchCompleted`]
    /// with the same token.
    Fetch {
        token: RequestToken,
        request: SearchRequest,
    },
    /// A page was appended; bring the end of the gallery into view.
    ScrollToEnd { appended: Vec<ImageRecord> },
    /// The overlay opened for this image.
    OverlayOpened(ImageRecord),
    /// The image with this id left the result set.
    ImageRemoved(ImageId),
}

impl State {
    /// Handle a gallery message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SubmitQuery(query) => self.submit_query(query),
            Message::LoadMore => self.load_more(),
            Message::SelectImage(id) => self.select_image(id),
            Message::CloseOverlay => {
                self.is_overlay_open = false;
                Effect::None
            }
            Message::RemoveImage(id) => self.remove_image(id),
            Message::FetchCompleted { token, result } => self.fetch_completed(token, result),
        }
    }

    fn submit_query(&mut self, query: SearchQuery) -> Effect {
        if self.query.as_ref() == Some(&query) && !self.can_retry() {
            return Effect::None;
        }

        tracing::info!(query = %query, "new search");
        self.reset();
        self.query = Some(query.clone());
        self.start_fetch(query)
    }

    fn load_more(&mut self) -> Effect {
        if self.is_loading || self.images.is_empty() {
            return Effect::None;
        }
        match self.query.clone() {
            Some(query) => self.start_fetch(query),
            None => Effect::None,
        }
    }

    fn select_image(&mut self, id: ImageId) -> Effect {
        let Some(record) = self.images.iter().find(|image| image.id() == id).cloned() else {
            return Effect::None;
        };
        self.selected_image = Some(record.clone());
        self.is_overlay_open = true;
        Effect::OverlayOpened(record)
    }

    fn remove_image(&mut self, id: ImageId) -> Effect {
        match self.images.iter().position(|image| image.id() == id) {
            Some(index) => {
                self.images.remove(index);
                Effect::ImageRemoved(id)
            }
            None => Effect::None,
        }
    }

    fn fetch_completed(
        &mut self,
        token: RequestToken,
        result: SearchResult<Vec<ImageRecord>>,
    ) -> Effect {
        if self.in_flight != Some(token) {
            tracing::debug!(token = token.value(), "discarding stale search result");
            return Effect::None;
        }

        self.in_flight = None;
        self.is_loading = false;

        match result {
            Ok(records) => {
                let received = records.len();
                let appended = self.without_known_ids(records);
                tracing::info!(
                    page = %self.page,
                    count = appended.len(),
                    duplicates = received - appended.len(),
                    "page loaded"
                );
                self.images.extend(appended.iter().cloned());
                self.page = self.page.next();
                Effect::ScrollToEnd { appended }
            }
            Err(error) => {
                tracing::warn!(page = %self.page, %error, "search failed");
                self.error = Some(error);
                Effect::None
            }
        }
    }

    /// Drops records whose id is already shown or repeats within the page.
    /// The API may return the same image on consecutive pages.
    fn without_known_ids(&self, records: Vec<ImageRecord>) -> Vec<ImageRecord> {
        let mut seen: HashSet<ImageId> = self.images.iter().map(ImageRecord::id).collect();
        records
            .into_iter()
            .filter(|record| seen.insert(record.id()))
            .collect()
    }

    /// Whether re-submitting the current query should fetch it again: the
    /// last fetch failed or produced nothing, and none is running.
    fn can_retry(&self) -> bool {
        !self.is_loading && (self.error.is_some() || self.images.is_empty())
    }

    /// Returns to the empty state for a new query.
    fn reset(&mut self) {
        self.images.clear();
        self.page = PageNumber::FIRST;
        self.error = None;
        self.selected_image = None;
        self.is_overlay_open = false;
    }

    fn start_fetch(&mut self, query: SearchQuery) -> Effect {
        let token = self.last_token.next();
        self.last_token = token;
        self.in_flight = Some(token);
        self.is_loading = true;
        self.error = None;

        tracing::debug!(token = token.value(), query = %query, page = %self.page, "fetch started");
        Effect::Fetch {
            token,
            request: SearchRequest::new(query, self.page),
        }
    }

    #[must_use]
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// The next page to fetch.
    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Token of the fetch whose result is still awaited, if any.
    #[must_use]
    pub fn in_flight_token(&self) -> Option<RequestToken> {
        self.in_flight
    }

    #[must_use]
    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&ImageRecord> {
        self.selected_image.as_ref()
    }

    #[must_use]
    pub fn is_overlay_open(&self) -> bool {
        self.is_overlay_open
    }

    /// Whether the "load more" control should be offered.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.images.is_empty() && !self.is_loading
    }

    /// Whether a search finished with nothing to show.
    #[must_use]
    pub fn has_no_results(&self) -> bool {
        self.query.is_some() && self.images.is_empty() && !self.is_loading && self.error.is_none()
    }
}
