// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search form, the
//! gallery controller and the image services.
//!
//! The `App` struct owns the components and turns the controller's effects
//! into tasks: page fetches, image downloads and scroll operations.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{
    ImageDownloader, ImageSearch, SearchError, SearchRequest, SearchResult,
};
use crate::config;
use crate::domain::search::ImageRecord;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{PixabayClient, PixabaySettings};
use crate::ui::searchbar;
use crate::ui::state::{Previews, SpinnerState};
use crate::ui::theming::ThemeMode;
use futures_util::future::{self, BoxFuture, FutureExt};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    searchbar: searchbar::State,
    gallery: gallery::State,
    /// Downloaded thumbnails and full-size images.
    previews: Previews,
    spinner: SpinnerState,
    search: Arc<dyn ImageSearch>,
    downloader: Arc<dyn ImageDownloader>,
    /// Preferred thumbnail cell size from the config.
    thumbnail_size: (f32, f32),
    /// Message key of a dismissable startup notice.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.gallery.query())
            .field("images", &self.gallery.images().len())
            .field("is_loading", &self.gallery.is_loading())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from the config and CLI flags, submitting the
    /// startup query if one was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let api_key = config.search.resolve_api_key(flags.api_key.clone());
        if api_key.is_none() {
            tracing::warn!("no API key configured; searches will fail until one is set");
        }
        let settings = PixabaySettings::from_config(&config.search, api_key);
        let (search, downloader) = build_services(settings);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            searchbar: searchbar::State::default(),
            gallery: gallery::State::default(),
            previews: Previews::default(),
            spinner: SpinnerState::default(),
            search,
            downloader,
            thumbnail_size: config.gallery.thumbnail_size(),
            notice: config_warning,
        };

        let task = match flags.query {
            Some(query) => {
                app.searchbar = searchbar::State::with_input(query);
                app.update(Message::Searchbar(searchbar::Message::Submit))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.gallery.query() {
            Some(query) => self
                .i18n
                .tr_with_args("window-title-query", &[("query", query.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.gallery.is_loading() || self.previews.has_pending();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            searchbar: &mut self.searchbar,
            gallery: &mut self.gallery,
            previews: &mut self.previews,
            spinner: &mut self.spinner,
            search: &self.search,
            downloader: &self.downloader,
            notice: &mut self.notice,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            searchbar: &self.searchbar,
            gallery: &self.gallery,
            previews: &self.previews,
            thumbnail_size: self.thumbnail_size,
            spinner_rotation: self.spinner.rotation(),
            notice: self.notice.as_deref(),
        })
    }
}

/// Creates the Pixabay-backed services, or a stand-in that reports the
/// construction error on every call.
fn build_services(settings: PixabaySettings) -> (Arc<dyn ImageSearch>, Arc<dyn ImageDownloader>) {
    match PixabayClient::new(settings) {
        Ok(client) => {
            let client = Arc::new(client);
            let search: Arc<dyn ImageSearch> = client.clone();
            let downloader: Arc<dyn ImageDownloader> = client;
            (search, downloader)
        }
        Err(error) => {
            tracing::error!(%error, "failed to build HTTP client");
            let unavailable = Arc::new(UnavailableService(error));
            let search: Arc<dyn ImageSearch> = unavailable.clone();
            let downloader: Arc<dyn ImageDownloader> = unavailable;
            (search, downloader)
        }
    }
}

/// Service used when no HTTP client could be built.
struct UnavailableService(SearchError);

impl ImageSearch for UnavailableService {
    fn fetch_images(
        &self,
        _request: SearchRequest,
    ) -> BoxFuture<'static, SearchResult<Vec<ImageRecord>>> {
        future::ready(Err(self.0.clone())).boxed()
    }
}

impl ImageDownloader for UnavailableService {
    fn fetch_image_bytes(&self, _url: String) -> BoxFuture<'static, SearchResult<Vec<u8>>> {
        future::ready(Err(self.0.clone())).boxed()
    }
}
