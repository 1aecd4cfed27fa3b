// SPDX-License-Identifier: MPL-2.0
use futures_util::future::{self, BoxFuture, FutureExt};
use iced_gallery::application::port::{ImageSearch, SearchError, SearchRequest, SearchResult};
use iced_gallery::config::{self, Config};
use iced_gallery::domain::search::{ImageId, ImageRecord, SearchQuery};
use iced_gallery::gallery::{Effect, Message, State};
use iced_gallery::i18n::fluent::I18n;
use std::sync::Mutex;
use tempfile::tempdir;

/// Serves pages from a fixed list and records every request it receives.
struct FakeSearch {
    pages: Vec<SearchResult<Vec<ImageRecord>>>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl FakeSearch {
    fn new(pages: Vec<SearchResult<Vec<ImageRecord>>>) -> Self {
        Self {
            pages,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl ImageSearch for FakeSearch {
    fn fetch_images(
        &self,
        request: SearchRequest,
    ) -> BoxFuture<'static, SearchResult<Vec<ImageRecord>>> {
        let index = usize::try_from(request.page.value()).unwrap_or(usize::MAX) - 1;
        self.requests.lock().expect("requests lock").push(request);
        let page = self.pages.get(index).cloned().unwrap_or(Ok(Vec::new()));
        future::ready(page).boxed()
    }
}

fn record(id: u64) -> ImageRecord {
    ImageRecord::new(
        ImageId::new(id),
        format!("https://cdn.example.com/{id}_640.jpg"),
        format!("https://cdn.example.com/{id}_1280.jpg"),
    )
    .with_tags("nature, sky")
}

fn query(text: &str) -> SearchQuery {
    SearchQuery::parse(text).expect("non-empty query")
}

/// Runs the fetch an effect asks for and feeds the result back.
async fn drive(state: &mut State, search: &FakeSearch, effect: Effect) -> Effect {
    match effect {
        Effect::Fetch { token, request } => {
            let result = search.fetch_images(request).await;
            state.handle(Message::FetchCompleted { token, result })
        }
        other => other,
    }
}

#[tokio::test]
async fn search_then_load_more_appends_pages() {
    let search = FakeSearch::new(vec![
        Ok(vec![record(1), record(2)]),
        Ok(vec![record(3)]),
    ]);
    let mut state = State::default();

    let effect = state.handle(Message::SubmitQuery(query("cats")));
    let effect = drive(&mut state, &search, effect).await;
    assert!(matches!(effect, Effect::ScrollToEnd { ref appended } if appended.len() == 2));

    let effect = state.handle(Message::LoadMore);
    let effect = drive(&mut state, &search, effect).await;
    assert!(matches!(effect, Effect::ScrollToEnd { ref appended } if appended.len() == 1));

    let ids: Vec<u64> = state.images().iter().map(|r| r.id().value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(state.page().value(), 3);

    let pages: Vec<u32> = search.requests().iter().map(|r| r.page.value()).collect();
    assert_eq!(pages, vec![1, 2]);
    assert!(search.requests().iter().all(|r| r.query.as_str() == "cats"));
}

#[tokio::test]
async fn failed_load_more_keeps_loaded_images() {
    let search = FakeSearch::new(vec![
        Ok(vec![record(1)]),
        Err(SearchError::Status {
            code: 429,
            reason: "Too Many Requests".into(),
        }),
    ]);
    let mut state = State::default();

    let effect = state.handle(Message::SubmitQuery(query("cats")));
    drive(&mut state, &search, effect).await;
    let effect = state.handle(Message::LoadMore);
    drive(&mut state, &search, effect).await;

    assert_eq!(state.images().len(), 1);
    assert_eq!(state.page().value(), 2);
    assert!(!state.is_loading());
    assert_eq!(
        state.error().map(SearchError::i18n_key),
        Some("error-search-rate-limited")
    );
    assert!(state.can_load_more());
}

#[tokio::test]
async fn result_of_superseded_query_is_dropped() {
    let search = FakeSearch::new(vec![Ok(vec![record(7)])]);
    let mut state = State::default();

    let first = state.handle(Message::SubmitQuery(query("cats")));
    let second = state.handle(Message::SubmitQuery(query("dogs")));

    // The older request resolves last
    let effect = drive(&mut state, &search, second).await;
    assert!(matches!(effect, Effect::ScrollToEnd { .. }));
    let effect = drive(&mut state, &search, first).await;
    assert_eq!(effect, Effect::None);

    assert_eq!(state.query().map(SearchQuery::as_str), Some("dogs"));
    assert_eq!(state.images().len(), 1);
}

#[tokio::test]
async fn overlay_and_removal_flow() {
    let search = FakeSearch::new(vec![Ok(vec![record(1), record(2)])]);
    let mut state = State::default();
    let effect = state.handle(Message::SubmitQuery(query("sky")));
    drive(&mut state, &search, effect).await;

    let effect = state.handle(Message::SelectImage(ImageId::new(2)));
    assert!(matches!(effect, Effect::OverlayOpened(ref r) if r.id() == ImageId::new(2)));
    assert_eq!(
        state.selected_image().map(ImageRecord::large_image_url),
        Some("https://cdn.example.com/2_1280.jpg")
    );

    state.handle(Message::CloseOverlay);
    assert!(!state.is_overlay_open());

    let effect = state.handle(Message::RemoveImage(ImageId::new(1)));
    assert_eq!(effect, Effect::ImageRemoved(ImageId::new(1)));
    let ids: Vec<u64> = state.images().iter().map(|r| r.id().value()).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn empty_page_shows_no_results() {
    let search = FakeSearch::new(vec![Ok(Vec::new())]);
    let mut state = State::default();
    let effect = state.handle(Message::SubmitQuery(query("zzzzqx")));
    drive(&mut state, &search, effect).await;

    assert!(state.has_no_results());
    assert!(!state.can_load_more());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");
}

#[test]
fn every_search_error_is_translated() {
    let errors = [
        SearchError::MissingApiKey,
        SearchError::Network("timeout".into()),
        SearchError::Status {
            code: 429,
            reason: String::new(),
        },
        SearchError::Status {
            code: 500,
            reason: String::new(),
        },
        SearchError::Malformed("eof".into()),
        SearchError::InvalidEndpoint("not a url".into()),
    ];

    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for error in &errors {
            let text = i18n.tr(error.i18n_key());
            assert!(!text.starts_with("MISSING"), "{lang}: {text}");
        }
    }
}
