// SPDX-License-Identifier: MPL-2.0
//! Pixabay adapter implementing [`ImageSearch`] and [`ImageDownloader`].
//!
//! Request URL building and response parsing are plain functions so they can
//! be tested without network access.
//!
//! [`ImageSearch`]: crate::application::port::ImageSearch
//! [`ImageDownloader`]: crate::application::port::ImageDownloader

use crate::application::port::{
    ImageDownloader, ImageSearch, SearchError, SearchRequest, SearchResult,
};
use crate::config::SearchConfig;
use crate::domain::search::ImageRecord;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::Url;
use serde_json::{Map, Value};
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Fields lifted out of a hit into [`ImageRecord`]; everything else goes to metadata.
const ID_FIELD: &str = "id";
const PREVIEW_FIELD: &str = "webformatURL";
const LARGE_FIELD: &str = "largeImageURL";
const TAGS_FIELD: &str = "tags";

/// Longest body excerpt kept in a status error.
const MAX_REASON_CHARS: usize = 200;

/// Request parameters that stay fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixabaySettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub per_page: u32,
    pub image_type: String,
    pub orientation: String,
    pub safe_search: bool,
    pub timeout: Duration,
}

impl PixabaySettings {
    /// Builds settings from the `[search]` config section and an already
    /// resolved API key.
    #[must_use]
    pub fn from_config(search: &SearchConfig, api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: search.effective_base_url().to_string(),
            per_page: search.effective_per_page(),
            image_type: search.effective_image_type().to_string(),
            orientation: search.effective_orientation().to_string(),
            safe_search: search.safe_search.unwrap_or(false),
            timeout: search.request_timeout(),
        }
    }
}

impl Default for PixabaySettings {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default(), None)
    }
}

/// HTTP client for the Pixabay API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    http: reqwest::Client,
    settings: PixabaySettings,
}

impl PixabayClient {
    /// Creates a client with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Network`] if the TLS backend cannot be initialized.
    pub fn new(settings: PixabaySettings) -> SearchResult<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;
        Ok(Self { http, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &PixabaySettings {
        &self.settings
    }
}

impl ImageSearch for PixabayClient {
    fn fetch_images(
        &self,
        request: SearchRequest,
    ) -> BoxFuture<'static, SearchResult<Vec<ImageRecord>>> {
        let http = self.http.clone();
        let settings = self.settings.clone();

        async move {
            let Some(api_key) = settings.api_key.as_deref() else {
                return Err(SearchError::MissingApiKey);
            };
            let url = build_url(&settings, api_key, &request)?;

            tracing::debug!(query = %request.query, page = %request.page, "requesting images");
            let response = http
                .get(url)
                .send()
                .await
                .map_err(|e| SearchError::Network(e.to_string()))?;

            let response = ensure_success(response).await?;
            let body = response
                .bytes()
                .await
                .map_err(|e| SearchError::Network(e.to_string()))?;
            let records = parse_response(&body)?;
            tracing::debug!(count = records.len(), "received images");
            Ok(records)
        }
        .boxed()
    }
}

impl ImageDownloader for PixabayClient {
    fn fetch_image_bytes(&self, url: String) -> BoxFuture<'static, SearchResult<Vec<u8>>> {
        let http = self.http.clone();

        async move {
            let response = http
                .get(&url)
                .send()
                .await
                .map_err(|e| SearchError::Network(e.to_string()))?;

            let response = ensure_success(response).await?;
            let bytes = response
                .bytes()
                .await
                .map_err(|e| SearchError::Network(e.to_string()))?;
            Ok(bytes.to_vec())
        }
        .boxed()
    }
}

/// Builds the request URL for one page of results.
///
/// # Errors
///
/// Returns [`SearchError::InvalidEndpoint`] if the configured base URL is invalid.
pub fn build_url(
    settings: &PixabaySettings,
    api_key: &str,
    request: &SearchRequest,
) -> SearchResult<Url> {
    let mut url = Url::parse(&settings.base_url)
        .map_err(|e| SearchError::InvalidEndpoint(format!("{}: {e}", settings.base_url)))?;

    url.query_pairs_mut()
        .append_pair("key", api_key)
        .append_pair("q", request.query.as_str())
        .append_pair("page", &request.page.value().to_string())
        .append_pair("per_page", &settings.per_page.to_string())
        .append_pair("image_type", &settings.image_type)
        .append_pair("orientation", &settings.orientation);
    if settings.safe_search {
        url.query_pairs_mut().append_pair("safesearch", "true");
    }

    Ok(url)
}

/// Passes a success response through; otherwise reads the body so the
/// service's own explanation ends up in the error.
async fn ensure_success(response: reqwest::Response) -> SearchResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        &body,
    ))
}

/// Builds a [`SearchError::Status`], preferring the first line of the body
/// over the canonical reason.
#[must_use]
pub fn status_error(code: u16, canonical_reason: &str, body: &str) -> SearchError {
    let excerpt: String = body
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .chars()
        .take(MAX_REASON_CHARS)
        .collect();
    let reason = if excerpt.is_empty() {
        canonical_reason.to_string()
    } else {
        excerpt
    };
    SearchError::Status { code, reason }
}

/// Parses a search response body into normalized records, in API order.
///
/// Hits without an id or image URLs are skipped.
///
/// # Errors
///
/// Returns [`SearchError::Malformed`] if the body is not JSON or has no
/// `hits` array.
pub fn parse_response(body: &[u8]) -> SearchResult<Vec<ImageRecord>> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| SearchError::Malformed(e.to_string()))?;

    let hits = payload
        .get("hits")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchError::Malformed("missing `hits` array".to_string()))?;

    let records = hits
        .iter()
        .filter_map(|hit| match hit {
            Value::Object(fields) => {
                let record = record_from_hit(fields.clone());
                if record.is_none() {
                    tracing::warn!("skipping search hit without id or image URLs");
                }
                record
            }
            _ => None,
        })
        .collect();

    Ok(records)
}

fn record_from_hit(mut fields: Map<String, Value>) -> Option<ImageRecord> {
    let id = fields.remove(ID_FIELD)?.as_u64()?;
    let preview = take_string(&mut fields, PREVIEW_FIELD)?;
    let large = take_string(&mut fields, LARGE_FIELD)?;
    let tags = take_string(&mut fields, TAGS_FIELD).unwrap_or_default();

    Some(
        ImageRecord::new(id, preview, large)
            .with_tags(tags)
            .with_metadata(fields),
    )
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(value) => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{ImageId, PageNumber, SearchQuery};

    fn request(query: &str, page: u32) -> SearchRequest {
        SearchRequest::new(
            SearchQuery::parse(query).expect("query"),
            PageNumber::new(page),
        )
    }

    fn query_value(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn build_url_includes_all_parameters() {
        let settings = PixabaySettings::default();
        let url = build_url(&settings, "KEY", &request("cats", 2)).expect("url");

        assert!(url.as_str().starts_with("https://pixabay.com/api/?"));
        assert_eq!(query_value(&url, "key").as_deref(), Some("KEY"));
        assert_eq!(query_value(&url, "q").as_deref(), Some("cats"));
        assert_eq!(query_value(&url, "page").as_deref(), Some("2"));
        assert_eq!(query_value(&url, "per_page").as_deref(), Some("12"));
        assert_eq!(query_value(&url, "image_type").as_deref(), Some("photo"));
        assert_eq!(
            query_value(&url, "orientation").as_deref(),
            Some("horizontal")
        );
        assert!(query_value(&url, "safesearch").is_none());
    }

    #[test]
    fn build_url_encodes_query_text() {
        let settings = PixabaySettings::default();
        let url = build_url(&settings, "KEY", &request("red & blue", 1)).expect("url");

        assert!(!url.as_str().contains("red & blue"));
        assert_eq!(query_value(&url, "q").as_deref(), Some("red & blue"));
    }

    #[test]
    fn build_url_adds_safe_search_when_enabled() {
        let settings = PixabaySettings {
            safe_search: true,
            ..PixabaySettings::default()
        };
        let url = build_url(&settings, "KEY", &request("cats", 1)).expect("url");
        assert_eq!(query_value(&url, "safesearch").as_deref(), Some("true"));
    }

    #[test]
    fn build_url_rejects_invalid_base_url() {
        let settings = PixabaySettings {
            base_url: "not a url".to_string(),
            ..PixabaySettings::default()
        };
        let result = build_url(&settings, "KEY", &request("cats", 1));
        assert!(matches!(result, Err(SearchError::InvalidEndpoint(_))));
    }

    #[test]
    fn status_error_prefers_body_excerpt() {
        let err = status_error(400, "Bad Request", "\n[ERROR 400] \"key\" is invalid\nmore");
        assert_eq!(
            err,
            SearchError::Status {
                code: 400,
                reason: "[ERROR 400] \"key\" is invalid".to_string(),
            }
        );
    }

    #[test]
    fn status_error_falls_back_to_canonical_reason() {
        let err = status_error(429, "Too Many Requests", "  \n");
        assert_eq!(
            err,
            SearchError::Status {
                code: 429,
                reason: "Too Many Requests".to_string(),
            }
        );
    }

    #[test]
    fn status_error_truncates_long_bodies() {
        let body = "x".repeat(1000);
        match status_error(500, "Internal Server Error", &body) {
            SearchError::Status { reason, .. } => assert_eq!(reason.len(), MAX_REASON_CHARS),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn parse_response_maps_fields_and_keeps_extras() {
        let body = br#"{
            "total": 2, "totalHits": 2,
            "hits": [
                {"id": 1, "webformatURL": "https://p/1.jpg", "largeImageURL": "https://l/1.jpg",
                 "tags": "cat, pet", "user": "alice", "likes": 5},
                {"id": 2, "webformatURL": "https://p/2.jpg", "largeImageURL": "https://l/2.jpg"}
            ]
        }"#;

        let records = parse_response(body).expect("valid payload");

        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.id(), ImageId::new(1));
        assert_eq!(first.preview_url(), "https://p/1.jpg");
        assert_eq!(first.large_image_url(), "https://l/1.jpg");
        assert_eq!(first.tags(), "cat, pet");
        assert_eq!(first.metadata().get("user"), Some(&Value::from("alice")));
        assert_eq!(first.metadata().get("likes"), Some(&Value::from(5)));
        assert!(first.metadata().get("webformatURL").is_none());

        assert_eq!(records[1].id(), ImageId::new(2));
        assert_eq!(records[1].tags(), "");
    }

    #[test]
    fn parse_response_empty_hits_is_not_an_error() {
        let records = parse_response(br#"{"total":0,"totalHits":0,"hits":[]}"#).expect("valid");
        assert!(records.is_empty());
    }

    #[test]
    fn parse_response_skips_incomplete_hits() {
        let body = br#"{"hits": [
            {"id": 1, "webformatURL": "https://p/1.jpg"},
            {"id": 2, "webformatURL": "https://p/2.jpg", "largeImageURL": "https://l/2.jpg"},
            "garbage"
        ]}"#;
        let records = parse_response(body).expect("valid payload");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), ImageId::new(2));
    }

    #[test]
    fn parse_response_rejects_non_json() {
        let result = parse_response(b"[ERROR 400] \"key\" is invalid");
        assert!(matches!(result, Err(SearchError::Malformed(_))));
    }

    #[test]
    fn parse_response_rejects_missing_hits() {
        let result = parse_response(br#"{"total": 0}"#);
        assert!(matches!(result, Err(SearchError::Malformed(_))));
    }

    #[test]
    fn settings_follow_search_config() {
        let search = SearchConfig {
            per_page: Some(500),
            safe_search: Some(true),
            ..SearchConfig::default()
        };
        let settings = PixabaySettings::from_config(&search, Some("k".into()));
        assert_eq!(settings.per_page, 200);
        assert!(settings.safe_search);
        assert_eq!(settings.api_key.as_deref(), Some("k"));
    }

    /// Serves a single canned HTTP response on a local port.
    fn serve_once(response: &'static str) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while let Ok(n) = stream.read(&mut buf) {
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/api/")
    }

    #[tokio::test]
    async fn rejected_key_reports_service_message() {
        let base_url = serve_once(
            "HTTP/1.1 400 Bad Request\r\nContent-Type: text/plain\r\nContent-Length: 28\r\nConnection: close\r\n\r\n[ERROR 400] \"key\" is invalid",
        );
        let client = PixabayClient::new(PixabaySettings {
            api_key: Some("bad".to_string()),
            base_url,
            ..PixabaySettings::default()
        })
        .expect("client");

        let err = client
            .fetch_images(request("cats", 1))
            .await
            .expect_err("status error");
        assert_eq!(
            err,
            SearchError::Status {
                code: 400,
                reason: "[ERROR 400] \"key\" is invalid".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn fetch_without_api_key_fails_fast() {
        let client = PixabayClient::new(PixabaySettings::default()).expect("client");
        let result = client.fetch_images(request("cats", 1)).await;
        assert_eq!(result, Err(SearchError::MissingApiKey));
    }

    #[tokio::test]
    async fn fetch_against_unreachable_host_is_network_error() {
        let settings = PixabaySettings {
            api_key: Some("KEY".to_string()),
            base_url: "http://127.0.0.1:9/api/".to_string(),
            timeout: Duration::from_secs(2),
            ..PixabaySettings::default()
        };
        let client = PixabayClient::new(settings).expect("client");
        let result = client.fetch_images(request("cats", 1)).await;
        assert!(matches!(result, Err(SearchError::Network(_))));
    }

    #[tokio::test]
    async fn download_from_unreachable_host_is_network_error() {
        let client = PixabayClient::new(PixabaySettings::default()).expect("client");
        let result = client
            .fetch_image_bytes("http://127.0.0.1:9/image.jpg".to_string())
            .await;
        assert!(matches!(result, Err(SearchError::Network(_))));
    }
}
