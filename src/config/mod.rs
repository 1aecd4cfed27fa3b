// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[search]` - Image search service settings (API key, paging, filters)
//! - `[gallery]` - Thumbnail grid settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Values outside the supported range are clamped
//! let per_page = config.search.effective_per_page();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[search] api_key`.
pub const ENV_API_KEY: &str = "ICED_GALLERY_API_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Image search service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Pixabay API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Search endpoint.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Results requested per page.
    #[serde(default = "default_per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Image type filter (`all`, `photo`, `illustration`, `vector`).
    #[serde(default = "default_image_type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,

    /// Orientation filter (`all`, `horizontal`, `vertical`).
    #[serde(
        default = "default_orientation",
        skip_serializing_if = "Option::is_none"
    )]
    pub orientation: Option<String>,

    /// Only return images suitable for all ages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_search: Option<bool>,

    /// HTTP timeout for one request, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            per_page: default_per_page(),
            image_type: default_image_type(),
            orientation: default_orientation(),
            safe_search: Some(false),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SearchConfig {
    /// Page size clamped to the range the API accepts.
    #[must_use]
    pub fn effective_per_page(&self) -> u32 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(MIN_PER_PAGE, MAX_PER_PAGE)
    }

    /// Request timeout clamped to sane bounds.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_SEARCH_BASE_URL)
    }

    #[must_use]
    pub fn effective_image_type(&self) -> &str {
        self.image_type.as_deref().unwrap_or(DEFAULT_IMAGE_TYPE)
    }

    #[must_use]
    pub fn effective_orientation(&self) -> &str {
        self.orientation.as_deref().unwrap_or(DEFAULT_ORIENTATION)
    }

    /// Resolves the API key.
    ///
    /// # Resolution Order
    ///
    /// 1. `cli_key` (from `--api-key`)
    /// 2. `ICED_GALLERY_API_KEY` environment variable
    /// 3. `[search] api_key` from the settings file
    ///
    /// Blank values are skipped.
    #[must_use]
    pub fn resolve_api_key(&self, cli_key: Option<String>) -> Option<String> {
        let env_key = std::env::var(ENV_API_KEY).ok();
        [cli_key, env_key, self.api_key.clone()]
            .into_iter()
            .flatten()
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

/// Thumbnail grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Thumbnail cell width in logical pixels.
    #[serde(
        default = "default_thumbnail_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_width: Option<u32>,

    /// Thumbnail cell height in logical pixels.
    #[serde(
        default = "default_thumbnail_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_height: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: default_thumbnail_width(),
            thumbnail_height: default_thumbnail_height(),
        }
    }
}

impl GalleryConfig {
    /// Thumbnail cell size `(width, height)` clamped to sane bounds.
    #[must_use]
    pub fn thumbnail_size(&self) -> (f32, f32) {
        let width = self
            .thumbnail_width
            .unwrap_or(DEFAULT_THUMBNAIL_WIDTH)
            .clamp(MIN_THUMBNAIL_EDGE, MAX_THUMBNAIL_EDGE);
        let height = self
            .thumbnail_height
            .unwrap_or(DEFAULT_THUMBNAIL_HEIGHT)
            .clamp(MIN_THUMBNAIL_EDGE, MAX_THUMBNAIL_EDGE);
        (width as f32, height as f32)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Image search service settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Thumbnail grid settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_SEARCH_BASE_URL.to_string())
}

fn default_per_page() -> Option<u32> {
    Some(DEFAULT_PER_PAGE)
}

fn default_image_type() -> Option<String> {
    Some(DEFAULT_IMAGE_TYPE.to_string())
}

fn default_orientation() -> Option<String> {
    Some(DEFAULT_ORIENTATION.to_string())
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_thumbnail_width() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_WIDTH)
}

fn default_thumbnail_height() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_HEIGHT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            search: SearchConfig {
                api_key: Some("secret".to_string()),
                per_page: Some(40),
                safe_search: Some(true),
                ..SearchConfig::default()
            },
            gallery: GalleryConfig {
                thumbnail_width: Some(200),
                thumbnail_height: Some(150),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[search]\napi_key = \"abc\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.search.api_key.as_deref(), Some("abc"));
        assert_eq!(loaded.search.per_page, Some(DEFAULT_PER_PAGE));
        assert_eq!(loaded.gallery, GalleryConfig::default());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_missing_file_has_no_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_corrupt_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[search\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut saved = Config::default();
        saved.search.per_page = Some(24);
        save_to_path(&saved, &temp_dir.path().join(CONFIG_FILE)).expect("save should succeed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(config.search.effective_per_page(), 24);
    }

    #[test]
    fn per_page_is_clamped_to_api_bounds() {
        let mut search = SearchConfig {
            per_page: Some(1),
            ..SearchConfig::default()
        };
        assert_eq!(search.effective_per_page(), MIN_PER_PAGE);

        search.per_page = Some(10_000);
        assert_eq!(search.effective_per_page(), MAX_PER_PAGE);

        search.per_page = None;
        assert_eq!(search.effective_per_page(), DEFAULT_PER_PAGE);
    }

    #[test]
    fn request_timeout_defaults_to_fifteen_seconds() {
        assert_eq!(
            SearchConfig::default().request_timeout(),
            Duration::from_secs(15)
        );
    }

    #[test]
    fn blank_base_url_uses_default_endpoint() {
        let search = SearchConfig {
            base_url: Some("  ".to_string()),
            ..SearchConfig::default()
        };
        assert_eq!(search.effective_base_url(), DEFAULT_SEARCH_BASE_URL);
    }

    #[test]
    fn cli_api_key_takes_priority() {
        let search = SearchConfig {
            api_key: Some("from-file".to_string()),
            ..SearchConfig::default()
        };
        assert_eq!(
            search.resolve_api_key(Some("from-cli".to_string())).as_deref(),
            Some("from-cli")
        );
    }

    #[test]
    fn thumbnail_size_is_clamped() {
        let gallery = GalleryConfig {
            thumbnail_width: Some(1),
            thumbnail_height: Some(100_000),
        };
        assert_eq!(
            gallery.thumbnail_size(),
            (MIN_THUMBNAIL_EDGE as f32, MAX_THUMBNAIL_EDGE as f32)
        );
    }
}
