//! Deck configuration module.
//!
//! Two kinds of settings live here, deliberately kept apart:
//!
//! - [`CanvasSpec`] — the fixed page geometry (canvas size, title band,
//!   margins, spacing, per-page item cap, stock dimensions). These are not
//!   runtime-configurable; they exist as an explicit immutable value passed
//!   into each component call rather than as process-wide state.
//! - [`DeckConfig`] — user-facing settings loaded from an optional
//!   `config.toml` in the source directory: the recognized image/video
//!   extension lists and parallel-processing limits.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [formats]
//! images = ["jpg", "jpeg", "png", "gif", "bmp", "webp"]
//! videos = ["mp4", "avi", "mov", "wmv", "flv", "webm"]
//!
//! [processing]
//! max_threads = 4   # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::types::{Dimensions, MediaKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Fixed page geometry, in inches.
///
/// One immutable value describes every page of a deck. Components receive it
/// by reference; nothing mutates it after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    /// Band at the top of each page reserved for the title text.
    pub title_height: f64,
    /// Outer margin on all four sides of the item area.
    pub margin: f64,
    /// Gap between adjacent grid cells.
    pub spacing: f64,
    /// Upper bound on items per page; overflow paginates.
    pub max_items_per_page: usize,
    /// Dimensions assumed when a file's true size cannot be determined.
    pub default_dimensions: Dimensions,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 7.5,
            title_height: 1.0,
            margin: 0.3,
            spacing: 0.2,
            max_items_per_page: 6,
            default_dimensions: Dimensions {
                width: 1920,
                height: 1080,
            },
        }
    }
}

/// Deck configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Recognized file extensions per media kind.
    pub formats: FormatsConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl DeckConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.formats.images.is_empty() && self.formats.videos.is_empty() {
            return Err(ConfigError::Validation(
                "formats.images and formats.videos must not both be empty".into(),
            ));
        }
        for ext in self.formats.images.iter().chain(&self.formats.videos) {
            if ext.starts_with('.') || ext.chars().any(|c| c.is_ascii_uppercase()) {
                return Err(ConfigError::Validation(format!(
                    "format extensions must be lowercase without a dot: {ext:?}"
                )));
            }
        }
        if let Some(dup) = self
            .formats
            .images
            .iter()
            .find(|e| self.formats.videos.contains(e))
        {
            return Err(ConfigError::Validation(format!(
                "extension {dup:?} listed as both image and video"
            )));
        }
        Ok(())
    }
}

/// Recognized file extensions, lowercase without dots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatsConfig {
    pub images: Vec<String>,
    pub videos: Vec<String>,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            images: ["jpg", "jpeg", "png", "gif", "bmp", "webp"]
                .map(String::from)
                .to_vec(),
            videos: ["mp4", "avi", "mov", "wmv", "flv", "webm"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl FormatsConfig {
    /// Classify a lowercased extension, or `None` for unrecognized formats.
    pub fn classify(&self, extension: &str) -> Option<MediaKind> {
        if self.images.iter().any(|e| e == extension) {
            Some(MediaKind::Image)
        } else if self.videos.iter().any(|e| e == extension) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel dimension-resolution workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_threads: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_threads.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults when no file exists; rejects unknown keys and
/// validates the result.
pub fn load_config(root: &Path) -> Result<DeckConfig, ConfigError> {
    let path = root.join("config.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        DeckConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# media-deck Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the media source directory. Unknown keys will cause
# an error.

# ---------------------------------------------------------------------------
# Recognized formats
# ---------------------------------------------------------------------------
# Extensions are lowercase, without the leading dot. Files with other
# extensions are skipped during scan.
[formats]
images = ["jpg", "jpeg", "png", "gif", "bmp", "webp"]
videos = ["mp4", "avi", "mov", "wmv", "flv", "webm"]

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel dimension-resolution workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_threads = 4
"##
}
