//! Shared types used across all pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → compose → encode)
//! and must be identical across all three modules.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Broad media category, derived from the file extension at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// One media file discovered by the scan stage.
///
/// Immutable once created; list order is significant and preserved through
/// composition and encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Path to the source file (relative to the scan root in manifests).
    pub path: PathBuf,
    /// Display name (the file name).
    pub name: String,
    pub kind: MediaKind,
    /// Lowercased extension without the dot, e.g. `"png"`, `"mp4"`.
    pub extension: String,
}

/// Intrinsic pixel dimensions of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Where an item's dimensions came from.
///
/// `Fallback` is the diagnostic case: the item should have been parseable
/// but could not be read or decoded, so the stock default was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionSource {
    /// Parsed from the PNG IHDR chunk.
    PngHeader,
    /// Format has no header parser; the stock default applies.
    Unparsed,
    /// Unreadable or malformed bytes; the stock default was substituted.
    Fallback,
}

/// A positioned bounding box on the canvas, in inches.
///
/// Invariant: `width / height == aspect_ratio` within floating tolerance,
/// and the box lies entirely inside its grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub aspect_ratio: f64,
}

/// One media item paired with its computed box on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    pub item: MediaItem,
    pub dimensions: Dimensions,
    pub dimension_source: DimensionSource,
    #[serde(rename = "box")]
    pub rect: LayoutBox,
}

/// One output page, built once by the compositor and never mutated.
///
/// An empty item list produces a single `Placeholder` page carrying only an
/// informational message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Grid {
        /// 0-based page index; pages are emitted in increasing order.
        index: usize,
        title: String,
        entries: Vec<PageEntry>,
    },
    Placeholder {
        message: String,
    },
}

impl Page {
    /// Entries on this page (empty for placeholder pages).
    pub fn entries(&self) -> &[PageEntry] {
        match self {
            Page::Grid { entries, .. } => entries,
            Page::Placeholder { .. } => &[],
        }
    }
}
