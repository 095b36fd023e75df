//! Page composition.
//!
//! Stage 2 of the media-deck pipeline. Takes the ordered media list from the
//! scan stage, partitions it into pages of at most six items, resolves each
//! item's intrinsic dimensions, and drives the layout engine to produce the
//! final [`Page`] sequence for the encoder.
//!
//! ## Dimension resolution
//!
//! File bytes are read through the [`ByteReader`] trait so tests can swap in
//! a mock without touching the filesystem. Read failures are not fatal: an
//! unreadable file gets the stock default dimensions and a recorded
//! diagnostic. Resolution for the items of one chunk runs in parallel with
//! [rayon](https://docs.rs/rayon); all of a page's aspect ratios must be known
//! before its layout pass, so the parallelism stays within the chunk.

use crate::config::CanvasSpec;
use crate::layout::{self, LayoutError, grid, position};
use crate::types::{DimensionSource, Dimensions, MediaItem, Page, PageEntry};
use rayon::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Message carried by the single placeholder page for an empty media list.
pub const PLACEHOLDER_MESSAGE: &str = "No Media Files Found";

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Byte access for dimension resolution.
///
/// `Sync` so rayon can resolve items of a chunk in parallel. A failed read
/// means "no bytes available" and triggers the default-dimensions fallback;
/// it never aborts a page.
pub trait ByteReader: Sync {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Production reader: plain filesystem reads relative to a root directory.
pub struct FsReader {
    root: std::path::PathBuf,
}

impl FsReader {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ByteReader for FsReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.root.join(path))
    }
}

/// Compose the full item list into pages.
///
/// Items are chunked in order: page `k` holds items `[6k, min(6k+6, N))`.
/// An empty list yields exactly one placeholder page. Page count is
/// `max(1, ceil(N / 6))`, emitted in increasing index order.
pub fn compose(
    items: &[MediaItem],
    canvas: &CanvasSpec,
    reader: &impl ByteReader,
) -> Result<Vec<Page>, ComposeError> {
    if items.is_empty() {
        return Ok(vec![Page::Placeholder {
            message: PLACEHOLDER_MESSAGE.to_string(),
        }]);
    }

    items
        .chunks(canvas.max_items_per_page)
        .enumerate()
        .map(|(index, chunk)| compose_page(index, chunk, canvas, reader))
        .collect()
}

fn compose_page(
    index: usize,
    chunk: &[MediaItem],
    canvas: &CanvasSpec,
    reader: &impl ByteReader,
) -> Result<Page, ComposeError> {
    let resolved: Vec<(Dimensions, DimensionSource)> = chunk
        .par_iter()
        .map(|item| resolve_dimensions(item, canvas, reader))
        .collect();

    let aspects: Vec<f64> = resolved.iter().map(|(d, _)| d.aspect_ratio()).collect();
    let shape = grid::plan(chunk.len())?;
    let boxes = position::layout_boxes(&aspects, shape, canvas)?;

    let entries = chunk
        .iter()
        .zip(resolved)
        .zip(boxes)
        .map(|((item, (dimensions, dimension_source)), rect)| PageEntry {
            item: item.clone(),
            dimensions,
            dimension_source,
            rect,
        })
        .collect();

    Ok(Page::Grid {
        index,
        title: format!("Media Collection - Page {}", index + 1),
        entries,
    })
}

/// Resolve one item's intrinsic dimensions, degrading to the canvas default
/// when the file cannot be read.
fn resolve_dimensions(
    item: &MediaItem,
    canvas: &CanvasSpec,
    reader: &impl ByteReader,
) -> (Dimensions, DimensionSource) {
    match reader.read(&item.path) {
        Ok(bytes) => {
            layout::intrinsic_dimensions(&bytes, &item.extension, canvas.default_dimensions)
        }
        Err(_) => (canvas.default_dimensions, DimensionSource::Fallback),
    }
}
