//! Deck encoding.
//!
//! Stage 3 of the media-deck pipeline. The compositor hands over the final
//! page sequence; an encoder serializes it to the output artifact. The
//! [`DocumentEncoder`] trait is the seam — the rest of the pipeline never
//! cares about the output format.
//!
//! The shipped implementation is [`JsonEncoder`]: a pretty-printed JSON deck
//! document holding the canvas spec and every page with its titles, source
//! paths, and boxes in canvas inches. Downstream tools (a slide renderer, a
//! PDF generator) consume the document; this crate does not render pixels.
//!
//! Encoding is all-or-nothing: the encoder writes to a temporary sibling and
//! renames on success, so a failed run never leaves a partial deck behind.

use crate::config::CanvasSpec;
use crate::types::Page;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializes a composed page sequence to an output document.
///
/// Failures propagate and abort the run; there is no partial-success
/// guarantee below this seam.
pub trait DocumentEncoder {
    fn encode(&self, pages: &[Page], canvas: &CanvasSpec, out: &Path) -> Result<(), EncodeError>;
}

/// The serialized deck document.
#[derive(Serialize)]
struct DeckDocument<'a> {
    canvas: &'a CanvasSpec,
    pages: &'a [Page],
}

/// JSON deck encoder with atomic writes.
#[derive(Debug, Default)]
pub struct JsonEncoder;

impl DocumentEncoder for JsonEncoder {
    fn encode(&self, pages: &[Page], canvas: &CanvasSpec, out: &Path) -> Result<(), EncodeError> {
        let document = DeckDocument { canvas, pages };
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = out.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename keeps the published path all-or-nothing
        let tmp = tmp_path(out);
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, out)?;
        Ok(())
    }
}

fn tmp_path(out: &Path) -> std::path::PathBuf {
    let mut name = out.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    out.with_file_name(name)
}
