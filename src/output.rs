//! CLI output formatting for all pipeline stages.
//!
//! Output is information-centric: the primary display for every entity
//! (media item, page) is its positional index plus name, with details like
//! box geometry and dimension diagnostics as indented context lines.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Media
//! 001 001-dawn.png (image)
//! 002 002-clip.mp4 (video)
//!
//! Found 2 media files
//!
//! Page 001 Media Collection - Page 1 (2 items)
//!     001 001-dawn.png
//!         Box: 0.30, 1.30  4.43 x 2.85 in
//!     002 002-clip.mp4
//!         Box: 5.10, 1.51  4.60 x 2.59 in
//!         Dimensions: stock 1920x1080 (video formats are not probed)
//! ```

use crate::scan::Manifest;
use crate::types::{DimensionSource, MediaKind, Page, PageEntry};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "image",
        MediaKind::Video => "video",
    }
}

/// Format the scan stage result.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Media".to_string()];

    for (pos, item) in manifest.items.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            item.name,
            kind_label(item.kind)
        ));
        let path = item.path.to_string_lossy();
        if path != item.name {
            lines.push(format!("{}Source: {}", indent(1), path));
        }
    }

    lines.push(String::new());
    let n = manifest.items.len();
    lines.push(match n {
        1 => "Found 1 media file".to_string(),
        _ => format!("Found {n} media files"),
    });
    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

/// Format the composed page sequence, including dimension diagnostics.
pub fn format_compose_output(pages: &[Page]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut fallbacks = 0usize;

    for page in pages {
        match page {
            Page::Grid {
                index,
                title,
                entries,
            } => {
                lines.push(format!(
                    "Page {} {} ({} {})",
                    format_index(index + 1),
                    title,
                    entries.len(),
                    if entries.len() == 1 { "item" } else { "items" }
                ));
                for (pos, entry) in entries.iter().enumerate() {
                    lines.extend(format_entry(pos + 1, entry));
                    if entry.dimension_source == DimensionSource::Fallback {
                        fallbacks += 1;
                    }
                }
            }
            Page::Placeholder { message } => {
                lines.push(format!("Page 001 ({message})"));
            }
        }
    }

    if fallbacks > 0 {
        lines.push(String::new());
        lines.push(format!(
            "Warning: {fallbacks} item(s) had unreadable dimensions; stock 16:9 was used"
        ));
    }
    lines
}

fn format_entry(pos: usize, entry: &PageEntry) -> Vec<String> {
    let mut lines = vec![format!("{}{} {}", indent(1), format_index(pos), entry.item.name)];
    let b = &entry.rect;
    lines.push(format!(
        "{}Box: {:.2}, {:.2}  {:.2} x {:.2} in",
        indent(2),
        b.x,
        b.y,
        b.width,
        b.height
    ));
    match entry.dimension_source {
        DimensionSource::PngHeader => {}
        DimensionSource::Unparsed => {
            lines.push(format!(
                "{}Dimensions: stock {}x{} (format not probed)",
                indent(2),
                entry.dimensions.width,
                entry.dimensions.height
            ));
        }
        DimensionSource::Fallback => {
            lines.push(format!(
                "{}Dimensions: stock {}x{} (file unreadable or malformed)",
                indent(2),
                entry.dimensions.width,
                entry.dimensions.height
            ));
        }
    }
    lines
}

/// Print compose output to stdout.
pub fn print_compose_output(pages: &[Page]) {
    for line in format_compose_output(pages) {
        println!("{line}");
    }
}
