//! # media-deck
//!
//! Turn a folder of images and videos into a paginated media-grid deck.
//! Your filesystem is the data source: media files become deck entries in
//! deterministic order, six to a page, laid out in fixed grids with
//! aspect-ratio-preserving, centered boxes.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! media-deck processes content through three independent stages:
//!
//! ```text
//! 1. Scan      media/    →  manifest.json   (filesystem → ordered media items)
//! 2. Compose   manifest  →  pages           (layout engine: boxes per item)
//! 3. Encode    pages     →  deck.json       (output document)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest and deck are human-readable JSON you can inspect.
//! - **Testability**: compose is a pure function from items to pages, so unit
//!   tests exercise the layout engine without touching the filesystem.
//! - **Replaceable edges**: scanning and encoding are collaborators behind
//!   small seams ([`compose::ByteReader`], [`encode::DocumentEncoder`]);
//!   the layout core never does I/O.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the media directory, produces the ordered scan manifest |
//! | [`compose`] | Stage 2 — paginates items and drives the layout engine per page |
//! | [`encode`] | Stage 3 — serializes the page sequence to the output deck document |
//! | [`layout`] | Pure geometry: grid shapes, contain-fit placement, PNG header sizing |
//! | [`config`] | `config.toml` loading plus the immutable [`config::CanvasSpec`] page geometry |
//! | [`types`] | Shared types serialized between stages (`MediaItem`, `Page`, `LayoutBox`) |
//! | [`output`] | CLI output formatting — display of pipeline results and diagnostics |
//!
//! # Design Decisions
//!
//! ## Fixed Grid Shapes
//!
//! Item counts 1–6 map to a fixed lookup of grid shapes (1×1 up to 3×2).
//! Five items deliberately leave one empty cell in a 3×2 grid instead of an
//! asymmetric 3+2 arrangement: predictable output beats density at this page
//! cap. The table is a contract, not a packing heuristic — see
//! [`layout::grid::plan`].
//!
//! ## PNG-Only Header Sizing
//!
//! Only PNG files get true intrinsic dimensions, read straight from the IHDR
//! chunk at fixed byte offsets. Every other format — all videos included —
//! is assumed 1920×1080 (16:9). Contain-fit scaling keeps even a wrong
//! assumption safe: boxes never overflow their cells, only the centering is
//! approximate. Full decoders would add heavy dependencies for marginal
//! layout gain.
//!
//! ## Explicit Canvas Value
//!
//! Page geometry (canvas size, title band, margins, item cap) lives in one
//! immutable [`config::CanvasSpec`] value passed into each call — no process
//! globals, so tests can lay out against any geometry they like.

pub mod compose;
pub mod config;
pub mod encode;
pub mod layout;
pub mod output;
pub mod scan;
pub mod types;
