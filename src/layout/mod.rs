//! The layout engine — pure geometry, no I/O.
//!
//! | Concern | Module |
//! |---|---|
//! | **Grid selection** | [`grid`] — item count → fixed (columns, rows) shape |
//! | **Box placement** | [`position`] — contain-fit, centered boxes per cell |
//! | **Intrinsic size** | [`dimensions`] — PNG header parse with stock fallback |
//!
//! Grid and position functions are pure, synchronous, and deterministic;
//! callers may run them concurrently across independent pages. Dimension
//! extraction works on raw bytes and never fails.

pub mod dimensions;
pub mod grid;
pub mod position;

pub use dimensions::intrinsic_dimensions;
pub use grid::{GridShape, plan};
pub use position::layout_boxes;

use thiserror::Error;

/// Caller-contract violations in the layout engine.
///
/// These mark programming errors, not user errors: the page compositor
/// guarantees every chunk it lays out has between 1 and 6 items.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("item count {0} outside the supported range 1..=6")]
    InvalidItemCount(usize),
    #[error("{given} items exceed grid capacity {capacity}")]
    TooManyItems { given: usize, capacity: usize },
}
