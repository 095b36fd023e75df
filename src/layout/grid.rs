//! Fixed grid shapes for 1–6 items per page.
//!
//! A tagged lookup, not a packing solver: each item count maps to one
//! documented shape, chosen for visual predictability at the page cap of 6.
//! Five items intentionally leave one empty cell in a 3×2 grid rather than
//! switching to an asymmetric 3+2 arrangement.

use super::LayoutError;

/// Grid shape for one page: `columns × rows` cells, filled row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
}

impl GridShape {
    /// Total number of cells.
    pub fn capacity(self) -> usize {
        self.columns * self.rows
    }
}

/// Map an item count to its grid shape.
///
/// | count | columns | rows |
/// |---|---|---|
/// | 1 | 1 | 1 |
/// | 2 | 2 | 1 |
/// | 3 | 3 | 1 |
/// | 4 | 2 | 2 |
/// | 5 | 3 | 2 |
/// | 6 | 3 | 2 |
///
/// Zero or more than six items is a caller-contract violation.
pub fn plan(count: usize) -> Result<GridShape, LayoutError> {
    let (columns, rows) = match count {
        1 => (1, 1),
        2 => (2, 1),
        3 => (3, 1),
        4 => (2, 2),
        5 | 6 => (3, 2),
        _ => return Err(LayoutError::InvalidItemCount(count)),
    };
    Ok(GridShape { columns, rows })
}
