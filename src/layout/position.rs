//! Pure box-placement math: contain-fit scaling and cell centering.
//!
//! All functions here are pure and testable without any I/O or media files.

use super::{GridShape, LayoutError};
use crate::config::CanvasSpec;
use crate::types::LayoutBox;

/// Compute one centered, contain-fit bounding box per aspect ratio.
///
/// Items are placed row-major into the grid. Each box preserves its aspect
/// ratio, touches at least one cell bound, never exceeds either, and is
/// centered inside its cell. A single item in a 1×1 grid gets the entire
/// available area as its cell.
///
/// # Errors
///
/// Empty input or more aspects than the grid has cells is a caller-contract
/// violation.
pub fn layout_boxes(
    aspects: &[f64],
    shape: GridShape,
    canvas: &CanvasSpec,
) -> Result<Vec<LayoutBox>, LayoutError> {
    if aspects.is_empty() {
        return Err(LayoutError::InvalidItemCount(0));
    }
    if aspects.len() > shape.capacity() {
        return Err(LayoutError::TooManyItems {
            given: aspects.len(),
            capacity: shape.capacity(),
        });
    }

    let available_width = canvas.width - 2.0 * canvas.margin;
    let available_height = canvas.height - canvas.title_height - 2.0 * canvas.margin;

    let columns = shape.columns as f64;
    let rows = shape.rows as f64;
    let cell_width = (available_width - canvas.spacing * (columns - 1.0)) / columns;
    let cell_height = (available_height - canvas.spacing * (rows - 1.0)) / rows;

    let boxes = aspects
        .iter()
        .enumerate()
        .map(|(i, &aspect)| {
            let row = (i / shape.columns) as f64;
            let col = (i % shape.columns) as f64;

            // Contain-fit: width-bound first, rescale by height if it overflows
            let mut width = cell_width;
            let mut height = cell_width / aspect;
            if height > cell_height {
                height = cell_height;
                width = cell_height * aspect;
            }

            let cell_x = canvas.margin + col * (cell_width + canvas.spacing);
            let cell_y = canvas.title_height + canvas.margin + row * (cell_height + canvas.spacing);

            LayoutBox {
                x: cell_x + (cell_width - width) / 2.0,
                y: cell_y + (cell_height - height) / 2.0,
                width,
                height,
                aspect_ratio: aspect,
            }
        })
        .collect();

    Ok(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::grid::plan;

    const EPS: f64 = 1e-6;

    fn boxes_for(aspects: &[f64], canvas: &CanvasSpec) -> Vec<LayoutBox> {
        let shape = plan(aspects.len()).unwrap();
        layout_boxes(aspects, shape, canvas).unwrap()
    }

    fn overlap(a: &LayoutBox, b: &LayoutBox) -> bool {
        a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
    }

    #[test]
    fn single_item_gets_full_available_area() {
        let canvas = CanvasSpec::default();
        // Square item in the 9.4 x 5.9 available area: height binds
        let boxes = boxes_for(&[1.0], &canvas);
        assert_eq!(boxes.len(), 1);
        let b = &boxes[0];
        assert!((b.height - 5.9).abs() < EPS);
        assert!((b.width - 5.9).abs() < EPS);
        // Centered horizontally inside the full available width
        assert!((b.x - (0.3 + (9.4 - 5.9) / 2.0)).abs() < EPS);
        assert!((b.y - 1.3).abs() < EPS);
    }

    #[test]
    fn contain_fit_binds_exactly_one_dimension() {
        let canvas = CanvasSpec::default();
        let aspects = [2.0, 16.0 / 9.0, 1.0, 0.5, 0.75, 3.0];
        let shape = plan(aspects.len()).unwrap();
        let boxes = layout_boxes(&aspects, shape, &canvas).unwrap();

        let cell_width = (9.4 - 0.2 * 2.0) / 3.0;
        let cell_height = (5.9 - 0.2) / 2.0;

        for (b, &aspect) in boxes.iter().zip(&aspects) {
            assert!((b.width / b.height - aspect).abs() < EPS);
            assert!(b.width <= cell_width + EPS);
            assert!(b.height <= cell_height + EPS);
            let width_tight = (b.width - cell_width).abs() < EPS;
            let height_tight = (b.height - cell_height).abs() < EPS;
            assert!(width_tight || height_tight, "no binding dimension for {aspect}");
        }
    }

    #[test]
    fn boxes_are_pairwise_disjoint() {
        let canvas = CanvasSpec::default();
        for count in 2..=6 {
            let aspects: Vec<f64> = (0..count).map(|i| 0.5 + i as f64 * 0.4).collect();
            let boxes = boxes_for(&aspects, &canvas);
            for i in 0..boxes.len() {
                for j in (i + 1)..boxes.len() {
                    assert!(
                        !overlap(&boxes[i], &boxes[j]),
                        "boxes {i} and {j} overlap for count {count}"
                    );
                }
            }
        }
    }

    #[test]
    fn boxes_stay_inside_canvas_below_title_band() {
        let canvas = CanvasSpec::default();
        for count in 1..=6 {
            let aspects = vec![16.0 / 9.0; count];
            for b in boxes_for(&aspects, &canvas) {
                assert!(b.x >= canvas.margin - EPS);
                assert!(b.y >= canvas.title_height + canvas.margin - EPS);
                assert!(b.x + b.width <= canvas.width - canvas.margin + EPS);
                assert!(b.y + b.height <= canvas.height - canvas.margin + EPS);
            }
        }
    }

    #[test]
    fn wide_item_centers_vertically_in_cell() {
        // A 3.6 x 4.1 canvas gives a single 3.0 x 2.5 cell. An aspect-2.0
        // item fills the width (3.0 x 1.5) and centers with 0.5in above
        // and below, flush with the cell horizontally.
        let canvas = CanvasSpec {
            width: 3.6,
            height: 4.1,
            ..CanvasSpec::default()
        };
        let boxes = boxes_for(&[2.0], &canvas);
        let b = &boxes[0];
        assert!((b.width - 3.0).abs() < EPS);
        assert!((b.height - 1.5).abs() < EPS);
        assert!((b.x - 0.3).abs() < EPS);
        assert!((b.y - (1.0 + 0.3 + 0.5)).abs() < EPS);
    }

    #[test]
    fn row_major_ordering() {
        let canvas = CanvasSpec::default();
        let boxes = boxes_for(&[1.0; 6], &canvas);
        // First row of three shares a y-band above the second row
        assert!((boxes[0].y - boxes[1].y).abs() < EPS);
        assert!((boxes[1].y - boxes[2].y).abs() < EPS);
        assert!(boxes[3].y > boxes[2].y);
        // Columns increase left to right
        assert!(boxes[0].x < boxes[1].x);
        assert!(boxes[1].x < boxes[2].x);
    }

    #[test]
    fn five_items_occupy_first_five_cells() {
        let canvas = CanvasSpec::default();
        let boxes = boxes_for(&[1.0; 5], &canvas);
        assert_eq!(boxes.len(), 5);
        // Fifth item sits in the second row, second column
        assert!(boxes[4].y > boxes[2].y);
        assert!(boxes[4].x > boxes[3].x);
    }

    #[test]
    fn empty_input_is_error() {
        let canvas = CanvasSpec::default();
        let shape = plan(1).unwrap();
        assert_eq!(
            layout_boxes(&[], shape, &canvas),
            Err(LayoutError::InvalidItemCount(0))
        );
    }

    #[test]
    fn too_many_aspects_for_shape_is_error() {
        let canvas = CanvasSpec::default();
        let shape = plan(2).unwrap();
        assert_eq!(
            layout_boxes(&[1.0, 1.0, 1.0], shape, &canvas),
            Err(LayoutError::TooManyItems {
                given: 3,
                capacity: 2
            })
        );
    }
}
