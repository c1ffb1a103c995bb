//! Gutter insets applied inside each placement.
//!
//! Placements tile the container with no gaps. Spacing is carved out of each
//! cell as padding: edges on the container border get the full gap, interior
//! edges get half so neighbours add up to one gap.

use serde::Serialize;

use crate::geometry::{Placement, Rect};
use crate::layout::LayoutResult;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

pub fn insets(placement: &Placement, row_count: usize, gap: f64) -> Insets {
    let half = gap / 2.0;
    let edge = |outer: bool| if outer { gap } else { half };
    Insets {
        top: edge(placement.row_number == 1),
        right: edge(placement.is_row_end()),
        bottom: edge(placement.row_number == row_count),
        left: edge(placement.is_row_start()),
    }
}

/// Rectangle left for content once the gutter is removed. Collapses to zero
/// size rather than going negative when the gap exceeds the cell.
pub fn content_rect(placement: &Placement, row_count: usize, gap: f64) -> Rect {
    let pad = insets(placement, row_count, gap);
    Rect::new(
        placement.left + pad.left,
        placement.top + pad.top,
        (placement.width - pad.horizontal()).max(0.0),
        (placement.height - pad.vertical()).max(0.0),
    )
}

/// Content rectangles for a whole layout, in item order.
pub fn content_rects(result: &LayoutResult, gap: f64) -> Vec<Rect> {
    result
        .placements
        .iter()
        .map(|placement| content_rect(placement, result.row_count, gap))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Item;
    use crate::layout::{LayoutParams, pack};

    fn grid() -> LayoutResult {
        let items = vec![Item::new(300.0, 200.0); 3];
        let params = LayoutParams::new(600.0, 200.0).with_scale_factor(0.0);
        pack(&params, &items).unwrap()
    }

    #[test]
    fn outer_edges_get_full_gap() {
        let result = grid();
        let first = insets(&result.placements[0], result.row_count, 8.0);
        assert_eq!(
            first,
            Insets {
                top: 8.0,
                right: 4.0,
                bottom: 4.0,
                left: 8.0,
            }
        );

        let last = insets(&result.placements[2], result.row_count, 8.0);
        assert_eq!(last.bottom, 8.0);
        assert_eq!(last.left, 8.0);
        assert_eq!(last.right, 8.0);
        assert_eq!(last.top, 4.0);
    }

    #[test]
    fn content_rect_shrinks_by_insets() {
        let result = grid();
        let rects = content_rects(&result, 8.0);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[1], Rect::new(304.0, 8.0, 288.0, 188.0));
    }

    #[test]
    fn oversized_gap_collapses_to_zero() {
        let result = grid();
        let rect = content_rect(&result.placements[0], result.row_count, 1000.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }
}
