//! Greedy left-to-right packer.
//!
//! Items are scaled to the top of the tolerance band and appended to the open
//! row until the row reaches the viewport width. The row is then compressed so
//! it fills the viewport exactly. Decisions are never revisited, so a trailing
//! row that never fills up is emitted at the uncompressed maximum height.

use crate::error::Result;
use crate::geometry::Dimensions;

use super::rows::{LayoutParams, LayoutResult, Row, aspect_ratios, degenerate_rows, finalize};

/// Lay out `items` with the greedy packer.
pub fn pack<I: Dimensions>(params: &LayoutParams, items: &[I]) -> Result<LayoutResult> {
    params.validate()?;
    let aspects = aspect_ratios(params, items)?;

    if params.viewport_width == 0.0 {
        return Ok(finalize(&degenerate_rows(aspects.len()), &aspects));
    }

    Ok(finalize(&break_rows(params, &aspects), &aspects))
}

fn break_rows(params: &LayoutParams, aspects: &[f64]) -> Vec<Row> {
    let viewport = params.viewport_width;
    let max_height = params.max_row_height();

    let mut rows = Vec::new();
    let mut start = 0;
    let mut current_width = 0.0;

    let close = |start: usize, end: usize, current_width: f64| {
        let height = if current_width > viewport {
            viewport / current_width * max_height
        } else {
            max_height
        };
        Row { start, end, height }
    };

    for (index, aspect) in aspects.iter().enumerate() {
        current_width += max_height * aspect;
        if current_width >= viewport {
            rows.push(close(start, index + 1, current_width));
            start = index + 1;
            current_width = 0.0;
        }
    }

    if start < aspects.len() {
        rows.push(close(start, aspects.len(), current_width));
    }

    rows
}
