//! Shared row math for both strategies: parameter validation, the row
//! partition type, and the finalization pass that turns a partition into
//! placements.

use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::geometry::{Dimensions, Placement};

/// Fractional tolerance band used when no scale factor is supplied.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.1;

/// Scalar inputs shared by every strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub viewport_width: f64,
    pub target_height: f64,
    pub scale_factor: f64,
}

impl LayoutParams {
    pub const fn new(viewport_width: f64, target_height: f64) -> Self {
        Self {
            viewport_width,
            target_height,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }

    pub const fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Upper edge of the tolerance band.
    pub fn max_row_height(&self) -> f64 {
        self.target_height * (1.0 + self.scale_factor)
    }

    /// Lower edge of the tolerance band.
    pub fn min_row_height(&self) -> f64 {
        self.target_height * (1.0 - self.scale_factor)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.viewport_width.is_finite() || self.viewport_width < 0.0 {
            return Err(LayoutError::params(format!(
                "viewport width must be finite and >= 0, got {}",
                self.viewport_width
            )));
        }
        if !self.target_height.is_finite() || self.target_height <= 0.0 {
            return Err(LayoutError::params(format!(
                "target height must be finite and > 0, got {}",
                self.target_height
            )));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= -1.0 {
            return Err(LayoutError::params(format!(
                "scale factor must be finite and > -1, got {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}

/// Validate every item up front and return their aspect ratios.
///
/// Besides positive finite sides, each ratio must be finite and non-zero,
/// and neither a solo row (`viewport / aspect`) nor the scaled widths
/// (`max_row_height * Σaspect`) may overflow. Past this point no row math
/// can produce a non-finite value.
pub(crate) fn aspect_ratios<I: Dimensions>(
    params: &LayoutParams,
    items: &[I],
) -> Result<Vec<f64>> {
    let max_height = params.max_row_height();
    let mut sum = 0.0;
    let mut aspects = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let (width, height) = (item.width(), item.height());
        let sides_ok = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        let aspect = if sides_ok { item.aspect_ratio() } else { f64::NAN };
        sum += aspect;

        let valid = aspect.is_finite()
            && aspect > 0.0
            && (params.viewport_width / aspect).is_finite()
            && (max_height * sum).is_finite();
        if !valid {
            return Err(LayoutError::InvalidItem {
                index,
                width,
                height,
            });
        }
        aspects.push(aspect);
    }

    Ok(aspects)
}

/// Contiguous `[start, end)` slice of the item sequence rendered at one height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Row {
    pub start: usize,
    pub end: usize,
    pub height: f64,
}

impl Row {
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Zero-width containers collapse everything into one terminal row whose
/// natural height is `0 / Σaspect = 0`.
pub(crate) fn degenerate_rows(count: usize) -> Vec<Row> {
    if count == 0 {
        return Vec::new();
    }
    vec![Row {
        start: 0,
        end: count,
        height: 0.0,
    }]
}

/// Materialize a row partition into ordered placements.
pub(crate) fn finalize(rows: &[Row], aspects: &[f64]) -> LayoutResult {
    let mut placements = Vec::with_capacity(aspects.len());
    let mut top = 0.0;

    for (row_index, row) in rows.iter().enumerate() {
        let mut left = 0.0;
        for (index_in_row, aspect) in aspects[row.start..row.end].iter().enumerate() {
            let width = aspect * row.height;
            placements.push(Placement {
                width,
                height: row.height,
                top,
                left,
                index_in_row,
                row_number: row_index + 1,
                items_in_row: row.len(),
            });
            left += width;
        }
        top += row.height;
    }

    LayoutResult {
        placements,
        total_height: top,
        row_count: rows.len(),
    }
}

/// Ordered placements plus aggregate geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    /// Same length and order as the input items.
    pub placements: Vec<Placement>,
    pub total_height: f64,
    /// Exact number of rows produced; zero for an empty item list.
    pub row_count: usize,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterate placements grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Placement]> + '_ {
        let mut rest = self.placements.as_slice();
        std::iter::from_fn(move || {
            let first = rest.first()?;
            let (row, tail) = rest.split_at(first.items_in_row.min(rest.len()));
            rest = tail;
            Some(row)
        })
    }

    /// Height of each row, top to bottom.
    pub fn row_heights(&self) -> Vec<f64> {
        self.rows().map(|row| row[0].height).collect()
    }

    /// Re-attach caller items (and their payloads) to placements by index.
    pub fn pair_with<'a, T>(
        &'a self,
        items: &'a [T],
    ) -> impl Iterator<Item = (&'a T, &'a Placement)> {
        items.iter().zip(self.placements.iter())
    }
}
