//! Dynamic-programming row breaker.
//!
//! Every order-preserving partition of the item sequence is a candidate.
//! The search minimizes the summed squared deviation of each row's natural
//! height from the target height. `dp[i]` holds the cheapest layout of the
//! first `i` items and `parent[i]` the start of its last row.
//!
//! Scanning back from `i`, each added item makes the candidate row shorter, so
//! the scan stops once a row drops below the tolerance floor. The immediate
//! predecessor is always admitted, even when a single item is already below
//! the floor, which keeps every prefix reachable. Worst case is O(N²).

use crate::error::Result;
use crate::geometry::Dimensions;

use super::rows::{LayoutParams, LayoutResult, Row, aspect_ratios, degenerate_rows, finalize};

/// Counters describing how much of the partition space a search explored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate rows whose cost was evaluated.
    pub candidates: u64,
    /// Backward scans cut short by the tolerance floor.
    pub pruned: u64,
    /// Prefixes that had no finite transition and were forced onto `i - 1`.
    pub fallbacks: u64,
}

/// Lay out `items` with the justified optimizer.
pub fn justify<I: Dimensions>(params: &LayoutParams, items: &[I]) -> Result<LayoutResult> {
    justify_with_stats(params, items).map(|(result, _)| result)
}

/// Same as [`justify`] but also reports search counters.
pub fn justify_with_stats<I: Dimensions>(
    params: &LayoutParams,
    items: &[I],
) -> Result<(LayoutResult, SearchStats)> {
    params.validate()?;
    let aspects = aspect_ratios(params, items)?;

    if params.viewport_width == 0.0 {
        let result = finalize(&degenerate_rows(aspects.len()), &aspects);
        return Ok((result, SearchStats::default()));
    }

    let (rows, stats) = break_rows(params, &aspects);
    Ok((finalize(&rows, &aspects), stats))
}

fn row_cost(row_height: f64, items_in_row: usize, target: f64) -> f64 {
    let mut cost = (row_height - target).powi(2);
    // Solo rows are only penalized when they would render taller than target.
    if items_in_row == 1 && row_height > target {
        cost += 2.0 * target * target;
    }
    cost
}

fn break_rows(params: &LayoutParams, aspects: &[f64]) -> (Vec<Row>, SearchStats) {
    let count = aspects.len();
    let viewport = params.viewport_width;
    let target = params.target_height;
    let min_height = params.min_row_height();
    let fallback_penalty = (10.0 * target).powi(2);

    let mut stats = SearchStats::default();
    let mut dp = vec![f64::INFINITY; count + 1];
    let mut parent = vec![0usize; count + 1];
    dp[0] = 0.0;

    for i in 1..=count {
        let mut aspect_sum = 0.0;

        for j in (0..i).rev() {
            aspect_sum += aspects[j];
            let row_height = viewport / aspect_sum;

            if row_height < min_height && j != i - 1 {
                stats.pruned += 1;
                break;
            }

            stats.candidates += 1;
            let total = dp[j] + row_cost(row_height, i - j, target);
            if total < dp[i] {
                dp[i] = total;
                parent[i] = j;
            }
        }

        if !dp[i].is_finite() {
            stats.fallbacks += 1;
            parent[i] = i - 1;
            dp[i] = dp[i - 1] + fallback_penalty;
        }
    }

    let mut rows = Vec::new();
    let mut end = count;
    while end > 0 {
        let start = parent[end];
        let aspect_sum: f64 = aspects[start..end].iter().sum();
        rows.push(Row {
            start,
            end,
            height: viewport / aspect_sum,
        });
        end = start;
    }
    rows.reverse();

    (rows, stats)
}
