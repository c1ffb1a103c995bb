use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Dimensions;

use super::justified::{SearchStats, justify_with_stats};
use super::naive::pack;
use super::rows::{LayoutParams, LayoutResult};

/// Row-breaking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Greedy single pass, see [`pack`].
    Naive,
    /// Global optimum over row partitions, see [`super::justify`].
    #[default]
    Justified,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Justified => "justified",
        }
    }
}

/// Dispatch to the selected strategy.
pub fn compute<I: Dimensions>(
    strategy: Strategy,
    params: &LayoutParams,
    items: &[I],
) -> Result<LayoutResult> {
    compute_with_stats(strategy, params, items).map(|(result, _)| result)
}

/// Dispatch and report search counters. The greedy packer evaluates one
/// candidate per item and never prunes.
pub fn compute_with_stats<I: Dimensions>(
    strategy: Strategy,
    params: &LayoutParams,
    items: &[I],
) -> Result<(LayoutResult, SearchStats)> {
    match strategy {
        Strategy::Naive => {
            let result = pack(params, items)?;
            let stats = SearchStats {
                candidates: items.len() as u64,
                ..SearchStats::default()
            };
            Ok((result, stats))
        }
        Strategy::Justified => justify_with_stats(params, items),
    }
}
