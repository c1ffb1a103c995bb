//! Caller-side memoization of layout results.
//!
//! The strategies are pure, so identical inputs can share one result. Inputs
//! are fingerprinted with blake3 over the strategy, the parameters and every
//! item's dimensions; payloads never take part. The cache keeps a bounded
//! number of entries and evicts the oldest first.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use blake3::{Hash, Hasher};

use crate::error::Result;
use crate::geometry::Dimensions;
use crate::layout::{LayoutParams, LayoutResult, SearchStats, Strategy, compute_with_stats};

pub const DEFAULT_CAPACITY: usize = 8;

pub fn fingerprint<I: Dimensions>(strategy: Strategy, params: &LayoutParams, items: &[I]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(strategy.name().as_bytes());
    hasher.update(&params.viewport_width.to_le_bytes());
    hasher.update(&params.target_height.to_le_bytes());
    hasher.update(&params.scale_factor.to_le_bytes());
    hasher.update(&(items.len() as u64).to_le_bytes());
    for item in items {
        hasher.update(&item.width().to_le_bytes());
        hasher.update(&item.height().to_le_bytes());
    }
    hasher.finalize()
}

/// Outcome of [`LayoutCache::get_or_compute`].
#[derive(Debug, Clone)]
pub struct CacheLookup {
    pub result: Arc<LayoutResult>,
    /// Search counters; zeroed on a hit since nothing was searched.
    pub stats: SearchStats,
    pub hit: bool,
}

#[derive(Debug)]
pub struct LayoutCache {
    capacity: usize,
    entries: HashMap<Hash, Arc<LayoutResult>>,
    order: VecDeque<Hash>,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Return the cached result or compute and store it. Failed computations
    /// are never cached.
    pub fn get_or_compute<I: Dimensions>(
        &mut self,
        strategy: Strategy,
        params: &LayoutParams,
        items: &[I],
    ) -> Result<CacheLookup> {
        let key = fingerprint(strategy, params, items);
        if let Some(result) = self.entries.get(&key) {
            return Ok(CacheLookup {
                result: Arc::clone(result),
                stats: SearchStats::default(),
                hit: true,
            });
        }

        let (result, stats) = compute_with_stats(strategy, params, items)?;
        let result = Arc::new(result);
        self.insert(key, Arc::clone(&result));
        Ok(CacheLookup {
            result,
            stats,
            hit: false,
        })
    }

    fn insert(&mut self, key: Hash, result: Arc<LayoutResult>) {
        while self.order.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key);
        self.entries.insert(key, result);
    }
}
