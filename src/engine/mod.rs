//! Thin runtime around the pure strategies.
//!
//! `MasonryEngine` binds a validated [`LayoutConfig`] to optional logging,
//! metrics and memoization. The caller supplies the live container width on
//! every call; resize observation and throttling stay with the caller.

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::cache::LayoutCache;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::geometry::{Dimensions, Rect};
use crate::gutter;
use crate::layout::{LayoutResult, SearchStats, compute_with_stats};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{LayoutMetrics, MetricSnapshot};

pub const ENGINE_TARGET: &str = "masonry::engine";
pub const METRICS_TARGET: &str = "masonry::engine.metrics";

pub struct MasonryEngine {
    config: LayoutConfig,
    logger: Option<Logger>,
    metrics: Option<Arc<Mutex<LayoutMetrics>>>,
    cache: Option<Mutex<LayoutCache>>,
}

impl MasonryEngine {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            logger: None,
            metrics: None,
            cache: None,
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn with_metrics(mut self) -> Self {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
        self
    }

    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = Some(Mutex::new(LayoutCache::with_capacity(capacity)));
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let metrics = self.metrics.as_ref()?;
        metrics.lock().ok().map(|guard| guard.snapshot())
    }

    /// Lay out `items` for a container `viewport_width` wide.
    pub fn layout<I: Dimensions>(
        &self,
        viewport_width: f64,
        items: &[I],
    ) -> Result<Arc<LayoutResult>> {
        match self.run(viewport_width, items) {
            Ok((result, stats, hit)) => {
                self.observe_success(viewport_width, &result, &stats, hit);
                Ok(result)
            }
            Err(err) => {
                self.with_metrics_guard(LayoutMetrics::record_failure);
                self.emit(
                    LogLevel::Warn,
                    "layout.rejected",
                    [
                        json_kv("strategy", self.config.strategy.name()),
                        json_kv("viewport_width", viewport_width),
                        json_kv("items", items.len()),
                        json_kv("error", err.to_string()),
                    ],
                );
                Err(err)
            }
        }
    }

    /// Content rectangles for `result` after applying the configured gap.
    pub fn content_rects(&self, result: &LayoutResult) -> Vec<Rect> {
        gutter::content_rects(result, self.config.gap)
    }

    /// Log the current metrics snapshot, if both metrics and logging are on.
    pub fn emit_metrics(&self) {
        let (Some(logger), Some(snapshot)) = (&self.logger, self.metrics_snapshot()) else {
            return;
        };
        let _ = logger.log_event(snapshot.to_log_event(METRICS_TARGET));
    }

    fn run<I: Dimensions>(
        &self,
        viewport_width: f64,
        items: &[I],
    ) -> Result<(Arc<LayoutResult>, SearchStats, bool)> {
        let params = self.config.params(viewport_width);
        let strategy = self.config.strategy;

        if let Some(cache) = &self.cache {
            // A poisoned cache only loses memoized values, so recover it.
            let mut guard = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let lookup = guard.get_or_compute(strategy, &params, items)?;
            return Ok((lookup.result, lookup.stats, lookup.hit));
        }

        let (result, stats) = compute_with_stats(strategy, &params, items)?;
        Ok((Arc::new(result), stats, false))
    }

    fn observe_success(
        &self,
        viewport_width: f64,
        result: &LayoutResult,
        stats: &SearchStats,
        hit: bool,
    ) {
        if hit {
            self.with_metrics_guard(LayoutMetrics::record_cache_hit);
            self.emit(
                LogLevel::Trace,
                "layout.cache_hit",
                [
                    json_kv("viewport_width", viewport_width),
                    json_kv("items", result.len()),
                ],
            );
            return;
        }

        self.with_metrics_guard(|metrics| metrics.record_layout(result, stats));
        self.emit(
            LogLevel::Debug,
            "layout.computed",
            [
                json_kv("strategy", self.config.strategy.name()),
                json_kv("viewport_width", viewport_width),
                json_kv("items", result.len()),
                json_kv("rows", result.row_count),
                json_kv("total_height", json!(result.total_height)),
                json_kv("candidates", stats.candidates),
                json_kv("pruned", stats.pruned),
                json_kv("fallbacks", stats.fallbacks),
            ],
        );
    }

    fn with_metrics_guard(&self, f: impl FnOnce(&mut LayoutMetrics)) {
        if let Some(metrics) = &self.metrics {
            if let Ok(mut guard) = metrics.lock() {
                f(&mut *guard);
            }
        }
    }

    fn emit<const N: usize>(
        &self,
        level: LogLevel,
        message: &str,
        fields: [(String, serde_json::Value); N],
    ) {
        let Some(logger) = &self.logger else {
            return;
        };
        if logger.enabled(level) {
            let _ = logger.log_event(event_with_fields(level, ENGINE_TARGET, message, fields));
        }
    }
}
