use crate::layout::{LayoutResult, SearchStats};
use crate::logging::{LogEvent, LogFields, LogLevel};
use serde::Serialize;
use serde_json::json;

/// Running counters across layout invocations.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    layouts: u64,
    failures: u64,
    cache_hits: u64,
    items: u64,
    rows: u64,
    candidates: u64,
    pruned: u64,
    fallbacks: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_layout(&mut self, result: &LayoutResult, stats: &SearchStats) {
        self.layouts = self.layouts.saturating_add(1);
        self.items = self.items.saturating_add(result.len() as u64);
        self.rows = self.rows.saturating_add(result.row_count as u64);
        self.candidates = self.candidates.saturating_add(stats.candidates);
        self.pruned = self.pruned.saturating_add(stats.pruned);
        self.fallbacks = self.fallbacks.saturating_add(stats.fallbacks);
    }

    pub fn record_failure(&mut self) {
        self.failures = self.failures.saturating_add(1);
    }

    pub fn record_cache_hit(&mut self) {
        self.cache_hits = self.cache_hits.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            layouts: self.layouts,
            failures: self.failures,
            cache_hits: self.cache_hits,
            items: self.items,
            rows: self.rows,
            candidates: self.candidates,
            pruned: self.pruned,
            fallbacks: self.fallbacks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricSnapshot {
    pub layouts: u64,
    pub failures: u64,
    pub cache_hits: u64,
    pub items: u64,
    pub rows: u64,
    pub candidates: u64,
    pub pruned: u64,
    pub fallbacks: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("layouts".to_string(), json!(self.layouts));
        map.insert("failures".to_string(), json!(self.failures));
        map.insert("cache_hits".to_string(), json!(self.cache_hits));
        map.insert("items".to_string(), json!(self.items));
        map.insert("rows".to_string(), json!(self.rows));
        map.insert("candidates".to_string(), json!(self.candidates));
        map.insert("pruned".to_string(), json!(self.pruned));
        map.insert("fallbacks".to_string(), json!(self.fallbacks));
        map
    }
}
