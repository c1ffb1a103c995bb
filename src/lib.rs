//! Row-based masonry layout for fixed-aspect items.
//!
//! Items are partitioned into rows that fill the container width edge to
//! edge while keeping row heights close to a target. Two strategies share one
//! contract: a greedy single-pass packer and a justified optimizer that picks
//! the partition with the lowest squared deviation from the target height.
//!
//! The strategies are pure functions. [`MasonryEngine`] layers configuration,
//! structured logging, metrics and memoization on top of them.
//!
//! ```
//! use masonry_rows::{Item, LayoutParams, justify};
//!
//! let items = vec![Item::new(300.0, 200.0), Item::new(200.0, 300.0)];
//! let layout = justify(&LayoutParams::new(600.0, 200.0), &items)?;
//! assert_eq!(layout.len(), 2);
//! # Ok::<(), masonry_rows::LayoutError>(())
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gutter;
pub mod layout;
pub mod logging;
pub mod metrics;

pub use cache::{CacheLookup, LayoutCache};
pub use config::LayoutConfig;
pub use engine::MasonryEngine;
pub use error::{LayoutError, Result};
pub use geometry::{Dimensions, Item, Placement, Rect};
pub use gutter::Insets;
pub use layout::{
    LayoutParams, LayoutResult, SearchStats, Strategy, compute, compute_with_stats, justify,
    justify_with_stats, pack,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
