//! Layout module orchestrator.
//!
//! Callers import strategies and shared result types from here; the row math
//! lives in the private `rows` module.

pub mod justified;
pub mod naive;
mod rows;
mod strategy;

pub use justified::{SearchStats, justify, justify_with_stats};
pub use naive::pack;
pub use rows::{DEFAULT_SCALE_FACTOR, LayoutParams, LayoutResult};
pub use strategy::{Strategy, compute, compute_with_stats};
