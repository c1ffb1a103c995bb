//! Error module orchestrator.
//!
//! Every fallible entry point in the crate reports through [`LayoutError`].

mod types;

pub use types::{LayoutError, Result};
