//! Layout configuration loaded from code or JSON.
//!
//! Defaults match a gallery with 300px rows, a 10% tolerance band and an 8px
//! gutter laid out by the justified optimizer.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::layout::{DEFAULT_SCALE_FACTOR, LayoutParams, Strategy};

pub const DEFAULT_TARGET_HEIGHT: f64 = 300.0;
pub const DEFAULT_GAP: f64 = 8.0;

/// Everything except the live container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub strategy: Strategy,
    pub target_height: f64,
    pub scale_factor: f64,
    /// Spacing between items, applied as padding by [`crate::gutter`].
    pub gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            target_height: DEFAULT_TARGET_HEIGHT,
            scale_factor: DEFAULT_SCALE_FACTOR,
            gap: DEFAULT_GAP,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_target_height(mut self, target_height: f64) -> Self {
        self.target_height = target_height;
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Bind the configuration to a container width.
    pub fn params(&self, viewport_width: f64) -> LayoutParams {
        LayoutParams::new(viewport_width, self.target_height).with_scale_factor(self.scale_factor)
    }

    /// Check everything that does not depend on the container width.
    pub fn validate(&self) -> Result<()> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(LayoutError::InvalidParameters(format!(
                "gap must be finite and >= 0, got {}",
                self.gap
            )));
        }
        self.params(0.0).validate()
    }
}
