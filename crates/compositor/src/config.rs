//! Compositor configuration.

use nightlight_common::{NightlightError, NightlightResult};
use serde::{Deserialize, Serialize};

use crate::geometry::Placement;
use crate::tone::ToneFilter;

/// Settings for one compositing run. Fixed once a `Compositor` is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Overlay resize ratio, applied to both dimensions.
    pub scale_factor: f64,

    /// Darken and tint the background before pasting.
    pub apply_tone_filter: bool,

    /// Fraction of overlay size added around each mask rectangle, split
    /// evenly between opposite sides.
    pub mask_dilation_percent: f64,

    /// Overlay centers, applied in order.
    pub placements: Vec<Placement>,

    /// Filter used when `apply_tone_filter` is set.
    pub tone_filter: ToneFilter,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            scale_factor: 0.2,
            apply_tone_filter: true,
            mask_dilation_percent: 0.30,
            placements: Vec::new(),
            tone_filter: ToneFilter::NIGHT,
        }
    }
}

impl CompositorConfig {
    /// Default settings with the given placements.
    pub fn with_placements(placements: impl IntoIterator<Item = Placement>) -> Self {
        Self {
            placements: placements.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> NightlightResult<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(NightlightError::config(format!(
                "scale_factor must be a finite value > 0, got {}",
                self.scale_factor
            )));
        }
        if !self.mask_dilation_percent.is_finite() || self.mask_dilation_percent < 0.0 {
            return Err(NightlightError::config(format!(
                "mask_dilation_percent must be a finite value >= 0, got {}",
                self.mask_dilation_percent
            )));
        }
        self.tone_filter.validate()
    }

    /// The tone filter to apply, if enabled.
    pub fn active_tone_filter(&self) -> Option<&ToneFilter> {
        self.apply_tone_filter.then_some(&self.tone_filter)
    }
}
