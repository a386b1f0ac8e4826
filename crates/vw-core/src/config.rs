//! World and editor tuning knobs.
//!
//! Every field has a default, so a partial JSON object (or `{}`) is a valid
//! configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldConfig {
    /// Full width of a road, in world units.
    pub road_width: f64,
    /// Number of arc steps per road end cap.
    pub road_roundness: u32,
    /// Hover pick radius in screen pixels (scaled by zoom).
    pub hover_threshold: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom change per wheel notch.
    pub zoom_step: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            road_width: 100.0,
            road_roundness: 10,
            hover_threshold: 10.0,
            min_zoom: 1.0,
            max_zoom: 5.0,
            zoom_step: 0.1,
        }
    }
}

impl WorldConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Repair values that would break the world: non-positive widths, an
    /// inverted zoom range.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.road_width.is_finite() && self.road_width > 0.0) {
            self.road_width = defaults.road_width;
        }
        if !(self.hover_threshold.is_finite() && self.hover_threshold > 0.0) {
            self.hover_threshold = defaults.hover_threshold;
        }
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            self.min_zoom = defaults.min_zoom;
        }
        if !(self.max_zoom.is_finite() && self.max_zoom >= self.min_zoom) {
            self.max_zoom = self.min_zoom.max(defaults.max_zoom);
        }
        if !self.zoom_step.is_finite() {
            self.zoom_step = defaults.zoom_step;
        }
        self.road_roundness = self.road_roundness.max(1);
        self
    }
}
