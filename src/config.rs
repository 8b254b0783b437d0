//! Overlay configuration.
//!
//! Field names serialize in camelCase so a host can pass the same options
//! object it would hand to a script-side overlay:
//!
//! ```json
//! { "cornerSize": 20, "padding": 20, "cornerStyle": "square", "centeredScaling": true }
//! ```
//!
//! Every field is optional; missing ones take the defaults in [`crate::consts`].
//! The config is fixed once an overlay is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ACCENT_COLOR, DEFAULT_CORNER_SIZE, DEFAULT_CORNER_STROKE_COLOR, DEFAULT_PADDING};
use crate::error::ControlsError;
use crate::handle::HandlePosition;

/// How handles are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    #[default]
    Circle,
    Square,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlsConfig {
    /// Handle footprint width. Must be positive.
    pub corner_size: f64,
    pub corner_style: CornerStyle,
    pub corner_color: u32,
    pub corner_stroke_color: u32,
    /// Draw handles with a near-zero fill alpha.
    pub transparent_corners: bool,
    /// Gap between the box and the border. Must not be negative.
    pub padding: f64,
    pub border_color: u32,
    /// Show the overlay (border and handles) at all.
    pub has_borders: bool,
    /// Handles that are drawn.
    pub control_visible_list: Vec<HandlePosition>,
    /// Scale around the target's center instead of the opposite handle.
    pub centered_scaling: bool,
    /// Corner handles scale both axes by one shared factor.
    pub scale_proportionally: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            corner_size: DEFAULT_CORNER_SIZE,
            corner_style: CornerStyle::default(),
            corner_color: DEFAULT_ACCENT_COLOR,
            corner_stroke_color: DEFAULT_CORNER_STROKE_COLOR,
            transparent_corners: true,
            padding: DEFAULT_PADDING,
            border_color: DEFAULT_ACCENT_COLOR,
            has_borders: true,
            control_visible_list: HandlePosition::ALL.to_vec(),
            centered_scaling: false,
            scale_proportionally: false,
        }
    }
}

impl ControlsConfig {
    /// Parse a JSON options object and validate it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON and `InvalidConfig` for
    /// values that fail [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ControlsError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric options.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the corner size is not a positive finite
    /// number or the padding is negative or not finite.
    pub fn validate(&self) -> Result<(), ControlsError> {
        if !(self.corner_size.is_finite() && self.corner_size > 0.0) {
            return Err(ControlsError::InvalidConfig(format!(
                "corner size must be positive, got {}",
                self.corner_size
            )));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(ControlsError::InvalidConfig(format!("padding must not be negative, got {}", self.padding)));
        }
        Ok(())
    }

    /// Whether the handle at `position` is drawn.
    #[must_use]
    pub fn is_visible(&self, position: HandlePosition) -> bool {
        self.control_visible_list.contains(&position)
    }
}
