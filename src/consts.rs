//! Shared defaults for the controls crate.

// ── Sizes ───────────────────────────────────────────────────────

/// Default handle footprint width in pixels.
pub const DEFAULT_CORNER_SIZE: f64 = 10.0;

/// Default gap between the target's box and the drawn border.
pub const DEFAULT_PADDING: f64 = 0.0;

/// Stroke width of the border outline.
pub const BORDER_LINE_WIDTH: f64 = 1.0;

/// Stroke width of each handle outline.
pub const HANDLE_LINE_WIDTH: f64 = 1.0;

// ── Colors ──────────────────────────────────────────────────────

/// Default accent used for handles and the border (0xRRGGBB).
pub const DEFAULT_ACCENT_COLOR: u32 = 0x00EC_6C00;

/// Default handle outline color.
pub const DEFAULT_CORNER_STROKE_COLOR: u32 = 0x00FF_FFFF;

// ── Alphas ──────────────────────────────────────────────────────

/// Fill alpha for "transparent" handles. Not zero, so hosts that skip
/// fully transparent fills still hit-test the handle.
pub const TRANSPARENT_CORNER_ALPHA: f64 = 0.001;

/// Fill alpha for the hit area drawn under the border.
pub const HIT_AREA_ALPHA: f64 = 0.1;

/// Fill alpha for the border polygon (outline only).
pub const BORDER_FILL_ALPHA: f64 = 0.0;
