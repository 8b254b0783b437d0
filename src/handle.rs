//! Handle positions, their lookup tables, and the handle widget.
//!
//! Every per-handle fact (cursor, default origin, which axes it drives,
//! which side of the anchor it sits on) is a `match` on the closed
//! [`HandlePosition`] enum, so adding a table entry is checked by the
//! compiler.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ControlsConfig, CornerStyle};
use crate::consts::{HANDLE_LINE_WIDTH, TRANSPARENT_CORNER_ALPHA};
use crate::drag::Sign;
use crate::geometry::HandleGeometry;
use crate::host::{Cursor, Shape};
use crate::origin::{OriginX, OriginY};

/// One of the eight resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePosition {
    /// Top-left corner.
    Tl,
    /// Top-right corner.
    Tr,
    /// Bottom-right corner.
    Br,
    /// Bottom-left corner.
    Bl,
    /// Middle of the top edge.
    Mt,
    /// Middle of the bottom edge.
    Mb,
    /// Middle of the left edge.
    Ml,
    /// Middle of the right edge.
    Mr,
}

impl HandlePosition {
    pub const ALL: [Self; 8] = [Self::Tl, Self::Tr, Self::Br, Self::Bl, Self::Mt, Self::Mb, Self::Ml, Self::Mr];

    /// Position in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Tl => 0,
            Self::Tr => 1,
            Self::Br => 2,
            Self::Bl => 3,
            Self::Mt => 4,
            Self::Mb => 5,
            Self::Ml => 6,
            Self::Mr => 7,
        }
    }

    /// Short code (`"tl"`, `"mr"`, ...).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Tl => "tl",
            Self::Tr => "tr",
            Self::Br => "br",
            Self::Bl => "bl",
            Self::Mt => "mt",
            Self::Mb => "mb",
            Self::Ml => "ml",
            Self::Mr => "mr",
        }
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(self, Self::Tl | Self::Tr | Self::Br | Self::Bl)
    }

    /// Whether dragging this handle changes the horizontal scale.
    #[must_use]
    pub fn scales_x(self) -> bool {
        !matches!(self, Self::Mt | Self::Mb)
    }

    /// Whether dragging this handle changes the vertical scale.
    #[must_use]
    pub fn scales_y(self) -> bool {
        !matches!(self, Self::Ml | Self::Mr)
    }

    /// Which side of the anchor the handle sits on, per driven axis.
    ///
    /// `None` on an axis the handle does not drive.
    #[must_use]
    pub fn side(self) -> (Option<Sign>, Option<Sign>) {
        use Sign::{Negative, Positive};
        match self {
            Self::Tl => (Some(Negative), Some(Negative)),
            Self::Tr => (Some(Positive), Some(Negative)),
            Self::Br => (Some(Positive), Some(Positive)),
            Self::Bl => (Some(Negative), Some(Positive)),
            Self::Mt => (None, Some(Negative)),
            Self::Mb => (None, Some(Positive)),
            Self::Ml => (Some(Negative), None),
            Self::Mr => (Some(Positive), None),
        }
    }

    /// Origin a gesture on this handle scales around: the opposite corner
    /// for corners, the opposite edge's midline for edges.
    #[must_use]
    pub fn default_origin(self) -> (OriginX, OriginY) {
        match self {
            Self::Tl => (OriginX::Right, OriginY::Bottom),
            Self::Tr => (OriginX::Left, OriginY::Bottom),
            Self::Br => (OriginX::Left, OriginY::Top),
            Self::Bl => (OriginX::Right, OriginY::Top),
            Self::Mt => (OriginX::Center, OriginY::Bottom),
            Self::Mb => (OriginX::Center, OriginY::Top),
            Self::Ml => (OriginX::Right, OriginY::Center),
            Self::Mr => (OriginX::Left, OriginY::Center),
        }
    }

    /// Resize cursor shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> Cursor {
        match self {
            Self::Tl | Self::Br => Cursor::NwseResize,
            Self::Tr | Self::Bl => Cursor::NeswResize,
            Self::Ml | Self::Mr => Cursor::EwResize,
            Self::Mt | Self::Mb => Cursor::NsResize,
        }
    }
}

impl fmt::Display for HandlePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Visual options shared by all handles of one overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    pub size: f64,
    pub corner_style: CornerStyle,
    pub fill_color: u32,
    pub stroke_color: u32,
    pub fill_alpha: f64,
}

impl HandleStyle {
    #[must_use]
    pub fn from_config(config: &ControlsConfig) -> Self {
        Self {
            size: config.corner_size,
            corner_style: config.corner_style,
            fill_color: config.corner_color,
            stroke_color: config.corner_stroke_color,
            fill_alpha: if config.transparent_corners { TRANSPARENT_CORNER_ALPHA } else { 1.0 },
        }
    }
}

/// One drawable handle bound to its position.
///
/// The widget only draws. Presses on the drawn shape are routed by the host
/// back to the overlay using the position bound with [`Shape::bind_handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleWidget {
    pub position: HandlePosition,
    pub geometry: HandleGeometry,
}

impl HandleWidget {
    #[must_use]
    pub fn new(position: HandlePosition, geometry: HandleGeometry) -> Self {
        Self { position, geometry }
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.position.cursor()
    }

    /// Draw this handle into `shape` and make it interactive.
    pub fn draw<S: Shape>(&self, shape: &mut S, style: &HandleStyle) {
        shape.clear();
        shape.set_stroke(HANDLE_LINE_WIDTH, style.stroke_color);
        shape.set_fill(style.fill_color, style.fill_alpha);
        match style.corner_style {
            CornerStyle::Square => shape.draw_polygon(&self.geometry.footprint.points()),
            CornerStyle::Circle => shape.draw_circle(self.geometry.center, style.size / 2.0),
        }
        shape.set_interactive(true);
        shape.set_cursor(self.cursor());
        shape.bind_handle(self.position);
    }
}
