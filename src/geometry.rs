//! Geometry kernel: coordinate types and the box → border → handle pipeline.
//!
//! Two coordinate frames appear in this crate and each has its own type:
//! [`Point`] is always global (screen) space, [`LocalPoint`] is always
//! relative to the target's anchor point. Converting between them goes
//! through [`Point::relative_to`] so a frame mix-up is a type error.
//!
//! The kernel functions are pure. The overlay recomputes the whole chain
//! from the target's live bounds on every redraw; nothing here is cached
//! across frames.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::Index;

use crate::error::ControlsError;
use crate::handle::HandlePosition;

/// A point in global (screen) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Exact midpoint of two points.
    #[must_use]
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self { x: (a.x + b.x) / 2.0, y: (a.y + b.y) / 2.0 }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Express this global point relative to `origin` (also global).
    #[must_use]
    pub fn relative_to(self, origin: Self) -> LocalPoint {
        LocalPoint { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// A point relative to the target's anchor, in global units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pull both coordinates toward zero by `padding`, saturating at zero.
    ///
    /// Handles sit on the border, `padding` outside the box, so a pointer on
    /// a handle maps back onto the box edge.
    #[must_use]
    pub fn without_padding(self, padding: f64) -> Self {
        Self { x: strip_band(self.x, padding), y: strip_band(self.y, padding) }
    }
}

fn strip_band(v: f64, padding: f64) -> f64 {
    if v >= padding {
        v - padding
    } else if v <= -padding {
        v + padding
    } else {
        0.0
    }
}

/// Width and height. Transformed dimensions may be negative on mirrored axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Dimensions after applying `scale`, signs included.
    #[must_use]
    pub fn scaled(self, scale: Scale) -> Self {
        Self { width: self.width * scale.x, height: self.height * scale.y }
    }
}

/// Axis-aligned world-space bounding box as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Zero width or zero height.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Anchor expressed as a fraction of the box on each axis (0 = left/top,
/// 1 = right/bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const TOP_LEFT: Self = Self { x: 0.0, y: 0.0 };
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect the fraction on the axes that are mirrored.
    ///
    /// A target with a negative scale on an axis lays its local box out
    /// backwards in world space, so its local fraction `f` sits at world
    /// fraction `1 - f`. The same reflection maps world back to local.
    #[must_use]
    pub fn mirrored(self, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            x: if mirror_x { 1.0 - self.x } else { self.x },
            y: if mirror_y { 1.0 - self.y } else { self.y },
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

/// A pair of scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether the target is drawn mirrored on each axis.
    #[must_use]
    pub fn mirrored(self) -> (bool, bool) {
        (self.x.is_sign_negative(), self.y.is_sign_negative())
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Four corners of an axis-aligned quadrilateral in global space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxCorners {
    pub tl: Point,
    pub tr: Point,
    pub br: Point,
    pub bl: Point,
}

impl BoxCorners {
    /// Corners of the axis-aligned square of side `size` centered on `center`.
    #[must_use]
    pub fn square(center: Point, size: f64) -> Self {
        let half = size / 2.0;
        Self {
            tl: center.offset(-half, -half),
            tr: center.offset(half, -half),
            br: center.offset(half, half),
            bl: center.offset(-half, half),
        }
    }

    /// Corners in drawing order: tl, tr, br, bl.
    #[must_use]
    pub fn points(&self) -> [Point; 4] {
        [self.tl, self.tr, self.br, self.bl]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.tr.x - self.tl.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bl.y - self.tl.y
    }
}

/// Box corners pushed outward by the overlay padding.
pub type BorderCorners = BoxCorners;

/// Where one handle is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleGeometry {
    pub center: Point,
    /// `corner_size`-wide square centered on `center`. Drawing only.
    pub footprint: BoxCorners,
}

/// Geometry for all eight handles, indexed by [`HandlePosition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSet {
    handles: [HandleGeometry; 8],
}

impl HandleSet {
    #[must_use]
    pub fn get(&self, position: HandlePosition) -> &HandleGeometry {
        &self.handles[position.index()]
    }

    /// Every handle paired with its position, in [`HandlePosition::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HandlePosition, &HandleGeometry)> {
        HandlePosition::ALL.iter().map(move |&pos| (pos, self.get(pos)))
    }

    /// Outer outline of the corner handle footprints: the region the whole
    /// overlay covers, handles included.
    #[must_use]
    pub fn outline(&self) -> BoxCorners {
        BoxCorners {
            tl: self.get(HandlePosition::Tl).footprint.tl,
            tr: self.get(HandlePosition::Tr).footprint.tr,
            br: self.get(HandlePosition::Br).footprint.br,
            bl: self.get(HandlePosition::Bl).footprint.bl,
        }
    }
}

impl Index<HandlePosition> for HandleSet {
    type Output = HandleGeometry;

    fn index(&self, position: HandlePosition) -> &HandleGeometry {
        self.get(position)
    }
}

/// Global corners of the target's box.
///
/// `bounds` supplies the on-screen size; `position` is the target's anchor
/// point in global space and `anchor` is where that point sits within the
/// box as seen on screen (see [`Anchor::mirrored`] for mirrored targets).
/// Zero-sized bounds yield coincident corners.
#[must_use]
pub fn compute_box_corners(bounds: Bounds, position: Point, anchor: Anchor) -> BoxCorners {
    let left = position.x - anchor.x * bounds.width;
    let top = position.y - anchor.y * bounds.height;
    let right = left + bounds.width;
    let bottom = top + bounds.height;

    BoxCorners {
        tl: Point::new(left, top),
        tr: Point::new(right, top),
        br: Point::new(right, bottom),
        bl: Point::new(left, bottom),
    }
}

/// Push every corner outward by `padding` on both axes.
///
/// Negative padding is treated as zero; configs reject it before it gets here.
#[must_use]
pub fn compute_border_corners(corners: BoxCorners, padding: f64) -> BorderCorners {
    let p = padding.max(0.0);
    BoxCorners {
        tl: corners.tl.offset(-p, -p),
        tr: corners.tr.offset(p, -p),
        br: corners.br.offset(p, p),
        bl: corners.bl.offset(-p, p),
    }
}

/// Place the eight handles on the border.
///
/// Corner handles sit on the border corners; edge handles sit on the exact
/// midpoint of the two corners framing their edge.
///
/// # Errors
///
/// Returns `InvalidConfig` if `corner_size` is not a positive finite number.
pub fn compute_handle_set(border: BorderCorners, corner_size: f64) -> Result<HandleSet, ControlsError> {
    if !(corner_size.is_finite() && corner_size > 0.0) {
        return Err(ControlsError::InvalidConfig(format!("corner size must be positive, got {corner_size}")));
    }

    let handles = HandlePosition::ALL.map(|pos| {
        let center = match pos {
            HandlePosition::Tl => border.tl,
            HandlePosition::Tr => border.tr,
            HandlePosition::Br => border.br,
            HandlePosition::Bl => border.bl,
            HandlePosition::Mt => Point::midpoint(border.tl, border.tr),
            HandlePosition::Mb => Point::midpoint(border.bl, border.br),
            HandlePosition::Ml => Point::midpoint(border.tl, border.bl),
            HandlePosition::Mr => Point::midpoint(border.tr, border.br),
        };
        HandleGeometry { center, footprint: BoxCorners::square(center, corner_size) }
    });

    Ok(HandleSet { handles })
}
