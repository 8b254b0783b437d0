//! Origin axes and the origin translator.
//!
//! An origin names where a point sits within the target's box along one
//! axis. It is either symbolic (`left`/`center`/`right`,
//! `top`/`center`/`bottom`) or a raw anchor fraction. Both forms map into
//! two fixed spaces:
//!
//! | Origin | offset | anchor fraction |
//! |--------|--------|-----------------|
//! | left / top | -0.5 | 0 |
//! | center | 0 | 0.5 |
//! | right / bottom | 0.5 | 1 |
//! | `Fraction(f)` | f - 0.5 | f |

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

use std::fmt;

use crate::geometry::{Anchor, Point, Size};

/// Horizontal origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginX {
    Left,
    Center,
    Right,
    /// Anchor fraction in [0, 1].
    Fraction(f64),
}

/// Vertical origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginY {
    Top,
    Center,
    Bottom,
    /// Anchor fraction in [0, 1].
    Fraction(f64),
}

impl OriginX {
    /// Signed offset from the box center, in box widths.
    #[must_use]
    pub fn offset(self) -> f64 {
        match self {
            Self::Left => -0.5,
            Self::Center => 0.0,
            Self::Right => 0.5,
            Self::Fraction(f) => f - 0.5,
        }
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.offset() + 0.5
    }

    /// Symbolic origin when `f` is exactly 0, 0.5 or 1; numeric otherwise.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn from_fraction(f: f64) -> Self {
        if f == 0.0 {
            Self::Left
        } else if f == 0.5 {
            Self::Center
        } else if f == 1.0 {
            Self::Right
        } else {
            Self::Fraction(f)
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Center => Self::Center,
            Self::Right => Self::Left,
            Self::Fraction(f) => Self::Fraction(1.0 - f),
        }
    }

    /// `opposite()` when `mirrored`, `self` otherwise.
    #[must_use]
    pub fn mirrored(self, mirrored: bool) -> Self {
        if mirrored { self.opposite() } else { self }
    }
}

impl OriginY {
    /// Signed offset from the box center, in box heights.
    #[must_use]
    pub fn offset(self) -> f64 {
        match self {
            Self::Top => -0.5,
            Self::Center => 0.0,
            Self::Bottom => 0.5,
            Self::Fraction(f) => f - 0.5,
        }
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.offset() + 0.5
    }

    /// Symbolic origin when `f` is exactly 0, 0.5 or 1; numeric otherwise.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn from_fraction(f: f64) -> Self {
        if f == 0.0 {
            Self::Top
        } else if f == 0.5 {
            Self::Center
        } else if f == 1.0 {
            Self::Bottom
        } else {
            Self::Fraction(f)
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Center => Self::Center,
            Self::Bottom => Self::Top,
            Self::Fraction(f) => Self::Fraction(1.0 - f),
        }
    }

    /// `opposite()` when `mirrored`, `self` otherwise.
    #[must_use]
    pub fn mirrored(self, mirrored: bool) -> Self {
        if mirrored { self.opposite() } else { self }
    }
}

impl fmt::Display for OriginX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Center => f.write_str("center"),
            Self::Right => f.write_str("right"),
            Self::Fraction(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for OriginY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Center => f.write_str("center"),
            Self::Bottom => f.write_str("bottom"),
            Self::Fraction(v) => write!(f, "{v}"),
        }
    }
}

/// Anchor fractions for an origin pair.
#[must_use]
pub fn anchor_of(x: OriginX, y: OriginY) -> Anchor {
    Anchor::new(x.fraction(), y.fraction())
}

/// Origin pair for an anchor (symbolic where the fraction allows).
#[must_use]
pub fn origin_of(anchor: Anchor) -> (OriginX, OriginY) {
    (OriginX::from_fraction(anchor.x), OriginY::from_fraction(anchor.y))
}

/// Move `point` from one origin to another within a box of `dimensions`.
///
/// `point` is where the box's `from` origin sits; the result is where its
/// `to` origin sits. `dimensions` must be the box's current transformed
/// size (unscaled size times current scale, signs kept) so the relocation
/// matches what is on screen.
#[must_use]
pub fn translate(point: Point, from_x: OriginX, from_y: OriginY, to_x: OriginX, to_y: OriginY, dimensions: Size) -> Point {
    let offset_x = to_x.offset() - from_x.offset();
    let offset_y = to_y.offset() - from_y.offset();

    if offset_x == 0.0 && offset_y == 0.0 {
        return point;
    }

    Point::new(point.x + offset_x * dimensions.width, point.y + offset_y * dimensions.height)
}
