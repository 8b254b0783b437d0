//! Drag transform engine: transform state and the resize gesture machine.
//!
//! The engine is pure. It reads a [`TargetSnapshot`] per event and returns
//! what should happen to the target ([`Relocation`] on gesture start,
//! [`ScaleUpdate`] on move); the overlay decides when to apply it.
//!
//! ## Origins on mirrored targets
//!
//! `TransformState::origin_x/origin_y` record which side of the box, as
//! seen on screen, the anchor sits on. The target's anchor fraction is in
//! its own (possibly mirrored) local box. The two agree on unmirrored axes
//! and are reflections of each other on mirrored ones. Flipping the
//! recorded origin and the scale sign together during a drag keeps that
//! relationship intact without moving the anchor.
//!
//! ## Sign flips
//!
//! Each gesture starts with the pointer on the handle's own side of the
//! anchor. When the pointer crosses the anchor on a driven axis, the
//! recorded origin for that axis flips to its opposite and the scale
//! produced for that axis is negated relative to the gesture's starting
//! sign. Crossing back undoes both.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use tracing::{debug, trace};

use crate::config::ControlsConfig;
use crate::geometry::{Anchor, Point, Scale, Size};
use crate::handle::HandlePosition;
use crate::host::Target;
use crate::origin::{self, OriginX, OriginY};

/// Side of the anchor along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    /// Sign of a coordinate; `None` for zero (on the anchor).
    #[must_use]
    pub fn of(v: f64) -> Option<Self> {
        if v > 0.0 {
            Some(Self::Positive)
        } else if v < 0.0 {
            Some(Self::Negative)
        } else {
            None
        }
    }

    /// Sign of a scale factor. Positive zero counts as positive.
    #[must_use]
    pub fn of_scale(v: f64) -> Self {
        if v.is_sign_negative() { Self::Negative } else { Self::Positive }
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }
}

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    /// No gesture; pointer moves are ignored.
    #[default]
    Idle,
    /// A handle is being dragged.
    Dragging {
        handle: HandlePosition,
        /// Global pointer position at gesture start.
        start_pointer: Point,
        /// Global pointer position at the latest move.
        last_pointer: Point,
    },
}

/// Mutable transform bookkeeping for one overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Scale last applied to the target, resynced from the target at each
    /// gesture start.
    pub scale: Scale,
    /// On-screen side the anchor sits on, horizontally.
    pub origin_x: OriginX,
    /// On-screen side the anchor sits on, vertically.
    pub origin_y: OriginY,
    pub phase: DragPhase,
    /// Scale when the current (or last) gesture started.
    pub drag_start_scale: Scale,
    /// Side of the anchor the pointer was last seen on.
    pub drag_sign_x: Sign,
    pub drag_sign_y: Sign,
}

impl TransformState {
    /// State for a target currently drawn at `scale` with local `anchor`.
    #[must_use]
    pub fn new(scale: Scale, anchor: Anchor) -> Self {
        let (mirror_x, mirror_y) = scale.mirrored();
        let (origin_x, origin_y) = origin::origin_of(anchor);
        Self {
            scale,
            origin_x: origin_x.mirrored(mirror_x),
            origin_y: origin_y.mirrored(mirror_y),
            phase: DragPhase::Idle,
            drag_start_scale: scale,
            drag_sign_x: Sign::Positive,
            drag_sign_y: Sign::Positive,
        }
    }

    #[must_use]
    pub fn active_handle(&self) -> Option<HandlePosition> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { handle, .. } => Some(handle),
        }
    }
}

/// What the engine reads from the target at each event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSnapshot {
    /// Global position of the anchor point.
    pub position: Point,
    /// Local anchor fractions.
    pub anchor: Anchor,
    /// Unscaled size.
    pub local_size: Size,
    /// Scale currently applied to the target.
    pub scale: Scale,
}

impl TargetSnapshot {
    #[must_use]
    pub fn of<T: Target + ?Sized>(target: &T) -> Self {
        Self {
            position: target.global_position(),
            anchor: target.anchor(),
            local_size: target.local_size(),
            scale: target.scale(),
        }
    }
}

/// New anchor and compensating position for the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relocation {
    pub anchor: Anchor,
    pub position: Point,
}

/// Scale factors to apply; `None` leaves that axis alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ScaleUpdate {
    #[must_use]
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Combine with a newer update; the newer value wins on each axis it sets.
    #[must_use]
    pub fn merge(self, newer: Self) -> Self {
        Self { x: newer.x.or(self.x), y: newer.y.or(self.y) }
    }

    /// `scale` with this update's axes replaced.
    #[must_use]
    pub fn applied_to(self, scale: Scale) -> Scale {
        Scale { x: self.x.unwrap_or(scale.x), y: self.y.unwrap_or(scale.y) }
    }
}

/// Scaling options copied out of the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMode {
    pub centered: bool,
    pub proportional: bool,
    pub padding: f64,
}

impl ScaleMode {
    #[must_use]
    pub fn from_config(config: &ControlsConfig) -> Self {
        Self {
            centered: config.centered_scaling,
            proportional: config.scale_proportionally,
            padding: config.padding,
        }
    }
}

/// The resize gesture state machine.
#[derive(Debug, Clone)]
pub struct DragEngine {
    state: TransformState,
    mode: ScaleMode,
}

impl DragEngine {
    #[must_use]
    pub fn new(mode: ScaleMode, scale: Scale, anchor: Anchor) -> Self {
        Self { state: TransformState::new(scale, anchor), mode }
    }

    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state.phase, DragPhase::Dragging { .. })
    }

    /// Start a gesture on `handle`.
    ///
    /// Picks the origin the handle scales around and, when that moves the
    /// anchor, returns where the anchor and position must go so the target
    /// stays put on screen. A gesture already in progress is replaced.
    ///
    /// The target's live scale replaces the recorded one first, so a host
    /// that rescaled the target between gestures is picked up here.
    pub fn begin(&mut self, handle: HandlePosition, pointer: Point, target: &TargetSnapshot) -> Option<Relocation> {
        self.state.scale = target.scale;
        let (origin_x, origin_y) =
            if self.mode.centered { (OriginX::Center, OriginY::Center) } else { handle.default_origin() };

        let (mirror_x, mirror_y) = self.state.scale.mirrored();
        let local_x = origin_x.mirrored(mirror_x);
        let local_y = origin_y.mirrored(mirror_y);
        let anchor = origin::anchor_of(local_x, local_y);

        let relocation = if anchor == target.anchor {
            None
        } else {
            let dimensions = target.local_size.scaled(self.state.scale);
            let position = origin::translate(
                target.position,
                OriginX::Fraction(target.anchor.x),
                OriginY::Fraction(target.anchor.y),
                local_x,
                local_y,
                dimensions,
            );
            debug!(
                %handle,
                from_x = target.anchor.x,
                from_y = target.anchor.y,
                to_x = anchor.x,
                to_y = anchor.y,
                "controls: relocating anchor"
            );
            Some(Relocation { anchor, position })
        };

        let (side_x, side_y) = handle.side();
        self.state.origin_x = origin_x;
        self.state.origin_y = origin_y;
        self.state.drag_start_scale = self.state.scale;
        if let Some(side) = side_x {
            self.state.drag_sign_x = side;
        }
        if let Some(side) = side_y {
            self.state.drag_sign_y = side;
        }
        self.state.phase = DragPhase::Dragging { handle, start_pointer: pointer, last_pointer: pointer };

        debug!(%handle, %origin_x, %origin_y, "controls: gesture start");
        relocation
    }

    /// Compute the scale for a pointer at `pointer` (global).
    ///
    /// Returns `None` while idle, and when no driven axis can be computed
    /// (zero-sized target).
    pub fn update(&mut self, pointer: Point, target: &TargetSnapshot) -> Option<ScaleUpdate> {
        let DragPhase::Dragging { handle, start_pointer, .. } = self.state.phase else {
            return None;
        };
        self.state.phase = DragPhase::Dragging { handle, start_pointer, last_pointer: pointer };

        let local = pointer.relative_to(target.position).without_padding(self.mode.padding);
        let (natural_x, natural_y) = handle.side();

        if natural_x.is_some() {
            if let Some(side) = Sign::of(local.x) {
                if side != self.state.drag_sign_x {
                    self.state.drag_sign_x = side;
                    self.state.origin_x = self.state.origin_x.opposite();
                    debug!(%handle, origin_x = %self.state.origin_x, "controls: crossed anchor horizontally");
                }
            }
        }
        if natural_y.is_some() {
            if let Some(side) = Sign::of(local.y) {
                if side != self.state.drag_sign_y {
                    self.state.drag_sign_y = side;
                    self.state.origin_y = self.state.origin_y.opposite();
                    debug!(%handle, origin_y = %self.state.origin_y, "controls: crossed anchor vertically");
                }
            }
        }

        let (magnitude_x, magnitude_y) = self.magnitudes(handle, local.x, local.y, target.local_size);
        let start = self.state.drag_start_scale;
        let x = natural_x
            .zip(magnitude_x)
            .map(|(natural, m)| m * axis_sign(start.x, natural, self.state.drag_sign_x));
        let y = natural_y
            .zip(magnitude_y)
            .map(|(natural, m)| m * axis_sign(start.y, natural, self.state.drag_sign_y));

        let update = ScaleUpdate::new(x, y);
        if update.is_empty() {
            return None;
        }
        trace!(%handle, x = ?update.x, y = ?update.y, "controls: scale computed");
        Some(update)
    }

    /// End the current gesture. Returns whether one was in progress.
    pub fn end(&mut self) -> bool {
        let DragPhase::Dragging { handle, .. } = self.state.phase else {
            return false;
        };
        self.state.phase = DragPhase::Idle;
        debug!(%handle, "controls: gesture end");
        true
    }

    /// Record a scale that has just been applied to the target.
    pub fn record_scale(&mut self, update: ScaleUpdate) {
        self.state.scale = update.applied_to(self.state.scale);
    }

    /// Unsigned scale magnitudes for a pointer at (`local_x`, `local_y`).
    fn magnitudes(&self, handle: HandlePosition, local_x: f64, local_y: f64, size: Size) -> (Option<f64>, Option<f64>) {
        let (x, y) = if self.mode.proportional && handle.is_corner() {
            // One ratio for both axes: pointer distance against the box's
            // size when the gesture started.
            let start = self.state.drag_start_scale;
            let base = (size.width * start.x).abs() + (size.height * start.y).abs();
            if base == 0.0 {
                (None, None)
            } else {
                let ratio = (local_x.abs() + local_y.abs()) / base;
                (Some(start.x.abs() * ratio), Some(start.y.abs() * ratio))
            }
        } else {
            (axis_magnitude(local_x, size.width), axis_magnitude(local_y, size.height))
        };

        if self.mode.centered {
            // Pointer distance from the center covers half the box.
            (x.map(|v| v * 2.0), y.map(|v| v * 2.0))
        } else {
            (x, y)
        }
    }
}

/// `|local * current / (dimension * current)|`, simplified so it stays
/// defined after the current scale has collapsed to zero.
fn axis_magnitude(local: f64, dimension: f64) -> Option<f64> {
    if dimension == 0.0 { None } else { Some((local / dimension).abs()) }
}

/// Starting sign, negated while the pointer is across the anchor from the
/// handle's own side.
fn axis_sign(start: f64, natural: Sign, current: Sign) -> f64 {
    let crossed = if current == natural { 1.0 } else { -1.0 };
    Sign::of_scale(start).factor() * crossed
}
