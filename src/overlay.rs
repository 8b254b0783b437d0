//! Overlay composer: wires the geometry kernel and the drag engine to a host.
//!
//! `Controls` owns (or borrows, through the blanket impls in [`crate::host`])
//! the target, the layer it draws into, and the frame scheduler. The host
//! forwards pointer events to the `on_*` methods and calls [`Controls::on_frame`]
//! when a requested frame fires.
//!
//! Event flow for one gesture:
//!
//! 1. `on_pointer_down(handle, p)` flushes any pending scale, lets the engine
//!    pick the new origin (relocating the target's anchor if needed) and
//!    redraws.
//! 2. `on_pointer_move(p)` computes a scale and queues it; nothing touches
//!    the target yet.
//! 3. `on_frame()` applies the latest queued scale, records it, and redraws.
//! 4. `on_pointer_up()` / `on_pointer_up_outside()` end the gesture.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use tracing::{debug, trace, warn};

use crate::config::ControlsConfig;
use crate::consts::{BORDER_FILL_ALPHA, BORDER_LINE_WIDTH, HIT_AREA_ALPHA};
use crate::drag::{DragEngine, ScaleMode, ScaleUpdate, TargetSnapshot, TransformState};
use crate::error::ControlsError;
use crate::frame::FrameSlot;
use crate::geometry::{self, BorderCorners, BoxCorners, HandleSet, Point};
use crate::handle::{HandlePosition, HandleStyle, HandleWidget};
use crate::host::{Cursor, FrameScheduler, Layer, Shape, Target};
use crate::origin::{self, OriginX, OriginY};

/// Geometry from the last redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    pub box_corners: BoxCorners,
    pub border: BorderCorners,
    pub handles: HandleSet,
}

/// Bounding-box controls for one target.
pub struct Controls<T: Target, L: Layer, F: FrameScheduler> {
    config: ControlsConfig,
    style: HandleStyle,
    target: T,
    layer: L,
    frames: F,
    engine: DragEngine,
    slot: FrameSlot<F::Handle>,
    geometry: Option<OverlayGeometry>,
}

impl<T: Target, L: Layer, F: FrameScheduler> Controls<T, L, F> {
    /// Build the overlay and draw it once.
    ///
    /// With `centered_scaling`, the target's anchor moves to its center
    /// (position compensated, so nothing moves on screen).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the config fails validation. The target is
    /// not touched in that case.
    pub fn new(config: ControlsConfig, mut target: T, mut layer: L, frames: F) -> Result<Self, ControlsError> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "controls: rejecting config");
            return Err(err);
        }

        if config.centered_scaling {
            center_anchor(&mut target);
        }

        layer.set_visible(config.has_borders);
        layer.set_interactive(true);

        let engine = DragEngine::new(ScaleMode::from_config(&config), target.scale(), target.anchor());
        let mut controls = Self {
            style: HandleStyle::from_config(&config),
            config,
            target,
            layer,
            frames,
            engine,
            slot: FrameSlot::new(),
            geometry: None,
        };
        controls.refresh()?;

        debug!(
            centered = controls.config.centered_scaling,
            proportional = controls.config.scale_proportionally,
            visible = controls.config.has_borders,
            "controls: overlay created"
        );
        Ok(controls)
    }

    // --- Redraw ---

    /// Recompute box, border and handles from the target and redraw.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the handle geometry cannot be built.
    pub fn refresh(&mut self) -> Result<(), ControlsError> {
        let (mirror_x, mirror_y) = self.target.scale().mirrored();
        let anchor = self.target.anchor().mirrored(mirror_x, mirror_y);
        let bounds = self.target.bounds();
        if bounds.is_degenerate() {
            trace!(width = bounds.width, height = bounds.height, "controls: degenerate target, handles overlap");
        }
        let box_corners = geometry::compute_box_corners(bounds, self.target.global_position(), anchor);
        let border = geometry::compute_border_corners(box_corners, self.config.padding);
        let handles = geometry::compute_handle_set(border, self.config.corner_size)?;

        self.layer.remove_children();
        self.draw_hit_area(&handles);
        self.draw_border(&border);
        self.draw_handles(&handles);

        self.geometry = Some(OverlayGeometry { box_corners, border, handles });
        Ok(())
    }

    fn draw_hit_area(&mut self, handles: &HandleSet) {
        let mut shape = self.layer.create_shape();
        shape.clear();
        shape.set_stroke(0.0, self.config.border_color);
        shape.set_fill(self.config.corner_color, HIT_AREA_ALPHA);
        shape.draw_polygon(&handles.outline().points());
        shape.set_interactive(true);
        self.layer.add_child(shape);
    }

    fn draw_border(&mut self, border: &BorderCorners) {
        let mut shape = self.layer.create_shape();
        shape.clear();
        shape.set_stroke(BORDER_LINE_WIDTH, self.config.border_color);
        shape.set_fill(self.config.corner_color, BORDER_FILL_ALPHA);
        shape.draw_polygon(&border.points());
        self.layer.add_child(shape);
    }

    fn draw_handles(&mut self, handles: &HandleSet) {
        for (position, handle) in handles.iter() {
            if !self.config.is_visible(position) {
                continue;
            }
            let mut shape = self.layer.create_shape();
            HandleWidget::new(position, *handle).draw(&mut shape, &self.style);
            self.layer.add_child(shape);
        }
    }

    // --- Scale application ---

    /// Queue a scale for the next frame. Calls before that frame overwrite
    /// the queued value per axis instead of stacking.
    pub fn apply_scale(&mut self, x: Option<f64>, y: Option<f64>) {
        self.queue(ScaleUpdate::new(x, y));
    }

    fn queue(&mut self, update: ScaleUpdate) {
        if update.is_empty() {
            return;
        }
        self.slot.schedule(update, &mut self.frames);
    }

    /// Frame boundary: apply the queued scale (if any) and redraw.
    ///
    /// # Errors
    ///
    /// Propagates redraw errors from [`Self::refresh`].
    pub fn on_frame(&mut self) -> Result<(), ControlsError> {
        match self.slot.take() {
            Some(update) => self.commit(update),
            None => Ok(()),
        }
    }

    fn commit(&mut self, update: ScaleUpdate) -> Result<(), ControlsError> {
        let scale = update.applied_to(self.target.scale());
        self.target.set_scale(scale);
        self.engine.record_scale(update);
        trace!(x = scale.x, y = scale.y, "controls: scale applied");
        self.refresh()
    }

    /// Apply a queued scale right away, cancelling its frame request.
    fn flush(&mut self) -> Result<(), ControlsError> {
        match self.slot.cancel(&mut self.frames) {
            Some(update) => self.commit(update),
            None => Ok(()),
        }
    }

    // --- Pointer events ---

    /// Pointer entered or moved over a handle.
    pub fn on_handle_hover(&mut self, handle: HandlePosition) {
        if !self.engine.is_dragging() {
            self.layer.set_cursor(handle.cursor());
        }
    }

    /// Pointer pressed on a handle. `pointer` is global.
    ///
    /// # Errors
    ///
    /// Propagates redraw errors from [`Self::refresh`].
    pub fn on_pointer_down(&mut self, handle: HandlePosition, pointer: Point) -> Result<(), ControlsError> {
        self.flush()?;

        let snapshot = TargetSnapshot::of(&self.target);
        if let Some(relocation) = self.engine.begin(handle, pointer, &snapshot) {
            self.target.set_anchor(relocation.anchor);
            self.target.set_position(relocation.position);
        }
        self.layer.set_cursor(handle.cursor());
        self.refresh()
    }

    /// Pointer moved anywhere over the overlay. Ignored while idle.
    pub fn on_pointer_move(&mut self, pointer: Point) {
        let snapshot = TargetSnapshot::of(&self.target);
        if let Some(update) = self.engine.update(pointer, &snapshot) {
            self.queue(update);
        }
    }

    /// Pointer released over the overlay.
    pub fn on_pointer_up(&mut self) {
        if self.engine.end() {
            self.layer.set_cursor(Cursor::Auto);
        }
    }

    /// Pointer released outside the overlay; handled exactly like a release.
    pub fn on_pointer_up_outside(&mut self) {
        self.on_pointer_up();
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    /// Geometry from the last redraw.
    #[must_use]
    pub fn geometry(&self) -> Option<&OverlayGeometry> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        self.engine.state()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// Whether a scale is waiting for the next frame.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.slot.is_pending()
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable target access; call [`Self::refresh`] after moving it.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    #[must_use]
    pub fn layer(&self) -> &L {
        &self.layer
    }

    #[must_use]
    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    /// Tear down: cancel any pending frame and hand the parts back.
    ///
    /// A scale still waiting for its frame is dropped.
    pub fn into_parts(mut self) -> (T, L, F) {
        if let Some(update) = self.slot.cancel(&mut self.frames) {
            debug!(x = ?update.x, y = ?update.y, "controls: dropping pending scale");
        }
        (self.target, self.layer, self.frames)
    }
}

/// Move the target's anchor to its center without moving it on screen.
fn center_anchor<T: Target + ?Sized>(target: &mut T) {
    let anchor = target.anchor();
    let dimensions = target.local_size().scaled(target.scale());
    let position = origin::translate(
        target.global_position(),
        OriginX::Fraction(anchor.x),
        OriginY::Fraction(anchor.y),
        OriginX::Center,
        OriginY::Center,
        dimensions,
    );
    target.set_anchor(origin::anchor_of(OriginX::Center, OriginY::Center));
    target.set_position(position);
}
