//! In-memory host: a plain target, a layer that records draw calls, and a
//! frame scheduler fired by hand.
//!
//! Useful for driving [`crate::overlay::Controls`] without a renderer, in
//! tests or in tools that replay gestures.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use crate::geometry::{Anchor, Bounds, Point, Scale, Size};
use crate::handle::HandlePosition;
use crate::host::{Cursor, FrameScheduler, Layer, Shape, Target};

/// A rectangular target with an anchor, like a sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessTarget {
    pub position: Point,
    pub anchor: Anchor,
    pub scale: Scale,
    pub local_size: Size,
}

impl HeadlessTarget {
    /// Unscaled target of `local_size` anchored top-left at `position`.
    #[must_use]
    pub fn new(position: Point, local_size: Size) -> Self {
        Self { position, anchor: Anchor::TOP_LEFT, scale: Scale::IDENTITY, local_size }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }
}

impl Target for HeadlessTarget {
    fn bounds(&self) -> Bounds {
        let (x, width) = axis_extent(self.position.x, self.anchor.x, self.local_size.width, self.scale.x);
        let (y, height) = axis_extent(self.position.y, self.anchor.y, self.local_size.height, self.scale.y);
        Bounds::new(x, y, width, height)
    }

    fn global_position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn local_size(&self) -> Size {
        self.local_size
    }

    fn scale(&self) -> Scale {
        self.scale
    }

    fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    fn anchor(&self) -> Anchor {
        self.anchor
    }

    fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }
}

/// World start and length of one axis: the local span
/// `[-anchor * size, (1 - anchor) * size]` scaled about `position`.
fn axis_extent(position: f64, anchor: f64, size: f64, scale: f64) -> (f64, f64) {
    let a = position - scale * anchor * size;
    let b = position + scale * (1.0 - anchor) * size;
    (a.min(b), (b - a).abs())
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Polygon(Vec<Point>),
    Circle { center: Point, radius: f64 },
}

/// A shape that remembers how it was drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordedShape {
    pub ops: Vec<DrawOp>,
    /// Width and color.
    pub stroke: Option<(f64, u32)>,
    /// Color and alpha.
    pub fill: Option<(u32, f64)>,
    pub interactive: bool,
    pub cursor: Option<Cursor>,
    pub handle: Option<HandlePosition>,
}

impl Shape for RecordedShape {
    fn clear(&mut self) {
        self.ops.clear();
        self.stroke = None;
        self.fill = None;
    }

    fn set_stroke(&mut self, width: f64, color: u32) {
        self.stroke = Some((width, color));
    }

    fn set_fill(&mut self, color: u32, alpha: f64) {
        self.fill = Some((color, alpha));
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        self.ops.push(DrawOp::Polygon(points.to_vec()));
    }

    fn draw_circle(&mut self, center: Point, radius: f64) {
        self.ops.push(DrawOp::Circle { center, radius });
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = Some(cursor);
    }

    fn bind_handle(&mut self, position: HandlePosition) {
        self.handle = Some(position);
    }
}

/// A container that keeps its children as recorded shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordingLayer {
    pub children: Vec<RecordedShape>,
    pub visible: bool,
    pub interactive: bool,
    pub cursor: Cursor,
    /// Number of times the children were cleared.
    pub clears: usize,
}

impl RecordingLayer {
    /// The child bound to `position`, if drawn.
    #[must_use]
    pub fn handle_shape(&self, position: HandlePosition) -> Option<&RecordedShape> {
        self.children.iter().find(|shape| shape.handle == Some(position))
    }

    /// Positions of all drawn handles, in draw order.
    #[must_use]
    pub fn handle_positions(&self) -> Vec<HandlePosition> {
        self.children.iter().filter_map(|shape| shape.handle).collect()
    }
}

impl Layer for RecordingLayer {
    type Shape = RecordedShape;

    fn create_shape(&mut self) -> RecordedShape {
        RecordedShape::default()
    }

    fn add_child(&mut self, shape: RecordedShape) {
        self.children.push(shape);
    }

    fn remove_children(&mut self) {
        self.children.clear();
        self.clears += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

/// Frame scheduler whose frames fire only when [`ManualFrames::fire`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManualFrames {
    next_id: u64,
    outstanding: Option<u64>,
    /// Total frames requested.
    pub requests: usize,
    /// Total requests cancelled.
    pub cancels: usize,
}

impl ManualFrames {
    #[must_use]
    pub fn outstanding(&self) -> Option<u64> {
        self.outstanding
    }

    /// Fire the outstanding frame, if any. The caller then invokes
    /// `Controls::on_frame`.
    pub fn fire(&mut self) -> Option<u64> {
        self.outstanding.take()
    }
}

impl FrameScheduler for ManualFrames {
    type Handle = u64;

    fn request_frame(&mut self) -> u64 {
        self.next_id += 1;
        self.requests += 1;
        self.outstanding = Some(self.next_id);
        self.next_id
    }

    fn cancel_frame(&mut self, handle: u64) {
        if self.outstanding == Some(handle) {
            self.outstanding = None;
            self.cancels += 1;
        }
    }
}
