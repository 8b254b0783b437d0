//! The narrow surface the rendering host provides.
//!
//! The overlay never owns a scene graph. It holds a [`Target`] (the object
//! being resized), a [`Layer`] (a container it draws into) and a
//! [`FrameScheduler`] (a once-before-next-paint hook). Pointer events flow
//! the other way: the host calls the `on_*` methods of
//! [`crate::overlay::Controls`] when its shapes are pressed, moved over or
//! released.

use crate::geometry::{Anchor, Bounds, Point, Scale, Size};
use crate::handle::HandlePosition;

/// Pointer cursor the overlay asks the host to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Auto,
    NwseResize,
    NeswResize,
    EwResize,
    NsResize,
}

impl Cursor {
    /// CSS cursor keyword.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
            Self::EwResize => "ew-resize",
            Self::NsResize => "ns-resize",
        }
    }
}

/// The displayable object the overlay resizes.
pub trait Target {
    /// World-space axis-aligned bounds, scale applied.
    fn bounds(&self) -> Bounds;
    /// Global position of the anchor point.
    fn global_position(&self) -> Point;
    fn set_position(&mut self, position: Point);
    /// Unscaled local size.
    fn local_size(&self) -> Size;
    fn scale(&self) -> Scale;
    fn set_scale(&mut self, scale: Scale);
    /// Anchor as fractions of the unscaled local box.
    fn anchor(&self) -> Anchor;
    fn set_anchor(&mut self, anchor: Anchor);
}

/// A drawable shape living inside a [`Layer`].
pub trait Shape {
    fn clear(&mut self);
    fn set_stroke(&mut self, width: f64, color: u32);
    fn set_fill(&mut self, color: u32, alpha: f64);
    /// Closed polygon through `points` in order.
    fn draw_polygon(&mut self, points: &[Point]);
    fn draw_circle(&mut self, center: Point, radius: f64);
    fn set_interactive(&mut self, interactive: bool);
    fn set_cursor(&mut self, cursor: Cursor);
    /// Route presses on this shape to the overlay as presses on `position`.
    fn bind_handle(&mut self, position: HandlePosition);
}

/// Container the overlay draws into.
///
/// The host registers press/move/release/release-outside handlers on the
/// layer and forwards them to the overlay.
pub trait Layer {
    type Shape: Shape;

    fn create_shape(&mut self) -> Self::Shape;
    fn add_child(&mut self, shape: Self::Shape);
    fn remove_children(&mut self);
    fn set_visible(&mut self, visible: bool);
    fn set_interactive(&mut self, interactive: bool);
    fn cursor(&self) -> Cursor;
    fn set_cursor(&mut self, cursor: Cursor);
}

/// "Call me once before the next paint" hook.
///
/// When a requested frame fires, the host calls
/// [`crate::overlay::Controls::on_frame`].
pub trait FrameScheduler {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    fn request_frame(&mut self) -> Self::Handle;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

// Borrowed hosts: `Controls` can hold `&mut` references instead of owning
// the target, layer or scheduler.

impl<T: Target + ?Sized> Target for &mut T {
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    fn global_position(&self) -> Point {
        (**self).global_position()
    }

    fn set_position(&mut self, position: Point) {
        (**self).set_position(position);
    }

    fn local_size(&self) -> Size {
        (**self).local_size()
    }

    fn scale(&self) -> Scale {
        (**self).scale()
    }

    fn set_scale(&mut self, scale: Scale) {
        (**self).set_scale(scale);
    }

    fn anchor(&self) -> Anchor {
        (**self).anchor()
    }

    fn set_anchor(&mut self, anchor: Anchor) {
        (**self).set_anchor(anchor);
    }
}

impl<L: Layer + ?Sized> Layer for &mut L {
    type Shape = L::Shape;

    fn create_shape(&mut self) -> Self::Shape {
        (**self).create_shape()
    }

    fn add_child(&mut self, shape: Self::Shape) {
        (**self).add_child(shape);
    }

    fn remove_children(&mut self) {
        (**self).remove_children();
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }

    fn set_interactive(&mut self, interactive: bool) {
        (**self).set_interactive(interactive);
    }

    fn cursor(&self) -> Cursor {
        (**self).cursor()
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        (**self).set_cursor(cursor);
    }
}

impl<F: FrameScheduler + ?Sized> FrameScheduler for &mut F {
    type Handle = F::Handle;

    fn request_frame(&mut self) -> Self::Handle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: Self::Handle) {
        (**self).cancel_frame(handle);
    }
}
