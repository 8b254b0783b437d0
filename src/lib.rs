//! Bounding-box transform controls for a single visual object.
//!
//! The overlay draws a border, eight resize handles and a faint hit area
//! around one target, and turns pointer drags on those handles into new
//! scale factors for the target. The rendering host stays outside this
//! crate: it is reached only through the traits in [`host`], and it is
//! responsible for delivering pointer events and frame callbacks to
//! [`overlay::Controls`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, bounds, and the box/border/handle geometry kernel |
//! | [`origin`] | Origin axes, anchor fractions, and the origin translator |
//! | [`handle`] | Handle positions, cursor/origin lookup tables, handle drawing |
//! | [`drag`] | Transform state and the drag gesture state machine |
//! | [`frame`] | Single-slot coalescing of scale updates per frame |
//! | [`overlay`] | The overlay composer that ties everything to a host |
//! | [`host`] | Traits the rendering host implements |
//! | [`headless`] | In-memory host used by tests and the replay binary |
//! | [`config`] | Overlay configuration and validation |
//! | [`error`] | Error type |
//! | [`consts`] | Shared defaults (sizes, colors, alphas) |

pub mod config;
pub mod consts;
pub mod drag;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod handle;
pub mod headless;
pub mod host;
pub mod origin;
pub mod overlay;

pub use config::{ControlsConfig, CornerStyle};
pub use error::ControlsError;
pub use geometry::{Anchor, Bounds, LocalPoint, Point, Scale, Size};
pub use handle::HandlePosition;
pub use overlay::Controls;
