//! # gridtrace
//!
//! Traces axis-aligned shapes (dots, horizontal and vertical segments) onto
//! a character grid sized to their joint bounding frame, and renders the
//! grid as lines of text.
//!
//! The crate exposes the render pipeline directly:
//!
//! ```
//! use gridtrace::{render_to_string, Point, RenderConfig, Shape};
//!
//! let shapes = [
//!     Shape::horizontal(Point::new(0, 0), Point::new(2, 0))?,
//!     Shape::dot(Point::new(1, 1)),
//! ];
//! let text = render_to_string(&shapes, &RenderConfig::default())?;
//! assert_eq!(text, ".#.\n###\n");
//! # Ok::<(), gridtrace::TraceError>(())
//! ```
//!
//! Scenes can also arrive as JSON through [`Scene`], the wire form used by
//! the `gridtrace` binary.

pub mod config;
pub mod errors;
pub mod render;
pub mod scene;

pub use config::RenderConfig;
pub use errors::{Result, TraceError};
pub use render::{
    rasterize, render, render_to_string, trace_into, Axis, Canvas, Frame, Point, PointBuffer,
    Shape,
};
pub use scene::{Scene, ShapeSpec};
