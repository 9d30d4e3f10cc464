//! Shape tracing and grid rendering
//!
//! The pipeline walks each shape's point cycle into a [`PointBuffer`],
//! derives the joint [`Frame`], then paints a [`Canvas`] covering it and
//! flushes the grid as text rows:
//!
//! ```text
//!   [Shape]* --trace--> PointBuffer --frame--> Frame
//!                            |                   |
//!                            +------paint--------+--> Canvas --flush--> lines
//! ```

mod canvas;
mod frame;
mod pipeline;
mod point;
mod shape;
mod trace;

pub use canvas::Canvas;
pub use frame::Frame;
pub use pipeline::{rasterize, render, render_to_string};
pub use point::Point;
pub use shape::{Axis, Shape};
pub use trace::{trace_into, PointBuffer};
