//! The trace → frame → paint → flush pipeline

use std::io::Write;

use tracing::debug;

use super::canvas::Canvas;
use super::frame::Frame;
use super::shape::Shape;
use super::trace::{trace_into, PointBuffer};
use crate::config::RenderConfig;
use crate::errors::Result;

/// Trace and paint `shapes` into a canvas sized to their joint frame
///
/// This is the single error boundary of a render: any failure aborts the
/// whole pass, and the intermediate buffer and canvas are dropped with it.
pub fn rasterize(shapes: &[Shape], config: &RenderConfig) -> Result<Canvas> {
    let mut buffer = PointBuffer::new();
    for shape in shapes {
        trace_into(shape, &mut buffer, config.trace_limit)?;
    }

    let frame = Frame::over(buffer.points())?;
    debug!(shapes = shapes.len(), points = buffer.len(), frame = %frame, "framed scene");

    let mut canvas = Canvas::allocate(frame, config.fill);
    for &point in buffer.points() {
        canvas.paint(point, config.mark)?;
    }
    debug!(rows = canvas.rows(), cols = canvas.cols(), "painted canvas");
    Ok(canvas)
}

/// Render `shapes` and write the grid rows to `sink`, top to bottom
pub fn render<W: Write>(shapes: &[Shape], config: &RenderConfig, sink: &mut W) -> Result<()> {
    rasterize(shapes, config)?.flush(sink)
}

/// Render `shapes` into an owned string, one line per grid row
pub fn render_to_string(shapes: &[Shape], config: &RenderConfig) -> Result<String> {
    let canvas = rasterize(shapes, config)?;
    let mut out = String::with_capacity(canvas.rows() * (canvas.cols() + 1));
    for line in canvas.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}
