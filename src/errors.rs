use std::io;

use thiserror::Error;

use crate::render::{Axis, Frame, Point};

/// Errors that can occur while building shapes or rendering a scene
#[derive(Error, Debug)]
pub enum TraceError {
    /// Error when a segment's endpoints do not share the required ordinate
    #[error("{axis} segment endpoints {a} and {b} are not axis-aligned")]
    SkewedSegment { axis: Axis, a: Point, b: Point },

    /// Error when `next` is asked to advance from a point that is not on the shape
    #[error("point {point} is not on the {shape} being traversed")]
    ForeignPoint { shape: &'static str, point: Point },

    /// Error when a bounding frame is requested for zero points
    #[error("cannot frame an empty point set")]
    EmptyFrame,

    /// Error when `paint` is given a point outside the canvas frame
    #[error("point {point} lies outside the canvas frame {frame}")]
    PointOutsideFrame { point: Point, frame: Frame },

    /// Error when a shape's cycle fails to return to its start within the step limit
    #[error("shape cycle did not close within {limit} steps")]
    UnclosedCycle { limit: usize },

    /// Error related to IO operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error when parsing a scene description
    #[error("scene parse error: {0}")]
    Scene(#[from] serde_json::Error),
}

/// Type alias for Result with TraceError
pub type Result<T> = std::result::Result<T, TraceError>;
