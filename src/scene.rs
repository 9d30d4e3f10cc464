//! Scene descriptions: ordered shape construction requests
//!
//! A scene is the wire form of a render request: a JSON array of tagged
//! shape specs, each validated into a core [`Shape`] through the shape
//! constructors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::render::Shape;

/// A single shape construction request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    /// Single marked cell
    Dot { at: (i32, i32) },
    /// Run of cells between two endpoints sharing a y ordinate
    Horizontal { from: (i32, i32), to: (i32, i32) },
    /// Run of cells between two endpoints sharing an x ordinate
    Vertical { from: (i32, i32), to: (i32, i32) },
}

impl ShapeSpec {
    /// Validate the request into a [`Shape`]
    pub fn build(self) -> Result<Shape> {
        match self {
            Self::Dot { at } => Ok(Shape::dot(at.into())),
            Self::Horizontal { from, to } => Shape::horizontal(from.into(), to.into()),
            Self::Vertical { from, to } => Shape::vertical(from.into(), to.into()),
        }
    }
}

/// An ordered list of shape construction requests
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Scene {
    pub shapes: Vec<ShapeSpec>,
}

impl Scene {
    /// Parse a scene from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scene file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading scene");
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Validate every request into core shapes, preserving order
    pub fn build(&self) -> Result<Vec<Shape>> {
        self.shapes.iter().map(|spec| spec.build()).collect()
    }

    /// Built-in demonstration scene: crossed segments with two dots
    pub fn demo() -> Self {
        Self {
            shapes: vec![
                ShapeSpec::Horizontal {
                    from: (0, 0),
                    to: (5, 0),
                },
                ShapeSpec::Vertical {
                    from: (2, -2),
                    to: (2, 4),
                },
                ShapeSpec::Dot { at: (5, 4) },
                ShapeSpec::Dot { at: (4, 2) },
            ],
        }
    }
}
