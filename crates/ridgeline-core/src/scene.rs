// File: crates/ridgeline-core/src/scene.rs
// Summary: Renderer-agnostic display list produced by chart layout.

use crate::types::{Color, Point};

/// A single straight line segment (grid lines).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

/// An open polyline stroked with one color (one per series).
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub color: Color,
    pub width: f32,
}

/// A filled circular marker on a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// A piece of text anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub origin: Point,
    pub color: Color,
}

/// Everything one render cycle draws, in paint order: grid, then lines,
/// then dots, then labels. Backends only stroke this; they never consult
/// the data source.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub grid: Vec<Segment>,
    pub lines: Vec<Polyline>,
    pub dots: Vec<Dot>,
    pub labels: Vec<TextLabel>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty() && self.lines.is_empty() && self.dots.is_empty() && self.labels.is_empty()
    }
}
