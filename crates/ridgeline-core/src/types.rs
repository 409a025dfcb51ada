// File: crates/ridgeline-core/src/types.rs
// Summary: Shared types and constants (geometry, colors, grid limits).

/// Smallest allowed distance between grid lines, in pixels.
/// Spacings below this would degenerate into a near-solid fill.
pub const MIN_GRID_SPACING: f32 = 3.0;

/// A point in pixel space. Y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }
}

/// RGBA color, 8 bits per channel. Renderer-agnostic; backends convert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Fully transparent; the default popup background.
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);
}
