#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are continuous f32 points (origin at top-left, y growing
//! down), matching the compositor space the overlay is laid out in. Layout
//! that must land on whole points (caption centering, the first-step zero
//! cutout) floors explicitly at the call site.

/// A point in overlay coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linearly interpolate towards `other`.
    ///
    /// `t` is clamped to [0.0, 1.0].
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if either extent is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle for target regions, layout bounds, and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn min_x(&self) -> f32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn min_y(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if all fields are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Left/top edges are inclusive, right/bottom exclusive.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.max_x() && p.y >= self.y && p.y < self.max_y()
    }

    /// The smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.max_x().max(other.max_x());
        let bottom = self.max_y().max(other.max_y());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Linearly interpolate every field towards `other`.
    ///
    /// `t` is clamped to [0.0, 1.0].
    pub fn lerp(self, other: Rect, t: f32) -> Rect {
        Rect {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
            width: lerp(self.width, other.width, t),
            height: lerp(self.height, other.height, t),
        }
    }
}

/// Linear interpolation with `t` clamped to [0.0, 1.0].
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}
