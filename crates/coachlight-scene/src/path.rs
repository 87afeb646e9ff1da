#![forbid(unsafe_code)]

//! Vector path assembly for mask shapes.
//!
//! Paths are flat verb lists a host vector backend can replay directly.
//! The only consumers are the overlay's mask (a bounds rectangle plus one
//! cutout subpath, filled even-odd) and tests, so the surface stays small:
//! rectangles, and rounded rectangles whose per-axis corner radii degrade
//! gracefully: `(0, 0)` is a sharp rectangle, `(w/2, h/2)` is an exact
//! ellipse. That one parametric shape covers every cutout variant and makes
//! shape morphs a plain interpolation of `(rect, rx, ry)`.

use coachlight_core::geometry::{Point, Rect};
use smallvec::SmallVec;

/// Control-point offset ratio approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// A single path verb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEl {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier: two control points, then the end point.
    CubicTo(Point, Point, Point),
    Close,
}

/// Fill rule for self-overlapping paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    /// Regions covered an even number of times are left unfilled; this is
    /// what punches the cutout out of the mask rectangle.
    EvenOdd,
}

/// A flat list of path verbs.
///
/// Inline capacity covers a full mask path (bounds rectangle + rounded
/// cutout = 15 verbs) without allocating.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    els: SmallVec<[PathEl; 16]>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.els.push(PathEl::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.els.push(PathEl::LineTo(p));
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.els.push(PathEl::CubicTo(c1, c2, p));
    }

    pub fn close(&mut self) {
        self.els.push(PathEl::Close);
    }

    /// Append a rectangle subpath (clockwise).
    pub fn push_rect(&mut self, rect: Rect) {
        self.move_to(Point::new(rect.x, rect.y));
        self.line_to(Point::new(rect.max_x(), rect.y));
        self.line_to(Point::new(rect.max_x(), rect.max_y()));
        self.line_to(Point::new(rect.x, rect.max_y()));
        self.close();
    }

    /// Append a rounded-rectangle subpath (clockwise) with per-axis corner
    /// radii.
    ///
    /// Radii are clamped to the half-extents. Degenerate edges are kept as
    /// zero-length lines so the verb topology is constant across all radii,
    /// which keeps interpolating hosts honest: a sharp rectangle, a rounded
    /// one, and a full ellipse are the same ten verbs.
    pub fn push_rounded_rect(&mut self, rect: Rect, rx: f32, ry: f32) {
        let rx = rx.clamp(0.0, rect.width / 2.0);
        let ry = ry.clamp(0.0, rect.height / 2.0);
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.max_x(), rect.max_y());
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        self.move_to(Point::new(x0 + rx, y0));
        self.line_to(Point::new(x1 - rx, y0));
        self.cubic_to(
            Point::new(x1 - rx + kx, y0),
            Point::new(x1, y0 + ry - ky),
            Point::new(x1, y0 + ry),
        );
        self.line_to(Point::new(x1, y1 - ry));
        self.cubic_to(
            Point::new(x1, y1 - ry + ky),
            Point::new(x1 - rx + kx, y1),
            Point::new(x1 - rx, y1),
        );
        self.line_to(Point::new(x0 + rx, y1));
        self.cubic_to(
            Point::new(x0 + rx - kx, y1),
            Point::new(x0, y1 - ry + ky),
            Point::new(x0, y1 - ry),
        );
        self.line_to(Point::new(x0, y0 + ry));
        self.cubic_to(
            Point::new(x0, y0 + ry - ky),
            Point::new(x0 + rx - kx, y0),
            Point::new(x0 + rx, y0),
        );
        self.close();
    }

    /// The verbs in order.
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    pub fn len(&self) -> usize {
        self.els.len()
    }
}
