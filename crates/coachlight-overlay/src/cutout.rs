#![forbid(unsafe_code)]

//! Resolved cutout geometry.
//!
//! Every [`CutoutShape`] resolves to one parametric form: a rectangle with
//! per-axis corner radii. A circle is the degenerate case where both radii
//! reach the half-extents, a square is the case where both are zero. With a
//! single form, the transition between any two steps is a plain lerp over
//! `(rect, rx, ry)` and the mask path keeps a constant verb topology.

use coachlight_core::geometry::{Point, Rect, lerp};
use coachlight_scene::path::Path;

use crate::step::CutoutShape;

/// A cutout reduced to paintable geometry: a rectangle and corner radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCutout {
    /// Bounding rectangle of the cutout.
    pub rect: Rect,
    /// Horizontal corner radius, already clamped to `rect.width / 2`.
    pub rx: f32,
    /// Vertical corner radius, already clamped to `rect.height / 2`.
    pub ry: f32,
}

impl ResolvedCutout {
    /// Resolve a step's shape against its target rectangle.
    ///
    /// Steps without an explicit shape get a rounded rectangle with
    /// `default_radius` corners.
    pub fn resolve(target: Rect, shape: Option<CutoutShape>, default_radius: f32) -> Self {
        let half_w = target.width / 2.0;
        let half_h = target.height / 2.0;
        let (rx, ry) = match shape {
            Some(CutoutShape::Circle) => (half_w, half_h),
            Some(CutoutShape::Square) => (0.0, 0.0),
            Some(CutoutShape::RoundedRect(r)) => {
                let r = r.max(0.0);
                (r.min(half_w), r.min(half_h))
            }
            None => {
                let r = default_radius.max(0.0);
                (r.min(half_w), r.min(half_h))
            }
        };
        Self {
            rect: target,
            rx,
            ry,
        }
    }

    /// A zero-size cutout collapsed onto `center`, coordinates floored.
    ///
    /// This is the transition origin for the first step: the spotlight grows
    /// out of the target's center instead of sliding in from elsewhere.
    pub fn zero_at(center: Point) -> Self {
        Self {
            rect: Rect::new(center.x.floor(), center.y.floor(), 0.0, 0.0),
            rx: 0.0,
            ry: 0.0,
        }
    }

    /// Interpolate towards `other`. `t` is clamped to `[0.0, 1.0]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            rect: self.rect.lerp(other.rect, t),
            rx: lerp(self.rx, other.rx, t),
            ry: lerp(self.ry, other.ry, t),
        }
    }

    /// Build the even-odd mask path: the frame rectangle with this cutout
    /// punched through it.
    pub fn mask_path(&self, bounds: Rect) -> Path {
        let mut path = Path::new();
        path.push_rect(bounds);
        path.push_rounded_rect(self.rect, self.rx, self.ry);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_uses_half_extents() {
        let cutout = ResolvedCutout::resolve(
            Rect::new(0.0, 0.0, 40.0, 20.0),
            Some(CutoutShape::Circle),
            2.0,
        );
        assert_eq!(cutout.rx, 20.0);
        assert_eq!(cutout.ry, 10.0);
    }

    #[test]
    fn square_has_zero_radii() {
        let cutout = ResolvedCutout::resolve(
            Rect::new(0.0, 0.0, 40.0, 20.0),
            Some(CutoutShape::Square),
            2.0,
        );
        assert_eq!((cutout.rx, cutout.ry), (0.0, 0.0));
    }

    #[test]
    fn rounded_rect_clamps_to_half_extents() {
        let cutout = ResolvedCutout::resolve(
            Rect::new(0.0, 0.0, 40.0, 10.0),
            Some(CutoutShape::RoundedRect(12.0)),
            2.0,
        );
        assert_eq!(cutout.rx, 12.0);
        assert_eq!(cutout.ry, 5.0);
    }

    #[test]
    fn missing_shape_falls_back_to_default_radius() {
        let cutout = ResolvedCutout::resolve(Rect::new(0.0, 0.0, 40.0, 20.0), None, 2.0);
        assert_eq!((cutout.rx, cutout.ry), (2.0, 2.0));
    }

    #[test]
    fn negative_radius_treated_as_zero() {
        let cutout = ResolvedCutout::resolve(
            Rect::new(0.0, 0.0, 40.0, 20.0),
            Some(CutoutShape::RoundedRect(-3.0)),
            2.0,
        );
        assert_eq!((cutout.rx, cutout.ry), (0.0, 0.0));
    }

    #[test]
    fn zero_at_floors_center() {
        let cutout = ResolvedCutout::zero_at(Point::new(10.7, 20.3));
        assert_eq!(cutout.rect, Rect::new(10.0, 20.0, 0.0, 0.0));
        assert_eq!((cutout.rx, cutout.ry), (0.0, 0.0));
    }

    #[test]
    fn lerp_midpoint_between_shapes() {
        let from = ResolvedCutout::resolve(
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Some(CutoutShape::Square),
            2.0,
        );
        let to = ResolvedCutout::resolve(
            Rect::new(20.0, 20.0, 40.0, 40.0),
            Some(CutoutShape::Circle),
            2.0,
        );
        let mid = from.lerp(to, 0.5);
        assert_eq!(mid.rect, Rect::new(10.0, 10.0, 30.0, 30.0));
        assert_eq!(mid.rx, 10.0);
        assert_eq!(mid.ry, 10.0);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let from = ResolvedCutout::zero_at(Point::new(50.0, 50.0));
        let to = ResolvedCutout::resolve(
            Rect::new(10.0, 10.0, 80.0, 30.0),
            Some(CutoutShape::Circle),
            2.0,
        );
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn mask_path_is_frame_plus_cutout() {
        let cutout = ResolvedCutout::resolve(Rect::new(10.0, 10.0, 40.0, 20.0), None, 2.0);
        let path = cutout.mask_path(Rect::new(0.0, 0.0, 320.0, 568.0));
        // Frame rectangle (5 verbs) plus the rounded cutout (10 verbs).
        assert_eq!(path.len(), 15);
    }
}
