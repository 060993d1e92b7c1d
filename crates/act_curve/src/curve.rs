//! Bezier curves
//!
//! Cubic Bezier curves over any [`Components`] vector. Evaluation uses
//! de Casteljau's construction (repeated interpolation), which is the
//! standard cubic polynomial and stays exact at the end points and for
//! degenerate (constant) curves. `t` is never clamped here; values outside
//! `[0, 1]` extrapolate the same polynomial.

use crate::vectors::{Components, VectorApi};

/// Point on a quadratic Bezier curve
pub fn quadratic_point<V: Components>(p0: V, p1: V, p2: V, t: f64) -> V {
    let a = V::interpolate(p0, p1, t);
    let b = V::interpolate(p1, p2, t);
    V::interpolate(a, b, t)
}

/// Point on a cubic Bezier curve
pub fn cubic_point<V: Components>(p0: V, p1: V, p2: V, p3: V, t: f64) -> V {
    let a = V::interpolate(p0, p1, t);
    let b = V::interpolate(p1, p2, t);
    let c = V::interpolate(p2, p3, t);
    quadratic_point(a, b, c, t)
}

/// A cubic Bezier curve: start, two control points, end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier4<V> {
    pub points: [V; 4],
}

impl<V: Components> Bezier4<V> {
    pub fn new(points: [V; 4]) -> Self {
        Self { points }
    }

    /// A curve that stays at `point` for every `t`
    pub fn constant(point: V) -> Self {
        Self {
            points: [point; 4],
        }
    }

    pub fn start(&self) -> V {
        self.points[0]
    }

    pub fn end(&self) -> V {
        self.points[3]
    }

    /// Position at progress `t`
    pub fn point_at(&self, t: f64) -> V {
        let [p0, p1, p2, p3] = self.points;
        cubic_point(p0, p1, p2, p3, t)
    }

    /// Derivative with respect to `t`
    ///
    /// `3 * B2(p1 - p0, p2 - p1, p3 - p2; t)`, in units per full progress.
    pub fn velocity_at(&self, t: f64) -> V {
        let [p0, p1, p2, p3] = self.points;
        quadratic_point(p1.subtract(p0), p2.subtract(p1), p3.subtract(p2), t).multiply_scalar(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::{Interpolate, Vector1D, Vector2D, Vector3D};

    fn ease() -> Bezier4<Vector1D> {
        Bezier4::new([
            Vector1D::new(-1.0),
            Vector1D::new(-1.0),
            Vector1D::new(0.0),
            Vector1D::new(0.0),
        ])
    }

    #[test]
    fn test_degenerate_curve_is_constant() {
        let p = Vector3D::new(0.1, -7.3, 42.0);
        let curve = Bezier4::constant(p);
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert_eq!(curve.point_at(t), p);
            assert_eq!(curve.velocity_at(t), Vector3D::ZERO);
        }
    }

    #[test]
    fn test_end_points() {
        let curve = ease();
        assert_eq!(curve.point_at(0.0), Vector1D::new(-1.0));
        assert_eq!(curve.point_at(1.0), Vector1D::new(0.0));
        assert_eq!(curve.start(), Vector1D::new(-1.0));
        assert_eq!(curve.end(), Vector1D::new(0.0));
    }

    #[test]
    fn test_matches_polynomial() {
        let curve = Bezier4::new([
            Vector2D::new(0.0, 0.0),
            Vector2D::new(1.0, 3.0),
            Vector2D::new(2.0, -1.0),
            Vector2D::new(4.0, 2.0),
        ]);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let u = 1.0 - t;
            let expected = |c: [f64; 4]| {
                u * u * u * c[0] + 3.0 * u * u * t * c[1] + 3.0 * u * t * t * c[2] + t * t * t * c[3]
            };
            let point = curve.point_at(t);
            assert!((point.x() - expected([0.0, 1.0, 2.0, 4.0])).abs() < 1e-12);
            assert!((point.y() - expected([0.0, 3.0, -1.0, 2.0])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let curve = Bezier4::new([
            Vector1D::new(0.0),
            Vector1D::new(2.0),
            Vector1D::new(-1.0),
            Vector1D::new(1.0),
        ]);
        let h = 1e-6;
        for &t in &[0.1, 0.35, 0.5, 0.9] {
            let numeric = (curve.point_at(t + h).x() - curve.point_at(t - h).x()) / (2.0 * h);
            assert!((curve.velocity_at(t).x() - numeric).abs() < 1e-5);
        }
        // B'(0) = 3 (p1 - p0), B'(1) = 3 (p3 - p2)
        assert!((curve.velocity_at(0.0).x() - 6.0).abs() < 1e-12);
        assert!((curve.velocity_at(1.0).x() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_extrapolates_outside_unit_interval() {
        let line = Bezier4::new([
            Vector1D::new(0.0),
            Vector1D::new(1.0),
            Vector1D::new(2.0),
            Vector1D::new(3.0),
        ]);
        assert!(line.point_at(2.0).approx_eq(&Vector1D::new(6.0), 1e-9));
        assert!(line.point_at(-1.0).approx_eq(&Vector1D::new(-3.0), 1e-9));
    }
}
