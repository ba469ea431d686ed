//! Point helpers used by the curve model.
//!
//! Points are plain `kurbo::Point` values. Offsets between points are
//! `kurbo::Vec2`, so `a - b`, `a + v` and `-v` come from kurbo directly.

use kurbo::Point;

/// Extension methods on `kurbo::Point` for curve editing.
pub trait PointExt {
    /// Reflect this point through `center`.
    fn mirrored(self, center: Point) -> Point;

    /// Round both coordinates to the nearest whole unit.
    fn rounded(self) -> Point;

    /// Whether both coordinates are whole numbers.
    fn is_integral(self) -> bool;
}

impl PointExt for Point {
    fn mirrored(self, center: Point) -> Point {
        center - (self - center)
    }

    fn rounded(self) -> Point {
        // Adding 0.0 turns -0.0 into 0.0 so generated code never prints "-0.0".
        Point::new(self.x.round() + 0.0, self.y.round() + 0.0)
    }

    fn is_integral(self) -> bool {
        self.x.fract() == 0.0 && self.y.fract() == 0.0
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Reflect `point` through `center`.
pub fn mirror(point: Point, center: Point) -> Point {
    point.mirrored(center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn test_distance() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mirror_about_center() {
        let m = mirror(Point::new(50.0, 20.0), Point::new(100.0, 0.0));
        assert_eq!(m, Point::new(150.0, -20.0));
    }

    #[test]
    fn test_mirror_is_involutive() {
        let center = Point::new(-7.0, 12.0);
        for p in [Point::new(0.0, 0.0), Point::new(13.0, -4.0), Point::new(250.0, 99.0)] {
            assert_eq!(mirror(mirror(p, center), center), p);
        }
    }

    #[test]
    fn test_rounded_is_idempotent() {
        for p in [Point::new(1.4, 2.6), Point::new(-3.5, 7.49), Point::new(10.0, -0.2)] {
            let once = p.rounded();
            assert_eq!(once.rounded(), once);
            assert!(once.is_integral());
        }
    }

    #[test]
    fn test_rounded_normalizes_negative_zero() {
        let p = Point::new(-0.3, -0.1).rounded();
        assert!(p.x.is_sign_positive());
        assert!(p.y.is_sign_positive());
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10.0, 5.0);
        let offset = Vec2::new(3.0, -2.0);
        assert_eq!(a + offset, Point::new(13.0, 3.0));
        assert_eq!(a + (-offset), Point::new(7.0, 7.0));
        assert_eq!(Point::new(13.0, 3.0) - a, offset);
    }
}
