use crate::point::Point;

/// Ease-in-out quadratic: accelerates up to t = 0.5, decelerates after
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 2.0 * u * u
    }
}

/// Rotates a point around the X axis, treating (y, z) as a polar pair
pub fn rotate_x(p: Point, angle: f64) -> Point {
    let d = (p.y * p.y + p.z * p.z).sqrt();
    let theta = p.y.atan2(p.z) + angle;
    let (sin, cos) = theta.sin_cos();
    Point::new(p.x, d * sin, d * cos)
}

/// Rotates a point around the Y axis, treating (z, x) as a polar pair
pub fn rotate_y(p: Point, angle: f64) -> Point {
    let d = (p.z * p.z + p.x * p.x).sqrt();
    let theta = p.z.atan2(p.x) + angle;
    let (sin, cos) = theta.sin_cos();
    Point::new(d * cos, p.y, d * sin)
}

/// Rotates a point around the Z axis, a plain 2D rotation of (x, y)
pub fn rotate_z(p: Point, angle: f64) -> Point {
    let d = (p.y * p.y + p.x * p.x).sqrt();
    let theta = p.y.atan2(p.x) + angle;
    let (sin, cos) = theta.sin_cos();
    Point::new(d * cos, d * sin, p.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn assert_point_eq(a: Point, b: Point) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPS);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPS);
        assert_abs_diff_eq!(a.z, b.z, epsilon = EPS);
    }

    fn samples() -> Vec<Point> {
        vec![
            Point::new(1.0, 2.0, 3.0),
            Point::new(-4.5, 0.25, -7.0),
            Point::new(0.0, -3.0, 0.5),
            Point::new(84.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn easing_hits_fixed_points() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_abs_diff_eq!(ease_in_out_quad(0.5), 0.5, epsilon = EPS);
        assert_abs_diff_eq!(ease_in_out_quad(0.25), 0.125, epsilon = EPS);
        assert_abs_diff_eq!(ease_in_out_quad(0.75), 0.875, epsilon = EPS);
    }

    #[test]
    fn easing_is_monotonic_and_bounded() {
        let mut previous = ease_in_out_quad(0.0);
        for i in 1..=1000 {
            let value = ease_in_out_quad(i as f64 / 1000.0);
            assert!((0.0..=1.0).contains(&value));
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn zero_angle_is_identity() {
        for p in samples() {
            assert_point_eq(rotate_x(p, 0.0), p);
            assert_point_eq(rotate_y(p, 0.0), p);
            assert_point_eq(rotate_z(p, 0.0), p);
        }
    }

    #[test]
    fn rotation_is_undone_by_its_inverse() {
        for p in samples() {
            for angle in [0.3, -1.2, PI, 2.5 * PI] {
                assert_point_eq(rotate_x(rotate_x(p, angle), -angle), p);
                assert_point_eq(rotate_y(rotate_y(p, angle), -angle), p);
                assert_point_eq(rotate_z(rotate_z(p, angle), -angle), p);
            }
        }
    }

    #[test]
    fn axis_distance_is_preserved() {
        for p in samples() {
            let q = rotate_x(p, 0.7);
            assert_abs_diff_eq!(q.y.hypot(q.z), p.y.hypot(p.z), epsilon = EPS);
            assert_abs_diff_eq!(q.x, p.x, epsilon = EPS);

            let q = rotate_y(p, 0.7);
            assert_abs_diff_eq!(q.z.hypot(q.x), p.z.hypot(p.x), epsilon = EPS);
            assert_abs_diff_eq!(q.y, p.y, epsilon = EPS);

            let q = rotate_z(p, 0.7);
            assert_abs_diff_eq!(q.x.hypot(q.y), p.x.hypot(p.y), epsilon = EPS);
            assert_abs_diff_eq!(q.z, p.z, epsilon = EPS);
        }
    }

    #[test]
    fn quarter_turns_follow_the_documented_direction() {
        assert_point_eq(rotate_z(Point::new(1.0, 0.0, 0.0), PI / 2.0), Point::new(0.0, 1.0, 0.0));
        assert_point_eq(rotate_y(Point::new(1.0, 0.0, 0.0), PI / 2.0), Point::new(0.0, 0.0, 1.0));
        assert_point_eq(rotate_x(Point::new(0.0, 0.0, 1.0), PI / 2.0), Point::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn points_on_the_axis_stay_put() {
        let on_x = Point::new(5.0, 0.0, 0.0);
        assert_point_eq(rotate_x(on_x, 1.0), on_x);
        let on_y = Point::new(0.0, 5.0, 0.0);
        assert_point_eq(rotate_y(on_y, 1.0), on_y);
        let on_z = Point::new(0.0, 0.0, 5.0);
        assert_point_eq(rotate_z(on_z, 1.0), on_z);
    }

    #[test]
    fn rotations_do_not_commute() {
        let p = Point::new(1.0, 2.0, 3.0);
        let yz = rotate_z(rotate_y(p, 0.8), 0.4);
        let zy = rotate_y(rotate_z(p, 0.4), 0.8);
        let gap = Point::new(yz.x - zy.x, yz.y - zy.y, yz.z - zy.z);
        assert!(gap.norm() > 1e-3);
    }
}
