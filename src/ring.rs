use crate::point::Point;
use std::f64::consts::{FRAC_PI_2, PI};

/// Builds a twisted ring of `segments` points.
///
/// Points start evenly spaced on a circle of `radius` in the X/Y plane. Each
/// one is then rotated around the X axis by an amount proportional to its
/// horizontal position: the leftmost point is not rotated at all and the
/// rightmost one by the full `twist_angle`. With a zero twist the result is
/// a flat ring.
pub fn loxo(radius: f64, twist_angle: f64, segments: usize) -> Vec<Point> {
    (0..segments)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / segments as f64;
            let (s, c) = a.sin_cos();
            // (c + 1) / 2 is the horizontal position, 0 at the left, 1 at the right
            let axis_angle = FRAC_PI_2 - (c + 1.0) * 0.5 * twist_angle;
            Point::new(
                radius * c,
                radius * s * axis_angle.sin(),
                radius * s * axis_angle.cos(),
            )
        })
        .collect()
}
