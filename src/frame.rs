use crate::config::SceneConfig;
use crate::math::{ease_in_out_quad, rotate_x, rotate_y, rotate_z};
use crate::point::Point;
use crate::ring::loxo;
use std::f64::consts::{FRAC_PI_2, PI};

/// Maximum twist, two full turns
pub const MAX_TWIST_ANGLE: f64 = 4.0 * PI;

/// Parameters derived from the animation phase for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Phase in [0, PI), one full animation cycle
    pub t: f64,
    /// Global half-turn around Y, offset so the cycle starts side-on
    pub rotation_y: f64,
    /// In-plane wobble
    pub rotation_z: f64,
    /// Eased twist progress in [0, 1]
    pub twist: f64,
    pub twist_angle: f64,
    /// Direction of each ring's own tilt, flips after the half cycle
    pub twist_sign: f64,
}

impl FrameParams {
    /// Derives the parameters for a wall-clock time in seconds
    pub fn at(seconds: f64, speed: f64) -> Self {
        Self::from_phase((seconds * speed) % PI)
    }

    pub fn from_phase(t: f64) -> Self {
        let twist = ease_in_out_quad(((2.0 * t + PI).cos() + 1.0) * 0.5);
        FrameParams {
            t,
            rotation_y: -t - FRAC_PI_2,
            rotation_z: FRAC_PI_2 * t.cos(),
            twist,
            twist_angle: twist * MAX_TWIST_ANGLE,
            twist_sign: if t > FRAC_PI_2 { 1.0 } else { -1.0 },
        }
    }
}

/// Computes the transformed point set of every ring, in configuration order.
///
/// Rotations are applied in a fixed order: the ring's own tilt around X,
/// then the global Y spin, the Z wobble and finally the pointer offset
/// around Y.
pub fn compose(config: &SceneConfig, params: &FrameParams, offset: f64) -> Vec<Vec<Point>> {
    config
        .rings
        .iter()
        .map(|ring| {
            let tilt = ring.angle * (1.0 - params.twist) * params.twist_sign;
            loxo(ring.radius, params.twist_angle, config.segments)
                .into_iter()
                .map(|p| {
                    let p = rotate_x(p, tilt);
                    rotate_y(
                        rotate_z(rotate_y(p, params.rotation_y), params.rotation_z),
                        offset,
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
