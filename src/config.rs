use crate::error::ConfigError;
use crate::graphics::Color;
use std::f64::consts::PI;

/// A single ring of the sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingDescriptor {
    pub color: Color,
    pub radius: f64,
    /// Fixed tilt around the X axis, faded out while the ring twists
    pub angle: f64,
}

impl RingDescriptor {
    pub const fn new(color: Color, radius: f64, angle: f64) -> Self {
        RingDescriptor {
            color,
            radius,
            angle,
        }
    }
}

/// Default rings, ordered by ascending radius
pub const DEFAULT_RINGS: [RingDescriptor; 3] = [
    RingDescriptor::new(Color::rgb8(0x21, 0xa5, 0xad), 84.0, PI / 3.0),
    RingDescriptor::new(Color::rgb8(0xff, 0xad, 0x10), 92.0, -PI / 3.0),
    RingDescriptor::new(Color::rgb8(0xef, 0x42, 0x39), 100.0, 0.0),
];

pub const DEFAULT_SEGMENTS: usize = 200;
pub const DEFAULT_SPEED: f64 = 0.8;
pub const DEFAULT_LINE_WIDTH: f64 = 5.0;

/// Immutable scene configuration, fixed at startup
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Rings in ascending radius order; the renderer relies on it
    pub rings: Vec<RingDescriptor>,
    /// Points per ring
    pub segments: usize,
    /// Time scaling factor, slower towards 0
    pub speed: f64,
    /// Stroke width in scene units
    pub line_width: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            rings: DEFAULT_RINGS.to_vec(),
            segments: DEFAULT_SEGMENTS,
            speed: DEFAULT_SPEED,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl SceneConfig {
    /// Checks the invariants the frame composer and renderer depend on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments < 3 {
            return Err(ConfigError::TooFewSegments(self.segments));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(ConfigError::InvalidLineWidth(self.line_width));
        }
        if self.rings.is_empty() {
            return Err(ConfigError::NoRings);
        }
        for (index, pair) in self.rings.windows(2).enumerate() {
            if pair[1].radius <= pair[0].radius {
                return Err(ConfigError::UnorderedRings {
                    index: index + 1,
                    radius: pair[1].radius,
                    previous: pair[0].radius,
                });
            }
        }
        Ok(())
    }

    /// Radius of the outermost ring
    pub fn max_radius(&self) -> f64 {
        self.rings.last().map_or(0.0, |ring| ring.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SceneConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.rings.len(), 3);
        assert_eq!(config.max_radius(), 100.0);
    }

    #[test]
    fn rejects_degenerate_polygons() {
        let config = SceneConfig {
            segments: 2,
            ..SceneConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooFewSegments(2)));
    }

    #[test]
    fn rejects_non_positive_speed() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SceneConfig {
                speed,
                ..SceneConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed(_))));
        }
    }

    #[test]
    fn rejects_bad_line_width() {
        let config = SceneConfig {
            line_width: 0.0,
            ..SceneConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidLineWidth(0.0)));
    }

    #[test]
    fn rejects_empty_ring_list() {
        let config = SceneConfig {
            rings: Vec::new(),
            ..SceneConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoRings));
    }

    #[test]
    fn rejects_rings_out_of_order() {
        let mut rings = DEFAULT_RINGS.to_vec();
        rings.swap(0, 2);
        let config = SceneConfig {
            rings,
            ..SceneConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnorderedRings {
                index: 1,
                radius: 92.0,
                previous: 100.0,
            })
        );
    }
}
