use crate::config::RingDescriptor;
use crate::point::Point;
use crate::surface::DrawingSurface;

/// Which half of the sphere a pass draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// z < 0, drawn first from the largest ring to the smallest
    Behind,
    /// z > 0, drawn second from the smallest ring to the largest
    Front,
}

impl Half {
    /// Points with z exactly 0 belong to neither half
    pub fn contains(self, p: &Point) -> bool {
        match self {
            Half::Behind => p.z < 0.0,
            Half::Front => p.z > 0.0,
        }
    }
}

/// Strokes one half of every ring.
///
/// `rings` and `point_sets` are in ascending radius order. Each selected
/// point is joined to the one before it, wrapping from the first point back
/// to the last, so a segment is drawn when its end point lies in `half`.
/// Calling this for `Behind` and then `Front` approximates the occlusion of
/// nested rings without a depth buffer.
pub fn draw_rings<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    rings: &[RingDescriptor],
    point_sets: &[Vec<Point>],
    half: Half,
) {
    let count = rings.len().min(point_sets.len());
    let order: Box<dyn Iterator<Item = usize>> = match half {
        Half::Behind => Box::new((0..count).rev()),
        Half::Front => Box::new(0..count),
    };

    for index in order {
        let points = &point_sets[index];
        surface.set_stroke_color(rings[index].color);
        surface.begin_path();
        for (j, p) in points.iter().enumerate() {
            if !half.contains(p) {
                continue;
            }
            let prev = &points[if j == 0 { points.len() - 1 } else { j - 1 }];
            surface.move_to(prev.x, prev.y);
            surface.line_to(p.x, p.y);
        }
        surface.stroke();
    }
}
