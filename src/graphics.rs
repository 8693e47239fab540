use crate::surface::{DrawingSurface, LineCap, LineJoin};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Raster drawing surface backed by a pixel buffer.
///
/// Empty pixels are `None` so the presenter can leave the terminal
/// background untouched.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Option<Color>>,
    /// Translation in device pixels
    origin: [f64; 2],
    zoom: f64,
    /// Subpaths in device coordinates
    path: Vec<Vec<[f64; 2]>>,
    stroke_color: Color,
    line_width: f64,
    line_cap: LineCap,
    line_join: LineJoin,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![None; width * height],
            origin: [0.0, 0.0],
            zoom: 1.0,
            path: Vec::new(),
            stroke_color: Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }

    /// Pixel at device coordinates, `None` when empty or out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            None
        }
    }

    /// Number of painted pixels
    pub fn painted(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }

    fn to_device(&self, x: f64, y: f64) -> [f64; 2] {
        [
            x * self.zoom + self.origin[0],
            y * self.zoom + self.origin[1],
        ]
    }

    /// Paints the brush centered on a device pixel
    fn stamp(&mut self, cx: isize, cy: isize) {
        let radius = (self.line_width * self.zoom * 0.5).max(0.5);
        let reach = radius.floor() as isize;
        let round = self.line_cap == LineCap::Round;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if round && ((dx * dx + dy * dy) as f64) > radius * radius {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                    self.pixels[y as usize * self.width + x as usize] = Some(self.stroke_color);
                }
            }
        }
    }

    /// Draws a line between two device points using Bresenham's algorithm
    fn draw_line(&mut self, from: [f64; 2], to: [f64; 2]) {
        let (mut x0, mut y0, x1, y1) = (
            from[0].round() as isize,
            from[1].round() as isize,
            to[0].round() as isize,
            to[1].round() as isize,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

impl DrawingSurface for Canvas {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: usize, height: usize) {
        *self = Canvas::new(width, height);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let [x0, y0] = self.to_device(x, y);
        let [x1, y1] = self.to_device(x + width, y + height);
        let clamp_x = |v: f64| v.round().clamp(0.0, self.width as f64) as usize;
        let clamp_y = |v: f64| v.round().clamp(0.0, self.height as f64) as usize;
        let (left, right) = (clamp_x(x0.min(x1)), clamp_x(x0.max(x1)));
        let (top, bottom) = (clamp_y(y0.min(y1)), clamp_y(y0.max(y1)));
        for row in top..bottom {
            let start = row * self.width;
            self.pixels[start + left..start + right].fill(None);
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let point = self.to_device(x, y);
        self.path.push(vec![point]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let point = self.to_device(x, y);
        match self.path.last_mut() {
            Some(subpath) => subpath.push(point),
            None => self.path.push(vec![point]),
        }
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for subpath in &path {
            for pair in subpath.windows(2) {
                self.draw_line(pair[0], pair[1]);
            }
        }
        // stroking keeps the current path, like a 2D canvas context
        self.path = path;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        // joins come out of the brush shape
        self.line_join = join;
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin[0] += dx * self.zoom;
        self.origin[1] += dy * self.zoom;
    }

    fn scale(&mut self, factor: f64) {
        self.zoom *= factor;
    }
}
