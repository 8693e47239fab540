use crate::graphics::Color;

/// Shape drawn at the ends of each stroked segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Shape drawn where two segments of a path meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Immediate-mode 2D drawing context.
///
/// Coordinates passed to path and clear operations are in user space, mapped
/// to device pixels by the current transform. `resize` discards the
/// transform and stroke style along with the pixels.
pub trait DrawingSurface {
    /// Size in device pixels
    fn size(&self) -> (usize, usize);
    fn resize(&mut self, width: usize, height: usize);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, factor: f64);
}

#[cfg(test)]
pub mod recording {
    use super::*;

    /// One recorded call on a [`RecordingSurface`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Resize(usize, usize),
        ClearRect(f64, f64, f64, f64),
        BeginPath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Stroke,
        StrokeColor(Color),
        LineWidth(f64),
        LineCap(LineCap),
        LineJoin(LineJoin),
        Translate(f64, f64),
        Scale(f64),
    }

    /// Surface that records every call instead of drawing
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub width: usize,
        pub height: usize,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new(width: usize, height: usize) -> Self {
            RecordingSurface {
                width,
                height,
                ops: Vec::new(),
            }
        }

        /// Colors passed to `set_stroke_color`, in call order
        pub fn stroke_colors(&self) -> Vec<Color> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::StrokeColor(color) => Some(*color),
                    _ => None,
                })
                .collect()
        }

        /// End points of every `line_to`
        pub fn line_ends(&self) -> Vec<(f64, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::LineTo(x, y) => Some((*x, *y)),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawingSurface for RecordingSurface {
        fn size(&self) -> (usize, usize) {
            (self.width, self.height)
        }

        fn resize(&mut self, width: usize, height: usize) {
            self.width = width;
            self.height = height;
            self.ops.push(Op::Resize(width, height));
        }

        fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(Op::ClearRect(x, y, width, height));
        }

        fn begin_path(&mut self) {
            self.ops.push(Op::BeginPath);
        }

        fn move_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::MoveTo(x, y));
        }

        fn line_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::LineTo(x, y));
        }

        fn stroke(&mut self) {
            self.ops.push(Op::Stroke);
        }

        fn set_stroke_color(&mut self, color: Color) {
            self.ops.push(Op::StrokeColor(color));
        }

        fn set_line_width(&mut self, width: f64) {
            self.ops.push(Op::LineWidth(width));
        }

        fn set_line_cap(&mut self, cap: LineCap) {
            self.ops.push(Op::LineCap(cap));
        }

        fn set_line_join(&mut self, join: LineJoin) {
            self.ops.push(Op::LineJoin(join));
        }

        fn translate(&mut self, dx: f64, dy: f64) {
            self.ops.push(Op::Translate(dx, dy));
        }

        fn scale(&mut self, factor: f64) {
            self.ops.push(Op::Scale(factor));
        }
    }
}
