use crate::config::SceneConfig;
use crate::frame::{compose, FrameParams};
use crate::renderer::{draw_rings, Half};
use crate::scheduler::FrameScheduler;
use crate::state::{InputEvent, PointerRotation};
use crate::surface::{DrawingSurface, LineCap, LineJoin};
use std::collections::VecDeque;

/// Animated twisting sphere bound to a drawing surface
pub struct SphereWidget<S: DrawingSurface> {
    config: SceneConfig,
    surface: S,
    pointer: PointerRotation,
    pending: VecDeque<InputEvent>,
    /// Scene units to device pixels
    view_scale: f64,
    last_params: Option<FrameParams>,
}

impl<S: DrawingSurface> SphereWidget<S> {
    /// Wraps a surface and applies the centering transform and stroke style
    pub fn new(config: SceneConfig, surface: S) -> Self {
        let mut widget = SphereWidget {
            config,
            surface,
            pointer: PointerRotation::default(),
            pending: VecDeque::new(),
            view_scale: 1.0,
            last_params: None,
        };
        widget.apply_surface_state();
        widget
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn pointer(&self) -> PointerRotation {
        self.pointer
    }

    pub fn view_scale(&self) -> f64 {
        self.view_scale
    }

    /// Parameters of the most recent frame
    pub fn last_params(&self) -> Option<FrameParams> {
        self.last_params
    }

    /// Queues input for the next frame
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Computes and draws one frame at `now_seconds`.
    ///
    /// The scheduler is re-armed before anything else.
    pub fn frame<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F, now_seconds: f64) {
        scheduler.request_frame();

        self.drain_events();
        self.pointer.step();

        let (width, height) = self.surface.size();
        let (w, h) = (
            width as f64 / self.view_scale,
            height as f64 / self.view_scale,
        );
        self.surface.clear_rect(-w * 0.5, -h * 0.5, w, h);

        let params = FrameParams::at(now_seconds, self.config.speed);
        let point_sets = compose(&self.config, &params, self.pointer.offset);
        draw_rings(&mut self.surface, &self.config.rings, &point_sets, Half::Behind);
        draw_rings(&mut self.surface, &self.config.rings, &point_sets, Half::Front);

        self.last_params = Some(params);
    }

    fn drain_events(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            match event {
                InputEvent::PointerMoved { x } => {
                    let (width, _) = self.surface.size();
                    self.pointer.point_at(x, width);
                }
                InputEvent::PointerLeft => {
                    log::debug!("pointer left, easing rotation back");
                    self.pointer.release();
                }
                InputEvent::Resized { width, height } => {
                    log::debug!("surface resized to {}x{}", width, height);
                    self.surface.resize(width, height);
                    self.apply_surface_state();
                }
            }
        }
    }

    /// Centers the origin, fits the outermost ring and restores stroke style
    fn apply_surface_state(&mut self) {
        let (width, height) = self.surface.size();
        let extent = self.config.max_radius() + self.config.line_width * 0.5;
        let shortest = width.min(height) as f64;
        self.view_scale = if extent > 0.0 && shortest > 0.0 {
            shortest * 0.5 / extent
        } else {
            1.0
        };

        self.surface.translate(width as f64 * 0.5, height as f64 * 0.5);
        self.surface.scale(self.view_scale);
        self.surface.set_line_width(self.config.line_width);
        self.surface.set_line_cap(LineCap::Round);
        self.surface.set_line_join(LineJoin::Round);
    }
}
