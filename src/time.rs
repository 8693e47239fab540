use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Source of the animation time
pub trait Clock {
    /// Wall-clock seconds, monotonically increasing in practice
    fn now_seconds(&self) -> f64;
}

/// Seconds since the UNIX epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs_f64()
    }
}

/// Frames-per-second estimate refreshed once per second
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        FpsCounter {
            frames_since_last_update: 0,
            last_fps_calculation: now,
            fps: 0.0,
        }
    }

    /// Counts a frame; returns the new estimate when one was computed
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames_since_last_update += 1;
        let duration = now.saturating_duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }
}
