use std::time::{Duration, Instant};

/// Arms the frame callback for the next display refresh.
///
/// A frame callback calls `request_frame` as its first action; a callback
/// that does not re-arm ends the animation loop.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Scheduler firing at a fixed frame rate
#[derive(Debug, Clone)]
pub struct FixedRateScheduler {
    interval: Duration,
    next: Instant,
    armed: bool,
}

impl FixedRateScheduler {
    pub fn new(fps: u32) -> Self {
        FixedRateScheduler {
            interval: Duration::from_secs(1) / fps.max(1),
            next: Instant::now(),
            armed: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Time left before the armed frame is due
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Consumes the pending request and schedules the following deadline.
    ///
    /// Returns `false` when no frame was requested. A host that fell more
    /// than one interval behind skips the missed frames instead of bursting.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.next += self.interval;
        if self.next < now {
            self.next = now + self.interval;
        }
        true
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn request_frame(&mut self) {
        self.armed = true;
    }
}
