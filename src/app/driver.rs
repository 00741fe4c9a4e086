use std::time::{Duration, Instant};

/// Drives a tick callback, one call per nominal display frame.
pub trait FrameDriver {
    /// Invokes `tick` repeatedly. How often and for how long is the
    /// driver's business; [`FixedStepDriver`] never returns.
    fn run<F: FnMut()>(self, tick: F);
}

/// Wall-clock driver: calls the tick at a fixed target rate, forever.
///
/// Best effort, no catch-up: a slow tick simply shortens (or skips) the
/// following sleep.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepDriver {
    frame_interval: Duration,
}

impl FixedStepDriver {
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1))),
        }
    }
}

impl Default for FixedStepDriver {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameDriver for FixedStepDriver {
    fn run<F: FnMut()>(self, mut tick: F) {
        loop {
            let frame_start = Instant::now();
            tick();
            let spent = frame_start.elapsed();
            if let Some(remaining) = self.frame_interval.checked_sub(spent) {
                std::thread::sleep(remaining);
            }
        }
    }
}

/// Steps the tick a fixed number of times, back to back.
///
/// For tests and headless demos that pace themselves via
/// [`App::advance`](crate::app::App::advance) instead of wall time.
#[derive(Debug, Clone, Copy)]
pub struct ManualDriver {
    pub frames: u64,
}

impl ManualDriver {
    #[must_use]
    pub fn new(frames: u64) -> Self {
        Self { frames }
    }
}

impl FrameDriver for ManualDriver {
    fn run<F: FnMut()>(self, mut tick: F) {
        for _ in 0..self.frames {
            tick();
        }
    }
}
