use std::time::{Duration, Instant};

/// Timing snapshot for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Paces a loop to a target frame rate.
///
/// Without a target the pacer never sleeps and the loop runs as fast as the
/// sink accepts frames.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Option<Duration>,
    last: Instant,
    next_due: Instant,
    frame_index: u64,
}

impl FramePacer {
    /// Pacer for `target_fps` frames per second. `None`, zero, negative,
    /// non-finite rates and rates whose interval does not fit a `Duration`
    /// mean unpaced.
    pub fn new(target_fps: Option<f32>) -> Self {
        let interval = target_fps
            .filter(|fps| fps.is_finite() && *fps > 0.0)
            .and_then(|fps| Duration::try_from_secs_f32(1.0 / fps).ok());
        let now = Instant::now();
        Self { interval, last: now, next_due: now, frame_index: 0 }
    }

    /// Pacer that never sleeps.
    pub fn unpaced() -> Self {
        Self::new(None)
    }

    #[inline]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Blocks until the next frame is due, then returns its timing.
    pub fn tick(&mut self) -> FrameTime {
        if let Some(interval) = self.interval {
            let now = Instant::now();
            if self.next_due > now {
                std::thread::sleep(self.next_due - now);
            }
            // Re-anchor after a stall instead of bursting to catch up.
            self.next_due = Instant::now().max(self.next_due) + interval;
        }

        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;

        let ft = FrameTime { dt, now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::unpaced()
    }
}
