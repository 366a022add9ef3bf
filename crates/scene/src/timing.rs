use std::time::{Duration, Instant};

/// Deltas above this are clamped so a stalled frame doesn't teleport the camera.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Per-frame timing sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the clock started; drives body rotation.
    pub elapsed: f32,
}

/// Tracks time between frames and since startup.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start, last: start }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        FrameTime {
            delta: delta.as_secs_f32().min(MAX_FRAME_DELTA),
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
        }
    }

    /// Time from the start to the most recent tick.
    pub fn elapsed(&self) -> Duration {
        self.last.saturating_duration_since(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_delta_and_elapsed() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let t1 = clock.tick_at(start + Duration::from_millis(16));
        assert!((t1.delta - 0.016).abs() < 1e-6);
        assert!((t1.elapsed - 0.016).abs() < 1e-6);

        let t2 = clock.tick_at(start + Duration::from_millis(48));
        assert!((t2.delta - 0.032).abs() < 1e-6);
        assert!((t2.elapsed - 0.048).abs() < 1e-6);
        assert_eq!(clock.elapsed(), Duration::from_millis(48));
    }

    #[test]
    fn long_stall_is_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let t = clock.tick_at(start + Duration::from_secs(3));
        assert_eq!(t.delta, MAX_FRAME_DELTA);
        assert!((t.elapsed - 3.0).abs() < 1e-6);
    }
}
