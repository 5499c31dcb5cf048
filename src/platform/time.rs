//! Frame timing

use std::time::{Duration, Instant};

/// Reports the seconds elapsed since the previous frame
pub trait FrameClock {
    /// Wait for the next frame boundary at `fps` and return the elapsed seconds
    fn tick(&mut self, fps: u32) -> f32;
}

/// Wall-clock limiter: sleeps so frames start no faster than the target rate
#[derive(Debug)]
pub struct FrameLimiter {
    last: Instant,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLimiter {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }
}

impl FrameClock for FrameLimiter {
    fn tick(&mut self, fps: u32) -> f32 {
        if fps > 0 {
            let budget = Duration::from_secs_f64(1.0 / fps as f64);
            let spent = self.last.elapsed();
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }
}

/// Deterministic clock that always reports the same step
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl FrameClock for FixedClock {
    fn tick(&mut self, _fps: u32) -> f32 {
        self.step
    }
}
