// clock.rs - Fixed simulation tick, independent of frame rate

/// Accumulates frame time and fires once it reaches the interval.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: f32,
    elapsed: f32,
    pub paused: bool,
}

impl TickClock {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            paused: false,
        }
    }

    /// Add `dt` seconds; true when a tick is due. At most one tick per call,
    /// and the leftover time is dropped.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.paused {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    pub fn toggle(&mut self) {
        self.paused = !self.paused;
        self.elapsed = 0.0;
    }
}
