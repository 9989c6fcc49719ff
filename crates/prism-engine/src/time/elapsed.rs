use std::time::Instant;

/// Monotonic elapsed-time source.
///
/// Starts counting when created; there is no pause or reset. Animation code
/// reads it once per frame and derives every time-dependent value from that
/// single reading.
#[derive(Debug, Copy, Clone)]
pub struct ElapsedClock {
    start: Instant,
}

impl ElapsedClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Clock whose zero point is `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self { start }
    }

    /// Seconds since the clock was created.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_at(Instant::now())
    }

    /// Seconds between the clock's zero point and `now`; never negative.
    pub fn elapsed_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.start).as_secs_f32()
    }
}

impl Default for ElapsedClock {
    fn default() -> Self {
        Self::new()
    }
}
