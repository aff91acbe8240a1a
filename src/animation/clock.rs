//! Elapsed-time sources for the animation clock.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time since the viewer was mounted
pub trait Clock {
    fn elapsed(&self) -> Duration;

    fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

/// Wall-clock time since creation
#[derive(Debug, Clone, Copy)]
pub struct MountClock {
    mounted_at: Instant,
}

impl MountClock {
    pub fn new() -> Self {
        Self {
            mounted_at: Instant::now(),
        }
    }
}

impl Default for MountClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MountClock {
    fn elapsed(&self) -> Duration {
        self.mounted_at.elapsed()
    }
}

/// Clock advanced explicitly by the driver, for headless runs and tests.
///
/// Never moves backwards: `set` to an earlier time is ignored.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get().saturating_add(delta));
    }

    pub fn set(&self, elapsed: Duration) {
        if elapsed > self.now.get() {
            self.now.set(elapsed);
        }
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}
