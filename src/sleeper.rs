//! Sleep abstraction so the clock loop can be driven without waiting.

use std::cell::RefCell;
use std::thread;
use std::time::Duration;

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Blocks the current thread with [`thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RealSleeper;

impl Sleeper for RealSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Records requested sleeps and returns immediately.
#[derive(Debug, Default)]
pub struct MockSleeper {
    durations: RefCell<Vec<Duration>>,
}

impl MockSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.durations.borrow().len()
    }

    pub fn total_duration(&self) -> Duration {
        self.durations.borrow().iter().sum()
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.durations.borrow().clone()
    }
}

impl Sleeper for MockSleeper {
    fn sleep(&self, duration: Duration) {
        self.durations.borrow_mut().push(duration);
    }
}
