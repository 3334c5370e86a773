use std::collections::VecDeque;

use chrono::Utc;

/// Source of the current instant, in whole seconds since the Unix epoch
pub trait WallClock {
    fn now(&mut self) -> i64;
}

/// Reads the host's real-time clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&mut self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Plays back a fixed list of instants.
///
/// Once the list is exhausted the final instant is repeated, so a script
/// ending in an instant that cannot be converted stops any loop reading it.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    instants: VecDeque<i64>,
    last: i64,
}

impl ScriptedClock {
    pub fn new(instants: impl IntoIterator<Item = i64>) -> Self {
        Self {
            instants: instants.into_iter().collect(),
            last: 0,
        }
    }

    /// Instants not yet handed out
    pub fn remaining(&self) -> usize {
        self.instants.len()
    }
}

impl WallClock for ScriptedClock {
    fn now(&mut self) -> i64 {
        if let Some(next) = self.instants.pop_front() {
            self.last = next;
        }
        self.last
    }
}
