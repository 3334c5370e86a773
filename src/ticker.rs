use std::convert::Infallible;
use std::fmt;
use std::io::Write;
use std::time::Duration;

use chrono::TimeZone;
use tracing::{debug, trace};

use crate::clock::{Timestamp, WallClock};
use crate::error::ClockError;
use crate::format::render;
use crate::sleeper::Sleeper;

/// Pause between iterations. Time spent reading, rendering and writing is
/// not subtracted, so lines drift slightly later than one per second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The clock loop: read the instant, resolve it in `tz`, render it and
/// write one line to `out`, then sleep.
pub struct Ticker<C, Tz, S, W> {
    clock: C,
    tz: Tz,
    sleeper: S,
    out: W,
}

impl<C, Tz, S, W> Ticker<C, Tz, S, W>
where
    C: WallClock,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
    S: Sleeper,
    W: Write,
{
    pub fn new(clock: C, tz: Tz, sleeper: S, out: W) -> Self {
        Self {
            clock,
            tz,
            sleeper,
            out,
        }
    }

    /// Run a single iteration without sleeping and return the line written.
    ///
    /// Nothing reaches `out` unless conversion and rendering both succeed.
    pub fn tick(&mut self) -> Result<String, ClockError> {
        let seconds = self.clock.now();
        let timestamp = Timestamp::from_instant(seconds, &self.tz)?;
        let line = render(&timestamp)?;

        writeln!(self.out, "{line}").map_err(ClockError::Output)?;
        self.out.flush().map_err(ClockError::Output)?;

        debug!(seconds, %line, "tick");
        Ok(line)
    }

    /// Tick and sleep forever. Only returns on the first fatal error.
    pub fn run(&mut self) -> Result<Infallible, ClockError> {
        loop {
            self.tick()?;
            trace!(interval = ?TICK_INTERVAL, "sleeping");
            self.sleeper.sleep(TICK_INTERVAL);
        }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
