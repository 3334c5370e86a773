//! isoclock: a console clock printing ISO 8601 local time every second
//!
//! The loop lives in [`ticker::Ticker`]; its clock, time zone, sleeper and
//! output are all parameters so tests can drive it without waiting on the
//! real clock.

pub mod cli;
pub mod clock;
pub mod error;
pub mod format;
pub mod sleeper;
pub mod telemetry;
pub mod ticker;

pub use clock::{ScriptedClock, SystemClock, Timestamp, WallClock};
pub use error::{ClockError, FormatError};
pub use ticker::{Ticker, TICK_INTERVAL};
