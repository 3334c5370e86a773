use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::error::ClockError;

/// An instant resolved to local calendar fields and a UTC offset.
#[derive(Debug, Clone)]
pub struct Timestamp<Tz: TimeZone> {
    inner: DateTime<Tz>,
}

impl<Tz: TimeZone> Timestamp<Tz> {
    /// Convert `seconds` since the Unix epoch into calendar time in `tz`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Conversion`] if the instant is outside the
    /// calendar range or the zone does not map it to a single offset.
    pub fn from_instant(seconds: i64, tz: &Tz) -> Result<Self, ClockError> {
        tz.timestamp_opt(seconds, 0)
            .single()
            .map(|inner| Self { inner })
            .ok_or(ClockError::Conversion { seconds })
    }

    pub fn instant(&self) -> i64 {
        self.inner.timestamp()
    }

    /// Local time minus UTC, in seconds
    pub fn offset_seconds(&self) -> i32 {
        self.inner.offset().fix().local_minus_utc()
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    pub(crate) fn as_datetime(&self) -> &DateTime<Tz> {
        &self.inner
    }
}
