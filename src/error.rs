use std::{fmt, io};

use thiserror::Error;

/// Fatal conditions that stop the clock loop
#[derive(Debug, Error)]
pub enum ClockError {
    /// The instant has no local calendar representation
    #[error("localtime failed: no local time for {seconds}s since the epoch")]
    Conversion { seconds: i64 },
    #[error("strftime failed")]
    Format(#[from] FormatError),
    #[error("failed to write timestamp to stdout")]
    Output(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum FormatError {
    /// `%Y` only stays four digits wide for years 0 through 9999
    #[error("year {0} does not fit in four digits")]
    YearOutOfRange(i32),
    #[error("formatter error")]
    Render(#[from] fmt::Error),
}
