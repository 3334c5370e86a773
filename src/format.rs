use std::fmt::{self, Write as _};

use chrono::format::StrftimeItems;
use chrono::TimeZone;

use crate::clock::Timestamp;
use crate::error::FormatError;

/// `YYYY-MM-DDTHH:MM:SS±HHMM`
pub const ISO_8601_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Width of every rendered line, excluding the newline
pub const RENDERED_LEN: usize = 24;

/// Render a timestamp in ISO 8601 extended form with a numeric offset.
///
/// # Errors
///
/// Fails rather than emit a line that breaks the fixed-width layout.
pub fn render<Tz>(timestamp: &Timestamp<Tz>) -> Result<String, FormatError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let year = timestamp.year();
    if !(0..=9999).contains(&year) {
        return Err(FormatError::YearOutOfRange(year));
    }

    let mut line = String::with_capacity(RENDERED_LEN);
    write!(
        line,
        "{}",
        timestamp
            .as_datetime()
            .format_with_items(StrftimeItems::new(ISO_8601_PATTERN))
    )?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, NaiveDate};
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    /// 0000-01-01T00:00:00Z
    const MIN_INSTANT: i64 = -62_167_219_200;
    /// 9999-12-31T23:59:59Z
    const MAX_INSTANT: i64 = 253_402_300_799;

    fn fixed(offset_seconds: i32) -> FixedOffset {
        FixedOffset::east_opt(offset_seconds).unwrap()
    }

    fn render_at(seconds: i64, offset_seconds: i32) -> Result<String, FormatError> {
        let ts = Timestamp::from_instant(seconds, &fixed(offset_seconds)).unwrap();
        render(&ts)
    }

    #[test]
    fn renders_known_utc_instant() {
        assert_eq!(
            render_at(1_710_513_005, 0).unwrap(),
            "2024-03-15T14:30:05+0000"
        );
    }

    #[test]
    fn renders_offset_without_colon() {
        assert_eq!(
            render_at(1_710_513_005, 5 * 3600 + 30 * 60).unwrap(),
            "2024-03-15T20:00:05+0530"
        );
        assert_eq!(
            render_at(1_710_513_005, -(3 * 3600 + 30 * 60)).unwrap(),
            "2024-03-15T11:00:05-0330"
        );
    }

    #[test]
    fn pads_small_fields() {
        // 2001-02-03T04:05:06Z
        assert_eq!(
            render_at(981_173_106, 0).unwrap(),
            "2001-02-03T04:05:06+0000"
        );
    }

    #[test]
    fn renders_calendar_bounds() {
        assert_eq!(
            render_at(MIN_INSTANT, 0).unwrap(),
            "0000-01-01T00:00:00+0000"
        );
        assert_eq!(
            render_at(MAX_INSTANT, 0).unwrap(),
            "9999-12-31T23:59:59+0000"
        );
    }

    #[test]
    fn rejects_five_digit_year() {
        let err = render_at(MAX_INSTANT + 1, 0).unwrap_err();
        assert!(matches!(err, FormatError::YearOutOfRange(10000)));
    }

    #[test]
    fn rejects_negative_year() {
        let err = render_at(MIN_INSTANT - 1, 0).unwrap_err();
        assert!(matches!(err, FormatError::YearOutOfRange(-1)));
    }

    #[quickcheck]
    fn rendered_line_is_fixed_width_and_in_range(seconds: i64, offset_minutes: i16) -> TestResult {
        // keep a day of slack at both ends so any offset stays inside 0000..=9999
        let span = MAX_INSTANT - MIN_INSTANT - 2 * 86_400;
        let seconds = MIN_INSTANT + 86_400 + seconds.rem_euclid(span);
        let offset = i32::from(offset_minutes).rem_euclid(24 * 60 * 2 - 1) - (24 * 60 - 1);
        let line = render_at(seconds, offset * 60).unwrap();

        let bytes = line.as_bytes();
        if line.len() != RENDERED_LEN
            || bytes[4] != b'-'
            || bytes[7] != b'-'
            || bytes[10] != b'T'
            || bytes[13] != b':'
            || bytes[16] != b':'
            || !(bytes[19] == b'+' || bytes[19] == b'-')
        {
            return TestResult::error(format!("bad layout: {line}"));
        }

        let field = |range: std::ops::Range<usize>| line[range].parse::<u32>().unwrap();
        let (year, month, day) = (field(0..4), field(5..7), field(8..10));
        let valid_date = NaiveDate::from_ymd_opt(year as i32, month, day).is_some();

        TestResult::from_bool(
            valid_date && field(11..13) <= 23 && field(14..16) <= 59 && field(17..19) <= 59,
        )
    }

    #[quickcheck]
    fn rendered_line_parses_back_to_the_same_instant(seconds: u32, offset_minutes: i16) -> bool {
        let seconds = i64::from(seconds);
        let offset = i32::from(offset_minutes) % (24 * 60);
        let line = render_at(seconds, offset * 60).unwrap();

        let parsed = DateTime::parse_from_str(&line, ISO_8601_PATTERN).unwrap();
        parsed.timestamp() == seconds && parsed.offset().local_minus_utc() == offset * 60
    }
}
