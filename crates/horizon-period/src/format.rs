//! Layouts for the compact time range format.
//!
//! All layouts are `chrono` strftime strings. The compact range grammar is
//! built from [`SIMPLE_DATE_FORMAT`] and [`SIMPLE_DATE_TIME_FORMAT`]:
//!
//! ```text
//! MM/DD/YYYY[THH:MM:SS]:[MM/DD/YYYY[THH:MM:SS]]
//! ```

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

/// Date with time of day, e.g. `01/20/2009T12:00:00`.
pub const SIMPLE_DATE_TIME_FORMAT: &str = "%m/%d/%YT%H:%M:%S";

/// Date only, e.g. `01/20/2009`. Parses to midnight.
pub const SIMPLE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Time of day only, e.g. `12:00:00`.
pub const SIMPLE_TIME_FORMAT: &str = "%H:%M:%S";

/// ISO 8601 calendar date, e.g. `2009-01-20`.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Character between the start spec and the end spec.
pub(crate) const RANGE_SEPARATOR: char = ':';

/// Character between the date and the time of day.
pub(crate) const TIME_MARKER: char = 'T';

/// Width of `MM/DD/YYYY`.
pub(crate) const DATE_WIDTH: usize = 10;

/// Width of `MM/DD/YYYYTHH:MM:SS`.
pub(crate) const DATE_TIME_WIDTH: usize = 19;

/// Renders an instant in its shortest compact form.
///
/// Midnight collapses to the date-only form; anything else is written with
/// its time of day. Sub-second precision is dropped.
pub(crate) fn compact_instant(instant: NaiveDateTime) -> impl std::fmt::Display {
    let layout = if instant.time().with_nanosecond(0) == Some(NaiveTime::MIN) {
        SIMPLE_DATE_FORMAT
    } else {
        SIMPLE_DATE_TIME_FORMAT
    };
    instant.format(layout)
}

/// Returns true if [`compact_instant`] renders `instant` without loss, i.e.
/// whole seconds within a four-digit year.
pub(crate) fn is_exactly_compact(instant: NaiveDateTime) -> bool {
    instant.nanosecond() == 0 && (0..=9999).contains(&instant.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_layout_widths() {
        let instant = NaiveDate::from_ymd_opt(2009, 1, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        assert_eq!(
            instant.format(SIMPLE_DATE_TIME_FORMAT).to_string().len(),
            DATE_TIME_WIDTH
        );
        assert_eq!(
            instant.format(SIMPLE_DATE_FORMAT).to_string().len(),
            DATE_WIDTH
        );
        assert_eq!(instant.format(SIMPLE_TIME_FORMAT).to_string(), "12:00:00");
        assert_eq!(instant.format(ISO_DATE_FORMAT).to_string(), "2009-01-20");
    }

    #[test]
    fn test_compact_instant() {
        let date = NaiveDate::from_ymd_opt(1776, 7, 4).unwrap();

        let midnight = date.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(compact_instant(midnight).to_string(), "07/04/1776");

        let evening = date.and_hms_opt(20, 30, 5).unwrap();
        assert_eq!(
            compact_instant(evening).to_string(),
            "07/04/1776T20:30:05"
        );
    }

    #[test]
    fn test_is_exactly_compact() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(is_exactly_compact(date.and_hms_opt(9, 30, 0).unwrap()));
        assert!(!is_exactly_compact(
            date.and_hms_milli_opt(9, 30, 0, 500).unwrap()
        ));

        let far = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert!(!is_exactly_compact(far.and_hms_opt(0, 0, 0).unwrap()));
    }
}
