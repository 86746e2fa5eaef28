//! Parser for the compact time range grammar.
//!
//! ```text
//! timerange := datetime ":" datetime?
//! datetime  := date ("T" time)?
//! date      := MM "/" DD "/" YYYY
//! time      := HH ":" MM ":" SS
//! ```
//!
//! Fields are fixed width. Because `time` also uses `:`, the range separator
//! is found by position: when the start spec carries a time of day, the
//! separator is the colon after its seconds field, otherwise it is the first
//! colon in the input.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::clock::{Clock, SystemClock};
use crate::format::{DATE_TIME_WIDTH, DATE_WIDTH, RANGE_SEPARATOR, TIME_MARKER};
use crate::{Result, TimePeriod, TimePeriodError};

/// Parses compact time range strings.
///
/// An empty end spec (`"07/04/1776:"`) resolves to the clock's current
/// instant, truncated to whole seconds. The clock is read at most once per
/// call.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use horizon_period::{FixedClock, PeriodParser};
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let parser = PeriodParser::with_clock(FixedClock::new(now));
///
/// let period = parser.parse("05/31/2024T08:00:00:").unwrap();
/// assert_eq!(period.end, now);
/// assert_eq!(period.length().num_hours(), 24);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodParser<C = SystemClock> {
    clock: C,
}

impl PeriodParser<SystemClock> {
    /// Creates a parser that resolves open ends with the local wall clock.
    #[must_use]
    pub const fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> PeriodParser<C> {
    /// Creates a parser that resolves open ends with `clock`.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the clock used for open-ended ranges.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Parses `input` into a [`TimePeriod`].
    ///
    /// The instants are used as written; the result is not reordered.
    ///
    /// # Errors
    ///
    /// Returns [`TimePeriodError::MalformedRange`] if `input` has no range
    /// separator, or [`TimePeriodError::MalformedInstant`] if either side is
    /// not a valid `MM/DD/YYYY` or `MM/DD/YYYYTHH:MM:SS` literal.
    pub fn parse(&self, input: &str) -> Result<TimePeriod> {
        let Some((start_spec, end_spec)) = split_range(input) else {
            tracing::debug!(input, "time range has no separator");
            return Err(TimePeriodError::MalformedRange(input.to_string()));
        };

        let start = parse_instant(start_spec)?;
        let end = if end_spec.is_empty() {
            let now = self.clock.now();
            // instants carry second resolution
            let now = now.with_nanosecond(0).unwrap_or(now);
            tracing::trace!(%now, "open-ended range, end taken from clock");
            now
        } else {
            parse_instant(end_spec)?
        };

        Ok(TimePeriod::new(start, end))
    }
}

/// Splits a range literal into its start spec and end spec.
fn split_range(input: &str) -> Option<(&str, &str)> {
    let first = input.find(RANGE_SEPARATOR)?;
    let separator = if input[..first].contains(TIME_MARKER) {
        // HH:MM:SS puts two colons ahead of the separator
        input.match_indices(RANGE_SEPARATOR).nth(2)?.0
    } else {
        first
    };

    Some((&input[..separator], &input[separator + 1..]))
}

/// Parses a single instant literal, `MM/DD/YYYY` or `MM/DD/YYYYTHH:MM:SS`.
///
/// Date-only literals resolve to midnight.
///
/// # Errors
///
/// Returns [`TimePeriodError::MalformedInstant`] if `literal` is not a valid
/// date or date-time literal.
///
/// ```
/// let instant = horizon_period::parse_instant("07/04/1776T12:00:00").unwrap();
/// assert_eq!(instant.to_string(), "1776-07-04 12:00:00");
/// ```
pub fn parse_instant(literal: &str) -> Result<NaiveDateTime> {
    instant_from_fields(literal.as_bytes()).ok_or_else(|| {
        tracing::debug!(literal, "invalid time literal");
        TimePeriodError::MalformedInstant(literal.to_string())
    })
}

fn instant_from_fields(bytes: &[u8]) -> Option<NaiveDateTime> {
    match bytes.len() {
        DATE_WIDTH => Some(date_field(bytes)?.and_time(NaiveTime::MIN)),
        DATE_TIME_WIDTH if bytes[DATE_WIDTH] == TIME_MARKER as u8 => {
            let (date, time) = bytes.split_at(DATE_WIDTH);
            Some(date_field(date)?.and_time(time_field(&time[1..])?))
        }
        _ => None,
    }
}

/// `MM/DD/YYYY`
fn date_field(bytes: &[u8]) -> Option<NaiveDate> {
    if bytes.len() != DATE_WIDTH || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }

    let month = number(&bytes[0..2])?;
    let day = number(&bytes[3..5])?;
    let year = i32::try_from(number(&bytes[6..10])?).ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `HH:MM:SS`
fn time_field(bytes: &[u8]) -> Option<NaiveTime> {
    if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }

    let hour = number(&bytes[0..2])?;
    let minute = number(&bytes[3..5])?;
    let second = number(&bytes[6..8])?;

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Decodes a run of ASCII digits.
fn number(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
