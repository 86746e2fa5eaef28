//! Time period and interval arithmetic.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::clock::Clock;
use crate::format::{RANGE_SEPARATOR, compact_instant, is_exactly_compact};
use crate::{PeriodParser, Result, TimePeriodError};

/// A span of time between two naive instants.
///
/// `start <= end` is expected but not enforced. Values are immutable; every
/// arithmetic operation returns a new period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimePeriod {
    /// Start instant.
    pub start: NaiveDateTime,
    /// End instant.
    pub end: NaiveDateTime,
}

impl TimePeriod {
    /// Creates a period from its two instants, as given.
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Creates a period starting at `start` and lasting `length`.
    ///
    /// # Panics
    ///
    /// Panics if `start + length` is out of the representable range.
    #[must_use]
    pub fn with_length(start: NaiveDateTime, length: TimeDelta) -> Self {
        Self::new(start, start + length)
    }

    /// Parses a compact range string, resolving an open end with the local
    /// wall clock.
    ///
    /// See [`PeriodParser`] for the grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a valid range literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use horizon_period::TimePeriod;
    ///
    /// let period = TimePeriod::parse("09/01/1773:07/04/1776").unwrap();
    /// assert_eq!(period.to_string(), "09/01/1773:07/04/1776");
    ///
    /// let err = TimePeriod::parse("djadk").unwrap_err();
    /// assert_eq!(err.to_string(), "could not parse timerange string djadk");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        PeriodParser::system().parse(input)
    }

    /// Parses a compact range string, resolving an open end with `clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a valid range literal.
    pub fn parse_with_clock<C: Clock>(input: &str, clock: C) -> Result<Self> {
        PeriodParser::with_clock(clock).parse(input)
    }

    /// Returns `end - start`. Negative if the period is reversed.
    #[must_use]
    pub fn length(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns the gap between `previous.end` and this period's start.
    ///
    /// Overlapping or contiguous periods yield zero, never a negative gap.
    #[must_use]
    pub fn since(&self, previous: &Self) -> TimeDelta {
        (self.start - previous.end).max(TimeDelta::zero())
    }

    /// Shifts both ends by `n` multiples of this period's length.
    ///
    /// `n` may be zero or negative. The length is preserved exactly.
    ///
    /// # Panics
    ///
    /// Panics if the shifted period is out of the representable range; use
    /// [`checked_advance`](Self::checked_advance) to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use horizon_period::TimePeriod;
    ///
    /// let day = TimePeriod::parse("01/02/2024:01/03/2024").unwrap();
    /// assert_eq!(day.advance(1).to_string(), "01/03/2024:01/04/2024");
    /// assert_eq!(day.advance(-1).to_string(), "01/01/2024:01/02/2024");
    /// ```
    #[must_use]
    pub fn advance(&self, n: i32) -> Self {
        self.checked_advance(n)
            .unwrap_or_else(|| panic!("advancing {self} by {n} periods overflows"))
    }

    /// Shifts both ends by `n` multiples of this period's length, returning
    /// `None` on overflow.
    #[must_use]
    pub fn checked_advance(&self, n: i32) -> Option<Self> {
        let shift = self.length().checked_mul(n)?;
        Some(Self::new(
            self.start.checked_add_signed(shift)?,
            self.end.checked_add_signed(shift)?,
        ))
    }

    /// Returns an iterator over the periods that follow this one, each
    /// starting where the previous one ended.
    ///
    /// The iterator stops once a further period is not representable, so it
    /// does not terminate on its own for realistic periods; bound it with
    /// [`Iterator::take`].
    pub const fn successors(&self) -> Successors {
        Successors {
            current: Some(*self),
        }
    }

    /// Formats both instants with `layout`, as `"<start> -> <end>"`.
    ///
    /// `layout` is a `chrono` strftime string such as
    /// [`SIMPLE_DATE_TIME_FORMAT`](crate::SIMPLE_DATE_TIME_FORMAT).
    #[must_use]
    pub fn format(&self, layout: &str) -> String {
        format!(
            "{} -> {}",
            self.start.format(layout),
            self.end.format(layout)
        )
    }
}

/// Compact range form, e.g. `01/20/2009T12:00:00:01/20/2017T12:00:00`.
///
/// Midnight instants are written date-only and sub-second precision is
/// dropped, so whole-second periods parse back unchanged.
impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            compact_instant(self.start),
            RANGE_SEPARATOR,
            compact_instant(self.end)
        )
    }
}

impl FromStr for TimePeriod {
    type Err = TimePeriodError;

    fn from_str(s: &str) -> Result<Self> {
        PeriodParser::system().parse(s)
    }
}

/// Serializes as the compact range string.
///
/// Fails for instants the compact form cannot hold exactly (sub-second
/// precision, years outside 0000-9999), since they would not read back equal.
impl Serialize for TimePeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if !(is_exactly_compact(self.start) && is_exactly_compact(self.end)) {
            return Err(serde::ser::Error::custom(format_args!(
                "period {} -> {} has no exact compact form",
                self.start, self.end
            )));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimePeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Iterator over consecutive periods of equal length.
///
/// Created by [`TimePeriod::successors`].
#[derive(Debug, Clone)]
pub struct Successors {
    current: Option<TimePeriod>,
}

impl Iterator for Successors {
    type Item = TimePeriod;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current?.checked_advance(1);
        self.current = next;
        next
    }
}

impl std::iter::FusedIterator for Successors {}
