//! Display utilities and output formatting for the horizon CLI.

use anyhow::Result;
use chrono::{NaiveDateTime, TimeDelta};
use clap::ValueEnum;
use horizon_period::{SIMPLE_DATE_TIME_FORMAT, TimePeriod};
use serde::{Serialize, Serializer};
use std::io::Write;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document.
    Json,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Serializable view of a period.
#[derive(Debug, Serialize)]
struct PeriodReport {
    range: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    length_seconds: i64,
    length: String,
}

impl From<&TimePeriod> for PeriodReport {
    fn from(period: &TimePeriod) -> Self {
        Self {
            range: period.to_string(),
            start: period.start,
            end: period.end,
            length_seconds: period.length().num_seconds(),
            length: format_length(period.length()),
        }
    }
}

/// Serializable view of the gap between two periods.
#[derive(Debug, Serialize)]
struct GapReport {
    previous: PeriodReport,
    current: PeriodReport,
    gap_seconds: i64,
    gap: String,
}

/// Write a single period.
pub(crate) fn write_period<W: Write>(
    out: &mut W,
    period: &TimePeriod,
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => {
            writeln!(out, "Range:  {period}")?;
            writeln!(out, "Period: {}", period.format(SIMPLE_DATE_TIME_FORMAT))?;
            writeln!(out, "Length: {}", format_length(period.length()))?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &PeriodReport::from(period))?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Write a sequence of periods as they are produced, one per line in text
/// mode. Returns the number of periods written.
pub(crate) fn write_periods<W, I>(out: &mut W, periods: I, format: Format) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = TimePeriod>,
{
    let mut written = 0;
    match format {
        Format::Text => {
            for period in periods {
                written += 1;
                writeln!(
                    out,
                    "{written:>4}  {}",
                    period.format(SIMPLE_DATE_TIME_FORMAT)
                )?;
            }
        }
        Format::Json => {
            let reports = periods.into_iter().map(|period| {
                written += 1;
                PeriodReport::from(&period)
            });
            let mut serializer = serde_json::Serializer::pretty(&mut *out);
            serializer.collect_seq(reports)?;
            writeln!(out)?;
        }
    }

    Ok(written)
}

/// Write the gap between `previous` and `current`.
pub(crate) fn write_gap<W: Write>(
    out: &mut W,
    current: &TimePeriod,
    previous: &TimePeriod,
    format: Format,
) -> Result<()> {
    let gap = current.since(previous);
    match format {
        Format::Text => writeln!(out, "{}", format_length(gap))?,
        Format::Json => {
            let report = GapReport {
                previous: PeriodReport::from(previous),
                current: PeriodReport::from(current),
                gap_seconds: gap.num_seconds(),
                gap: format_length(gap),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Format a duration as days, hours, minutes and seconds, e.g. `1d 2h 0m 5s`.
///
/// Sub-second precision is dropped; negative durations get a leading `-`.
pub(crate) fn format_length(length: TimeDelta) -> String {
    let sign = if length < TimeDelta::zero() { "-" } else { "" };
    let secs = length.num_seconds().unsigned_abs();

    let days = secs / 86_400;
    let hours = secs % 86_400 / 3_600;
    let minutes = secs % 3_600 / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{sign}{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{sign}{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m {seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}
