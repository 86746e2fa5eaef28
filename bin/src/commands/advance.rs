//! Advance command implementation.

use anyhow::{Context, Result};
use horizon_period::Clock;
use std::io::Write;

use crate::display::{Format, write_period};

/// Shift a range by `n` multiples of its own length and write the result.
pub(crate) fn advance<W: Write>(
    out: &mut W,
    clock: &dyn Clock,
    range: &str,
    n: i32,
    format: Format,
) -> Result<()> {
    let period = super::parse_range(clock, "time", range)?;
    let shifted = period.checked_advance(n).with_context(|| {
        format!("Advancing {period} by {n} periods leaves the supported date range")
    })?;
    tracing::debug!(%period, %shifted, n, "advanced range");

    write_period(out, &shifted, format)
}
