//! Walk command implementation.

use anyhow::{Result, bail};
use horizon_period::Clock;
use std::io::Write;

use crate::display::{Format, write_periods};

/// Write `count` consecutive periods, starting with `range` itself.
pub(crate) fn walk<W: Write>(
    out: &mut W,
    clock: &dyn Clock,
    range: &str,
    count: usize,
    format: Format,
) -> Result<()> {
    let period = super::parse_range(clock, "time", range)?;
    if period.length() <= chrono::TimeDelta::zero() {
        bail!("Cannot walk {period}: length must be positive");
    }

    let periods = std::iter::once(period).chain(period.successors()).take(count);
    let written = write_periods(out, periods, format)?;
    if written < count {
        tracing::warn!(
            requested = count,
            produced = written,
            "walk stopped at the end of the supported date range"
        );
    }

    Ok(())
}
