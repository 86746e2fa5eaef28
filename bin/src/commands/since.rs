//! Since command implementation.

use anyhow::Result;
use horizon_period::{Clock, FixedClock};
use std::io::Write;

use crate::display::{Format, write_gap};

/// Write the gap between the end of `previous` and the start of `range`.
pub(crate) fn since<W: Write>(
    out: &mut W,
    clock: &dyn Clock,
    range: &str,
    previous: &str,
    format: Format,
) -> Result<()> {
    // one clock read serves both sides
    let now = FixedClock::new(clock.now());
    let current = super::parse_range(&now, "time", range)?;
    let previous = super::parse_range(&now, "previous", previous)?;

    write_gap(out, &current, &previous, format)
}
