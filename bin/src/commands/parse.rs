//! Parse command implementation.

use anyhow::Result;
use horizon_period::Clock;
use std::io::Write;

use crate::display::{Format, write_period};

/// Parse a range and write its instants and length.
pub(crate) fn parse<W: Write>(
    out: &mut W,
    clock: &dyn Clock,
    range: &str,
    format: Format,
) -> Result<()> {
    let period = super::parse_range(clock, "time", range)?;
    tracing::debug!(%period, "parsed range");

    write_period(out, &period, format)
}
