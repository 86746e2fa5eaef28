//! CLI command implementations.

pub(crate) mod advance;
pub(crate) mod parse;
pub(crate) mod since;
pub(crate) mod walk;

use anyhow::{Context, Result};
use horizon_period::{Clock, PeriodParser, TimePeriod};

/// Parse a range argument, naming it in the error chain.
fn parse_range(clock: &dyn Clock, what: &str, input: &str) -> Result<TimePeriod> {
    PeriodParser::with_clock(clock)
        .parse(input)
        .with_context(|| format!("Invalid {what} range: {input}"))
}
