//! Benchmark utilities for horizon.

use chrono::{NaiveDate, NaiveDateTime, ParseResult};
use horizon_period::{SIMPLE_DATE_FORMAT, SIMPLE_DATE_TIME_FORMAT, TimePeriod};

/// A named range literal to benchmark.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkInput {
    /// Short label used as the benchmark id.
    pub name: &'static str,
    /// Range literal.
    pub literal: &'static str,
}

/// Range literals covering each shape of the grammar.
pub const INPUTS: &[BenchmarkInput] = &[
    BenchmarkInput {
        name: "date-time:date-time",
        literal: "01/20/2009T12:00:00:01/20/2017T12:00:00",
    },
    BenchmarkInput {
        name: "date:date",
        literal: "09/01/1773:07/04/1776",
    },
    BenchmarkInput {
        name: "date-time:open",
        literal: "08/15/1991T20:30:00:",
    },
    BenchmarkInput {
        name: "invalid",
        literal: "07/04/1776:ab/04/1776",
    },
];

/// Baseline: parse a closed range with chrono's strftime parser.
///
/// Splits on the structural separator the same way horizon does, then hands
/// each side to `NaiveDateTime::parse_from_str` / `NaiveDate::parse_from_str`.
pub fn chrono_baseline(literal: &str) -> Option<TimePeriod> {
    let first = literal.find(':')?;
    let separator = if literal[..first].contains('T') {
        literal.match_indices(':').nth(2)?.0
    } else {
        first
    };

    let start = chrono_instant(&literal[..separator]).ok()?;
    let end = chrono_instant(&literal[separator + 1..]).ok()?;
    Some(TimePeriod::new(start, end))
}

fn chrono_instant(side: &str) -> ParseResult<NaiveDateTime> {
    if side.contains('T') {
        NaiveDateTime::parse_from_str(side, SIMPLE_DATE_TIME_FORMAT)
    } else {
        NaiveDate::parse_from_str(side, SIMPLE_DATE_FORMAT).map(|d| d.and_time(chrono::NaiveTime::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_agrees_with_parser() {
        for input in INPUTS.iter().filter(|i| !i.literal.ends_with(':')) {
            let baseline = chrono_baseline(input.literal);
            let parsed = TimePeriod::parse(input.literal).ok();
            assert_eq!(baseline, parsed, "{}", input.name);
        }
    }
}
