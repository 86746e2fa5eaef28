//! Time-period value type for time-series analysis windows.
//!
//! This crate provides:
//!
//! - [`TimePeriod`] - A start/end pair of naive instants with interval arithmetic
//! - [`PeriodParser`] - Parser for the compact `MM/DD/YYYY[THH:MM:SS]:[...]` range format
//! - [`Clock`] - Source of "now" for open-ended ranges ([`SystemClock`], [`FixedClock`])
//! - [`TimePeriodError`] - Parse errors carrying the offending literal

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/horizon/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod error;
mod format;
mod parse;
mod period;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, TimePeriodError};
pub use format::{
    ISO_DATE_FORMAT, SIMPLE_DATE_FORMAT, SIMPLE_DATE_TIME_FORMAT, SIMPLE_TIME_FORMAT,
};
pub use parse::{PeriodParser, parse_instant};
pub use period::{Successors, TimePeriod};

