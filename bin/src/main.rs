//! horizon CLI - Parse, shift and compare compact time ranges.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use horizon_period::{Clock, FixedClock, SystemClock};

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "horizon")]
#[command(about = "Parse, shift and compare compact time ranges", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Instant used for open-ended ranges (MM/DD/YYYY[THH:MM:SS]). Defaults to the local clock.
    #[arg(long, global = true)]
    now: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: Format,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a range and show its start, end and length
    Parse {
        /// Range literal, e.g. 01/20/2009T12:00:00:01/20/2017T12:00:00 or 07/04/1776:
        range: String,
    },

    /// Shift a range by N multiples of its own length
    Advance {
        /// Range literal
        range: String,

        /// Number of lengths to shift by (negative shifts backward)
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Show the gap between the end of PREVIOUS and the start of RANGE
    Since {
        /// Range literal
        range: String,

        /// Range literal of the preceding period
        previous: String,
    },

    /// List consecutive periods starting at a range
    Walk {
        /// Range literal
        range: String,

        /// Number of periods to list
        #[arg(short, long, default_value = "10")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let clock = clock_from_arg(cli.now.as_deref())?;
    tracing::debug!(format = %cli.format, fixed_now = cli.now.is_some(), "starting");

    let out = &mut std::io::stdout().lock();
    let clock = clock.as_ref();
    match command {
        Commands::Parse { range } => commands::parse::parse(out, clock, &range, cli.format),
        Commands::Advance { range, n } => {
            commands::advance::advance(out, clock, &range, n, cli.format)
        }
        Commands::Since { range, previous } => {
            commands::since::since(out, clock, &range, &previous, cli.format)
        }
        Commands::Walk { range, count } => {
            commands::walk::walk(out, clock, &range, count, cli.format)
        }
    }
}

/// Build the clock for open-ended ranges from the `--now` option.
fn clock_from_arg(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(literal) => {
            let instant = horizon_period::parse_instant(literal)
                .with_context(|| format!("Invalid --now instant: {literal}"))?;
            Ok(Box::new(FixedClock::new(instant)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}
