//! `find-meeting` CLI — run meeting slot queries from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Query slots from a JSON document (stdin → stdout)
//! echo '{"events":[],"request":{"duration":30,"attendees":["A"]}}' | find-meeting slots
//!
//! # Read from a file, render as HH:MM text
//! find-meeting slots -i calendar.json --format text
//!
//! # Show which attendees the slots were computed for
//! find-meeting plan -i calendar.json
//!
//! # Free gaps around ad-hoc busy ranges
//! find-meeting gaps --busy 09:00-10:00 --busy 13:00-14:30 --duration 45
//! ```
//!
//! The input document holds `events` (each `{when: {start, end}, attendees}`)
//! and a `request` (`{duration, attendees, optional_attendees}`), all times in
//! minutes since midnight.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use meeting_engine::clock;
use meeting_engine::{Attendance, Event, MeetingPlan, MeetingRequest, TimeRange};

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find meeting slots within a day"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slots a meeting can take place in
    Slots {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Print the slots together with the attendee set they suit
    Plan {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Print free gaps around the given busy ranges
    Gaps {
        /// Busy range as HH:MM-HH:MM (repeatable)
        #[arg(long = "busy", value_parser = parse_clock_range)]
        busy: Vec<TimeRange>,
        /// Minimum gap length in minutes
        #[arg(short, long, default_value_t = 0)]
        duration: u32,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(clap::Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON with minutes since midnight
    Json,
    /// One `HH:MM-HH:MM (N min)` line per slot
    Text,
}

/// The document a query reads: the calendar and the request to place.
#[derive(Deserialize)]
struct QueryInput {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Slots { io } => {
            let plan = run_query(io.input.as_deref())?;
            let rendered = match io.format {
                Format::Json => to_json(&plan.slots, io.pretty)?,
                Format::Text => render_slots(&plan.slots),
            };
            write_output(io.output.as_deref(), &rendered)?;
        }
        Commands::Plan { io } => {
            let plan = run_query(io.input.as_deref())?;
            let rendered = match io.format {
                Format::Json => to_json(&plan, io.pretty)?,
                Format::Text => format!(
                    "attendance: {}\n{}",
                    attendance_label(plan.attendance),
                    render_slots(&plan.slots)
                ),
            };
            write_output(io.output.as_deref(), &rendered)?;
        }
        Commands::Gaps {
            busy,
            duration,
            format,
        } => {
            let gaps = meeting_engine::find_free_gaps(&busy, duration);
            let rendered = match format {
                Format::Json => to_json(&gaps, false)?,
                Format::Text => render_slots(&gaps),
            };
            write_output(None, &rendered)?;
        }
    }

    Ok(())
}

fn run_query(input: Option<&str>) -> Result<MeetingPlan> {
    let raw = read_input(input)?;
    let query: QueryInput =
        serde_json::from_str(&raw).context("Failed to parse meeting query JSON")?;
    debug!(
        events = query.events.len(),
        duration = query.request.duration(),
        "running meeting query"
    );

    let plan = meeting_engine::plan_meeting(&query.events, &query.request);
    info!(
        slots = plan.slots.len(),
        attendance = attendance_label(plan.attendance),
        "meeting query finished"
    );
    Ok(plan)
}

fn parse_clock_range(text: &str) -> std::result::Result<TimeRange, String> {
    clock::parse_range(text).map_err(|e| e.to_string())
}

fn attendance_label(attendance: Attendance) -> &'static str {
    match attendance {
        Attendance::Everyone => "everyone",
        Attendance::RequiredOnly => "required-only",
        Attendance::Nobody => "nobody",
    }
}

fn render_slots(slots: &[TimeRange]) -> String {
    slots
        .iter()
        .map(|slot| format!("{} ({} min)\n", clock::format_range(slot), slot.duration()))
        .collect()
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map(|s| s + "\n").context("Failed to serialize result")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
