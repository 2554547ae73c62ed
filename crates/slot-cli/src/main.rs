//! `slotfind` CLI — merge busy intervals, search for the best meeting slot, and
//! book meetings against a JSON calendar snapshot.
//!
//! ## Usage
//!
//! ```sh
//! # Write the sample calendar (four users, one busy day)
//! slotfind init -o calendar.json
//!
//! # Merge raw busy intervals (stdin → stdout)
//! echo '[{"start":"2024-09-02T09:00:00Z","end":"2024-09-02T10:30:00Z"}]' | slotfind merge
//!
//! # Best 60 minute slot for a list of busy intervals
//! slotfind find -i busy.json --start 2024-09-02T09:00:00Z --end 2024-09-02T18:00:00Z -d 60
//!
//! # Every candidate, best first
//! slotfind find -i busy.json --start 2024-09-02T09:00:00Z --end 2024-09-02T18:00:00Z -d 60 --all
//!
//! # Book a meeting for several users and save it into the snapshot
//! slotfind schedule -c calendar.json -p user1,user2 -d 60 \
//!     --start 2024-09-02T09:00:00Z --end 2024-09-02T18:00:00Z
//!
//! # One user's events in a window
//! slotfind calendar -c calendar.json -u user1 \
//!     --start 2024-09-02T00:00:00Z --end 2024-09-03T00:00:00Z
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use chrono::Duration;
use clap::{Parser, Subcommand};
use slot_engine::scheduler::DEFAULT_MEETING_TITLE;
use slot_engine::{
    merge_busy_intervals, parse_timestamp, schedule_meeting, search, BusyInterval,
    InMemoryCalendar, MeetingResponse, ScheduleRequest, SchedulerError, SearchRequest, Timestamp,
    TracingObserver,
};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

/// Exit status when the search space holds no feasible slot.
const EXIT_NO_SLOT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "slotfind",
    version,
    about = "Find and book the best meeting slot across participant calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample calendar snapshot
    Init {
        /// Output file
        #[arg(short, long)]
        output: String,
    },
    /// Merge busy intervals into a sorted, disjoint list
    Merge {
        /// Input JSON array of {start, end} (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Find the best slot among busy intervals
    Find {
        /// Input JSON array of {start, end} (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Window start (RFC 3339)
        #[arg(long)]
        start: String,
        /// Window end (RFC 3339)
        #[arg(long)]
        end: String,
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: i64,
        /// Print every ranked candidate instead of only the winner
        #[arg(long)]
        all: bool,
    },
    /// Book the best slot for a group and save it to the calendar snapshot
    Schedule {
        /// Calendar snapshot (JSON)
        #[arg(short, long)]
        calendar: String,
        /// Comma-separated participant ids
        #[arg(short, long, value_delimiter = ',')]
        participants: Vec<String>,
        /// Window start (RFC 3339)
        #[arg(long)]
        start: String,
        /// Window end (RFC 3339)
        #[arg(long)]
        end: String,
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: i64,
        /// Meeting title
        #[arg(short, long, default_value = DEFAULT_MEETING_TITLE)]
        title: String,
    },
    /// List one user's events in a window
    Calendar {
        /// Calendar snapshot (JSON)
        #[arg(short, long)]
        calendar: String,
        /// User id
        #[arg(short, long)]
        user: String,
        /// Window start (RFC 3339)
        #[arg(long)]
        start: String,
        /// Window end (RFC 3339)
        #[arg(long)]
        end: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output } => {
            let calendar = InMemoryCalendar::with_sample_data();
            save_calendar(&output, &calendar)?;
            tracing::info!(path = %output, "wrote sample calendar");
        }
        Commands::Merge { input } => {
            let busy = read_busy(input.as_deref())?;
            let merged = merge_busy_intervals(&busy);
            println!("{}", serde_json::to_string_pretty(&merged)?);
        }
        Commands::Find {
            input,
            start,
            end,
            duration,
            all,
        } => {
            let busy = read_busy(input.as_deref())?;
            let duration = Duration::try_minutes(duration)
                .ok_or(SchedulerError::InvalidDuration(duration))?;
            let request = SearchRequest::new(parse_arg(&start)?, parse_arg(&end)?, duration, busy)?;

            let outcome = search(&request, &mut TracingObserver);
            if outcome.ranked.is_empty() {
                no_slot();
            }
            if all {
                println!("{}", serde_json::to_string_pretty(&outcome.ranked)?);
            } else if let Some(best) = outcome.best() {
                println!("{}", serde_json::to_string_pretty(best)?);
            }
        }
        Commands::Schedule {
            calendar: path,
            participants,
            start,
            end,
            duration,
            title,
        } => {
            let mut calendar = load_calendar(&path)?;
            let participants: Vec<String> = participants
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            let request =
                ScheduleRequest::new(participants, duration, parse_arg(&start)?, parse_arg(&end)?)
                    .with_title(title);

            let meeting = match schedule_meeting(&mut calendar, &request, &mut TracingObserver) {
                Ok(meeting) => meeting,
                Err(SchedulerError::NoAvailableSlot) => no_slot(),
                Err(e) => return Err(e).context("Failed to schedule meeting"),
            };
            save_calendar(&path, &calendar)?;

            let response = MeetingResponse::from(&meeting);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Calendar {
            calendar: path,
            user,
            start,
            end,
        } => {
            let calendar = load_calendar(&path)?;
            let events = calendar.user_calendar(&user, parse_arg(&start)?, parse_arg(&end)?)?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
    }

    Ok(())
}

fn no_slot() -> ! {
    eprintln!("{}", SchedulerError::NoAvailableSlot);
    process::exit(EXIT_NO_SLOT);
}

fn parse_arg(value: &str) -> Result<Timestamp> {
    parse_timestamp(value).with_context(|| format!("Failed to parse timestamp argument: {}", value))
}

/// Read a JSON array of busy intervals. Extra fields (titles, ids) are ignored.
fn read_busy(path: Option<&str>) -> Result<Vec<BusyInterval>> {
    let json = read_input(path)?;
    let busy: Vec<BusyInterval> =
        serde_json::from_str(&json).context("Failed to parse busy intervals JSON")?;
    if let Some(bad) = busy.iter().find(|iv| iv.end < iv.start) {
        anyhow::bail!(
            "Busy interval ends before it starts: {} > {}",
            bad.start.to_rfc3339(),
            bad.end.to_rfc3339()
        );
    }
    Ok(busy)
}

fn load_calendar(path: &str) -> Result<InMemoryCalendar> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read calendar: {}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse calendar: {}", path))
}

fn save_calendar(path: &str, calendar: &InMemoryCalendar) -> Result<()> {
    let json = serde_json::to_string_pretty(calendar)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write calendar: {}", path))
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
