//! # slot-engine
//!
//! Deterministic meeting slot search for multi-participant calendars.
//!
//! Given a time window, a meeting duration, and the busy intervals of every
//! participant, the engine merges the busy timeline, enumerates candidate slots
//! in the free gaps, scores each candidate, and picks a single winner. The
//! search itself is a pure function of its inputs: no clock, no I/O, no global
//! state. Event storage and diagnostics are injected by the caller.
//!
//! ## Modules
//!
//! - [`interval`] — Busy intervals and the sort-and-sweep merger
//! - [`finder`] — Candidate slot enumeration over the merged timeline
//! - [`scorer`] — Heuristic slot scoring (business hours, buffers, fragmentation)
//! - [`search`] — Validated search requests, ranking, and winner selection
//! - [`observer`] — Diagnostic callbacks (no-op and `tracing`-backed)
//! - [`store`] — Event store seam and an in-memory calendar
//! - [`scheduler`] — End-to-end "find a slot and book it" service
//! - [`error`] — Error types

pub mod error;
pub mod finder;
pub mod interval;
pub mod observer;
pub mod scheduler;
pub mod scorer;
pub mod search;
pub mod store;

use chrono::{DateTime, FixedOffset};

pub use error::SchedulerError;
pub use finder::{find_candidate_slots, CandidateSlot};
pub use interval::{merge_busy_intervals, BusyInterval};
pub use observer::{SearchObserver, TracingObserver};
pub use scheduler::{schedule_meeting, MeetingResponse, ScheduleRequest};
pub use scorer::score_slot;
pub use search::{find_optimal_slot, rank_candidates, search, SearchOutcome, SearchRequest};
pub use store::{CalendarEvent, CalendarStore, InMemoryCalendar, Meeting};

/// An absolute instant that keeps the caller's UTC offset for hour-of-day rules.
pub type Timestamp = DateTime<FixedOffset>;

/// Parse an RFC 3339 timestamp (e.g., "2024-09-02T09:00:00Z" or "2024-09-02T09:00:00+02:00").
///
/// Naive timestamps without an offset are rejected: every instant crossing the
/// API boundary must be unambiguous.
pub fn parse_timestamp(s: &str) -> error::Result<Timestamp> {
    DateTime::parse_from_rfc3339(s.trim()).map_err(|_| SchedulerError::InvalidTimestamp(s.to_string()))
}
