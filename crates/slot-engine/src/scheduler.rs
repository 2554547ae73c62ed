//! Find the best slot for a group and book it.
//!
//! Validates the request, pulls the participants' busy events from a
//! [`CalendarStore`], runs the search, and persists the winning slot as a
//! meeting. "No slot" surfaces as [`SchedulerError::NoAvailableSlot`] so callers
//! can tell it apart from bad input and store failures.

use chrono::{Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::interval::BusyInterval;
use crate::observer::SearchObserver;
use crate::search::{search, SearchRequest};
use crate::store::{CalendarStore, Meeting};
use crate::Timestamp;

pub const DEFAULT_MEETING_TITLE: &str = "New Meeting";

/// A request to book one meeting for a group of participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub participant_ids: Vec<String>,
    pub duration_minutes: i64,
    pub window_start: Timestamp,
    pub window_end: Timestamp,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    DEFAULT_MEETING_TITLE.to_string()
}

impl ScheduleRequest {
    pub fn new(
        participant_ids: Vec<String>,
        duration_minutes: i64,
        window_start: Timestamp,
        window_end: Timestamp,
    ) -> Self {
        Self {
            participant_ids,
            duration_minutes,
            window_start,
            window_end,
            title: default_title(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// # Errors
    /// `EmptyParticipants`, `InvalidDuration`, or `InvalidWindow`, checked in that order.
    pub fn validate(&self) -> Result<()> {
        if self.participant_ids.is_empty() {
            return Err(SchedulerError::EmptyParticipants);
        }
        if self.duration_minutes <= 0 {
            return Err(SchedulerError::InvalidDuration(self.duration_minutes));
        }
        if self.window_start >= self.window_end {
            return Err(SchedulerError::InvalidWindow {
                start: self.window_start,
                end: self.window_end,
            });
        }
        Ok(())
    }
}

/// Wire shape of a booked meeting, timestamps rendered in UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingResponse {
    pub meeting_id: String,
    pub title: String,
    pub participant_ids: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

impl From<&Meeting> for MeetingResponse {
    fn from(meeting: &Meeting) -> Self {
        let utc = |t: Timestamp| {
            t.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        };
        Self {
            meeting_id: meeting.id.clone(),
            title: meeting.title.clone(),
            participant_ids: meeting.participant_ids.clone(),
            start_time: utc(meeting.start),
            end_time: utc(meeting.end),
        }
    }
}

/// Book the best available slot for `request` in `store`.
///
/// # Errors
/// - Input violations from [`ScheduleRequest::validate`].
/// - `SchedulerError::Store` when the store cannot fetch events or persist.
/// - `SchedulerError::NoAvailableSlot` when the window has no room.
pub fn schedule_meeting<S: CalendarStore + ?Sized>(
    store: &mut S,
    request: &ScheduleRequest,
    observer: &mut dyn SearchObserver,
) -> Result<Meeting> {
    request.validate()?;

    let events = store.events_in_window(
        &request.participant_ids,
        request.window_start,
        request.window_end,
    )?;
    let busy: Vec<BusyInterval> = events.iter().map(BusyInterval::from).collect();

    let duration = Duration::try_minutes(request.duration_minutes)
        .ok_or(SchedulerError::InvalidDuration(request.duration_minutes))?;
    let search_request =
        SearchRequest::new(request.window_start, request.window_end, duration, busy)?;
    let best = search(&search_request, observer)
        .into_best()
        .ok_or(SchedulerError::NoAvailableSlot)?;

    store.create_meeting(
        &request.title,
        &request.participant_ids,
        best.start,
        best.end,
    )
}
