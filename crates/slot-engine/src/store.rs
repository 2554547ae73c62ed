//! Event store seam and an in-memory calendar.
//!
//! The search core never reads storage itself. A [`CalendarStore`] supplies the
//! busy events that intersect a window and persists the meeting that comes out
//! of a search. [`InMemoryCalendar`] is a serializable snapshot implementation
//! used by the CLI and the tests.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::interval::BusyInterval;
use crate::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// One committed event on a participant's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl CalendarEvent {
    /// Whether the event intersects `[window_start, window_end)`.
    pub fn intersects(&self, window_start: Timestamp, window_end: Timestamp) -> bool {
        self.start < window_end && self.end > window_start
    }
}

impl From<&CalendarEvent> for BusyInterval {
    fn from(event: &CalendarEvent) -> Self {
        BusyInterval::new(event.start, event.end)
    }
}

/// A scheduled meeting shared by several participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub participant_ids: Vec<String>,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// Source of busy events and sink for booked meetings.
pub trait CalendarStore {
    /// All events of the listed participants with `start < window_end && end > window_start`.
    ///
    /// Events are not deduplicated across participants.
    fn events_in_window(
        &self,
        participant_ids: &[String],
        window_start: Timestamp,
        window_end: Timestamp,
    ) -> Result<Vec<CalendarEvent>>;

    /// Persist a meeting and one calendar event per participant at `[start, end]`.
    fn create_meeting(
        &mut self,
        title: &str,
        participant_ids: &[String],
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Meeting>;
}

/// A whole calendar database held in memory. Serializes to a JSON snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryCalendar {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    events: Vec<CalendarEvent>,
    #[serde(default)]
    meetings: Vec<Meeting>,
    #[serde(default)]
    next_id: u64,
}

impl InMemoryCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Four users with a few overlapping commitments on 2024-09-02 (UTC).
    pub fn with_sample_data() -> Self {
        let mut calendar = Self::new();
        for (id, name) in [
            ("user1", "Alice Johnson"),
            ("user2", "Bob Smith"),
            ("user3", "Charlie Brown"),
            ("user4", "Diana Ross"),
        ] {
            calendar.add_user(id, name);
        }

        let at = |hour: u32, minute: u32| -> Timestamp {
            Utc.with_ymd_and_hms(2024, 9, 2, hour, minute, 0)
                .single()
                .expect("sample dates are unambiguous in UTC")
                .fixed_offset()
        };
        let seed = [
            ("user1", "Morning Standup", at(9, 0), at(9, 30)),
            ("user1", "Client Call", at(11, 0), at(12, 0)),
            ("user1", "Lunch Break", at(12, 0), at(13, 0)),
            ("user2", "Team Meeting", at(10, 0), at(11, 0)),
            ("user2", "Code Review", at(13, 0), at(14, 0)),
            ("user3", "Design Review", at(9, 30), at(10, 30)),
            ("user3", "1:1 Meeting", at(14, 0), at(15, 0)),
        ];
        for (user_id, title, start, end) in seed {
            calendar.push_event(user_id, title, start, end);
        }

        calendar
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Add a user, replacing the name if the id already exists.
    pub fn add_user(&mut self, id: &str, name: &str) {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => user.name = name.to_string(),
            None => self.users.push(User {
                id: id.to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// Add an event to a user's calendar.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidEvent` if `end` precedes `start`.
    pub fn add_event(
        &mut self,
        user_id: &str,
        title: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<CalendarEvent> {
        if end < start {
            return Err(SchedulerError::InvalidEvent {
                id: format!("{} ({})", title, user_id),
            });
        }
        Ok(self.push_event(user_id, title, start, end))
    }

    /// One user's events intersecting the window, sorted by start.
    pub fn user_calendar(
        &self,
        user_id: &str,
        window_start: Timestamp,
        window_end: Timestamp,
    ) -> Result<Vec<CalendarEvent>> {
        if window_start >= window_end {
            return Err(SchedulerError::InvalidWindow {
                start: window_start,
                end: window_end,
            });
        }
        let mut events: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|e| e.user_id == user_id && e.intersects(window_start, window_end))
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.start, e.end));
        Ok(events)
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}_{}", prefix, self.next_id)
    }

    fn push_event(
        &mut self,
        user_id: &str,
        title: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> CalendarEvent {
        let event = CalendarEvent {
            id: self.next_id("event"),
            user_id: user_id.to_string(),
            title: title.to_string(),
            start,
            end,
        };
        self.events.push(event.clone());
        event
    }
}

impl CalendarStore for InMemoryCalendar {
    fn events_in_window(
        &self,
        participant_ids: &[String],
        window_start: Timestamp,
        window_end: Timestamp,
    ) -> Result<Vec<CalendarEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| participant_ids.contains(&e.user_id))
            .filter(|e| e.intersects(window_start, window_end))
            .cloned()
            .collect())
    }

    fn create_meeting(
        &mut self,
        title: &str,
        participant_ids: &[String],
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Meeting> {
        let meeting = Meeting {
            id: self.next_id("meeting"),
            title: title.to_string(),
            participant_ids: participant_ids.to_vec(),
            start,
            end,
        };
        self.meetings.push(meeting.clone());

        for participant_id in participant_ids {
            self.push_event(participant_id, title, start, end);
        }

        Ok(meeting)
    }
}
