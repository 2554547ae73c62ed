//! Error types for slot-engine operations.

use thiserror::Error;

use crate::Timestamp;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("Participant IDs cannot be empty")]
    EmptyParticipants,

    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Invalid window: start {start} is not before end {end}")]
    InvalidWindow { start: Timestamp, end: Timestamp },

    #[error("Invalid event '{id}': end precedes start")]
    InvalidEvent { id: String },

    #[error("Invalid timestamp '{0}'. Use RFC 3339 with an explicit offset")]
    InvalidTimestamp(String),

    #[error("No available time slot found for all participants")]
    NoAvailableSlot,

    #[error("Event store error: {0}")]
    Store(String),
}

impl SchedulerError {
    /// Whether the caller supplied bad input, as opposed to a search that came up
    /// empty or a failure further upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SchedulerError::EmptyParticipants
                | SchedulerError::InvalidDuration(_)
                | SchedulerError::InvalidWindow { .. }
                | SchedulerError::InvalidEvent { .. }
                | SchedulerError::InvalidTimestamp(_)
        )
    }

    /// HTTP-style status code for front ends that report errors over the wire.
    pub fn status_code(&self) -> u16 {
        match self {
            SchedulerError::NoAvailableSlot => 409,
            SchedulerError::Store(_) => 500,
            _ => 400,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
