//! Candidate slot enumeration over a merged busy timeline.
//!
//! A single left-to-right sweep with a cursor. Each interior gap that can hold
//! the meeting contributes its first-fit slot; the free tail after the last busy
//! interval is packed with back-to-back slots until the window runs out.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::interval::BusyInterval;
use crate::Timestamp;

/// A fixed-length free range proposed as a meeting time.
///
/// `end == start + duration` for every slot the finder produces. `score` is
/// `0.0` until the slot passes through [`crate::scorer::score_slot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: Timestamp,
    pub end: Timestamp,
    pub score: f64,
}

impl CandidateSlot {
    pub fn new(start: Timestamp, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
            score: 0.0,
        }
    }
}

/// Enumerate candidate slots of exactly `duration` inside `[window_start, window_end]`.
///
/// `merged` must be sorted and disjoint, as produced by
/// [`crate::interval::merge_busy_intervals`]. Busy intervals may extend past
/// either edge of the window.
///
/// All slots are expressed in `window_start`'s UTC offset so that hour-of-day
/// scoring uses one convention. An empty result means no feasible slot.
pub fn find_candidate_slots(
    window_start: Timestamp,
    window_end: Timestamp,
    duration: Duration,
    merged: &[BusyInterval],
) -> Vec<CandidateSlot> {
    let mut slots = Vec::new();
    if duration <= Duration::zero() || window_start >= window_end {
        return slots;
    }

    let offset = window_start.timezone();
    let mut cursor = window_start;

    for busy in merged {
        if busy.start > cursor {
            // The gap never extends past the window, even when the busy
            // interval starts after it.
            let gap_end = busy.start.min(window_end);
            if gap_end - cursor >= duration {
                slots.push(CandidateSlot::new(cursor.with_timezone(&offset), duration));
            }
        }
        cursor = cursor.max(busy.end);
    }

    // Pack the trailing free region with consecutive slots.
    while window_end - cursor >= duration {
        slots.push(CandidateSlot::new(cursor.with_timezone(&offset), duration));
        cursor += duration;
    }

    slots
}
