//! Busy intervals and the merger that normalizes them.
//!
//! Sorts intervals by start time, then sweeps once, folding every interval that
//! overlaps or touches the current one into it. The output is the minimal sorted
//! list of disjoint intervals covering the same time as the input.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// A period during which at least one participant is already committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl BusyInterval {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open overlap test. Intervals that only touch do not overlap.
    pub fn overlaps(&self, start: Timestamp, end: Timestamp) -> bool {
        self.start < end && start < self.end
    }
}

/// Merge overlapping or adjacent busy intervals.
///
/// Returns a sorted, pairwise-disjoint list whose union equals the union of the
/// input. An interval whose start equals the running end is merged, so the
/// output never contains two intervals that touch. Empty input yields empty output.
pub fn merge_busy_intervals(intervals: &[BusyInterval]) -> Vec<BusyInterval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut sorted = intervals.to_vec();
    // Sort by start time (then by end time for stability).
    sorted.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<BusyInterval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}
