//! Validated search requests, ranking, and winner selection.
//!
//! Pipeline: merge the raw busy intervals, enumerate candidates over the merged
//! timeline, score each candidate against the raw (unmerged) intervals, then
//! rank by score descending with the earliest start breaking ties.

use std::cmp::Ordering;

use chrono::Duration;

use crate::error::{Result, SchedulerError};
use crate::finder::{find_candidate_slots, CandidateSlot};
use crate::interval::{merge_busy_intervals, BusyInterval};
use crate::observer::SearchObserver;
use crate::scorer::score_slot;
use crate::Timestamp;

/// Input to a slot search. Construct with [`SearchRequest::new`], which rejects
/// empty windows and non-positive durations.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    window_start: Timestamp,
    window_end: Timestamp,
    duration: Duration,
    busy: Vec<BusyInterval>,
}

impl SearchRequest {
    /// # Errors
    /// Returns `SchedulerError::InvalidWindow` if `window_start >= window_end`.
    /// Returns `SchedulerError::InvalidDuration` if `duration` is zero or negative.
    pub fn new(
        window_start: Timestamp,
        window_end: Timestamp,
        duration: Duration,
        busy: Vec<BusyInterval>,
    ) -> Result<Self> {
        if window_start >= window_end {
            return Err(SchedulerError::InvalidWindow {
                start: window_start,
                end: window_end,
            });
        }
        if duration <= Duration::zero() {
            return Err(SchedulerError::InvalidDuration(duration.num_minutes()));
        }
        Ok(Self {
            window_start,
            window_end,
            duration,
            busy,
        })
    }

    pub fn window_start(&self) -> Timestamp {
        self.window_start
    }

    pub fn window_end(&self) -> Timestamp {
        self.window_end
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn busy(&self) -> &[BusyInterval] {
        &self.busy
    }
}

/// Everything a search computed, for callers that want more than the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Merged busy timeline (sorted, disjoint).
    pub merged: Vec<BusyInterval>,
    /// Scored candidates, best first.
    pub ranked: Vec<CandidateSlot>,
}

impl SearchOutcome {
    /// The chosen slot, or `None` when no feasible slot exists.
    pub fn best(&self) -> Option<&CandidateSlot> {
        self.ranked.first()
    }

    pub fn into_best(self) -> Option<CandidateSlot> {
        self.ranked.into_iter().next()
    }
}

/// Order two scored slots: higher score first, then earlier start.
fn compare_ranked(a: &CandidateSlot, b: &CandidateSlot) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.start.cmp(&b.start))
}

/// Sort scored candidates best-first. Deterministic for any input order.
pub fn rank_candidates(mut candidates: Vec<CandidateSlot>) -> Vec<CandidateSlot> {
    candidates.sort_by(compare_ranked);
    candidates
}

/// Run the full search, reporting progress to `observer`.
pub fn search(request: &SearchRequest, observer: &mut dyn SearchObserver) -> SearchOutcome {
    let merged = merge_busy_intervals(&request.busy);
    observer.merged(request.busy.len(), &merged);

    let mut candidates = find_candidate_slots(
        request.window_start,
        request.window_end,
        request.duration,
        &merged,
    );
    observer.candidates_found(&candidates);

    for slot in &mut candidates {
        slot.score = score_slot(slot, &request.busy);
        observer.slot_scored(slot);
    }

    let ranked = rank_candidates(candidates);
    observer.slot_selected(ranked.first());

    SearchOutcome { merged, ranked }
}

/// Find the single best slot, or `None` if the window has no room for the meeting.
pub fn find_optimal_slot(request: &SearchRequest) -> Option<CandidateSlot> {
    search(request, &mut ()).into_best()
}
