//! Heuristic scoring for candidate slots.
//!
//! Starts from a base score and applies additive adjustments:
//!
//! 1. Hour-of-day band: morning beats afternoon beats everything else.
//! 2. Working-hours bonus, applied on top of the band.
//! 3. Buffer-time pass over every busy interval: tight gaps before or after the
//!    slot are penalized, flush (zero-gap) placement earns a small bonus.
//! 4. Fragmentation pass over every busy interval: gaps under half an hour on
//!    either side are penalized again.
//!
//! Passes 3 and 4 overlap on purpose and both always run; rankings depend on
//! the stacked penalties.

use chrono::{Duration, Timelike};

use crate::finder::CandidateSlot;
use crate::interval::BusyInterval;

pub const BASE_SCORE: f64 = 100.0;

pub const MORNING_BONUS: f64 = 20.0;
pub const AFTERNOON_BONUS: f64 = 10.0;
pub const OFF_HOURS_PENALTY: f64 = -30.0;

pub const WORKING_HOURS_BONUS: f64 = 15.0;
pub const NON_WORKING_HOURS_PENALTY: f64 = -25.0;

pub const TIGHT_BUFFER_PENALTY: f64 = -20.0;
pub const SHORT_BUFFER_PENALTY: f64 = -10.0;
pub const BACK_TO_BACK_BONUS: f64 = 5.0;

pub const FRAGMENTATION_PENALTY: f64 = -15.0;

/// Gaps shorter than this are "tight".
pub fn tight_buffer() -> Duration {
    Duration::minutes(15)
}

/// Gaps shorter than this are "short" and fragment the day.
pub fn short_buffer() -> Duration {
    Duration::minutes(30)
}

/// Score a candidate slot against the full, unmerged busy set. Higher is better.
///
/// The hour of day is read from `slot.start` in its own UTC offset; no time zone
/// conversion happens here.
pub fn score_slot(slot: &CandidateSlot, busy: &[BusyInterval]) -> f64 {
    let hour = slot.start.hour();
    BASE_SCORE
        + hour_band(hour)
        + working_hours(hour)
        + buffer_score(slot, busy)
        + fragmentation_score(slot, busy)
}

/// `[9, 12]` is morning and `[13, 17]` afternoon, both inclusive.
fn hour_band(hour: u32) -> f64 {
    match hour {
        9..=12 => MORNING_BONUS,
        13..=17 => AFTERNOON_BONUS,
        _ => OFF_HOURS_PENALTY,
    }
}

/// `[9, 17)`, so a 17:00 start is outside working hours but still "afternoon".
fn working_hours(hour: u32) -> f64 {
    if (9..17).contains(&hour) {
        WORKING_HOURS_BONUS
    } else {
        NON_WORKING_HOURS_PENALTY
    }
}

fn buffer_penalty(gap: Duration) -> f64 {
    let zero = Duration::zero();
    if gap > zero && gap < tight_buffer() {
        TIGHT_BUFFER_PENALTY
    } else if gap > zero && gap < short_buffer() {
        SHORT_BUFFER_PENALTY
    } else {
        0.0
    }
}

fn buffer_score(slot: &CandidateSlot, busy: &[BusyInterval]) -> f64 {
    busy.iter()
        .map(|iv| {
            let gap_before = slot.start - iv.end;
            let gap_after = iv.start - slot.end;
            let mut score = buffer_penalty(gap_before) + buffer_penalty(gap_after);
            if gap_before == Duration::zero() || gap_after == Duration::zero() {
                score += BACK_TO_BACK_BONUS;
            }
            score
        })
        .sum()
}

fn fragmentation_score(slot: &CandidateSlot, busy: &[BusyInterval]) -> f64 {
    let zero = Duration::zero();
    let fragments = |gap: Duration| gap > zero && gap < short_buffer();

    busy.iter()
        .map(|iv| {
            let mut score = 0.0;
            if fragments(iv.start - slot.end) {
                score += FRAGMENTATION_PENALTY;
            }
            if fragments(slot.start - iv.end) {
                score += FRAGMENTATION_PENALTY;
            }
            score
        })
        .sum()
}
