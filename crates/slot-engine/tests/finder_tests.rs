//! Tests for candidate slot enumeration.

use chrono::{Duration, FixedOffset, TimeZone, Timelike, Utc};
use slot_engine::finder::find_candidate_slots;
use slot_engine::interval::{merge_busy_intervals, BusyInterval};
use slot_engine::Timestamp;

fn at(hour: u32, minute: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, 0)
        .unwrap()
        .fixed_offset()
}

fn busy(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> BusyInterval {
    BusyInterval::new(at(start_hour, start_min), at(end_hour, end_min))
}

fn starts(slots: &[slot_engine::CandidateSlot]) -> Vec<Timestamp> {
    slots.iter().map(|s| s.start).collect()
}

#[test]
fn empty_calendar_packs_the_whole_window() {
    // Window 09:00-18:00, 60 min → 09:00, 10:00, ..., 17:00
    let slots = find_candidate_slots(at(9, 0), at(18, 0), Duration::minutes(60), &[]);

    assert_eq!(slots.len(), 9);
    for (i, slot) in slots.iter().enumerate() {
        assert_eq!(slot.start, at(9 + i as u32, 0));
        assert_eq!(slot.end, slot.start + Duration::minutes(60));
        assert_eq!(slot.score, 0.0);
    }
}

#[test]
fn interior_gap_contributes_only_its_first_fit() {
    // Window 08:00-18:00, busy 11:00-12:00. The 08:00-11:00 gap could hold three
    // hour-long slots but only 08:00 is offered; the tail 12:00-18:00 is packed.
    let merged = merge_busy_intervals(&[busy(11, 0, 12, 0)]);
    let slots = find_candidate_slots(at(8, 0), at(18, 0), Duration::minutes(60), &merged);

    assert_eq!(
        starts(&slots),
        vec![
            at(8, 0),
            at(12, 0),
            at(13, 0),
            at(14, 0),
            at(15, 0),
            at(16, 0),
            at(17, 0)
        ]
    );
}

#[test]
fn flush_slots_around_a_single_meeting() {
    // Window 09:00-12:00, busy 10:00-11:00 → 09:00-10:00 and 11:00-12:00.
    let merged = merge_busy_intervals(&[busy(10, 0, 11, 0)]);
    let slots = find_candidate_slots(at(9, 0), at(12, 0), Duration::minutes(60), &merged);

    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].start, slots[0].end), (at(9, 0), at(10, 0)));
    assert_eq!((slots[1].start, slots[1].end), (at(11, 0), at(12, 0)));
}

#[test]
fn gap_shorter_than_duration_is_skipped() {
    // Window 09:00-12:00, busy 09:00-10:30 and 11:00-12:00: only a 30 min gap.
    let merged = merge_busy_intervals(&[busy(9, 0, 10, 30), busy(11, 0, 12, 0)]);
    let slots = find_candidate_slots(at(9, 0), at(12, 0), Duration::minutes(60), &merged);

    assert!(slots.is_empty(), "no gap can hold an hour");
}

#[test]
fn gap_exactly_duration_fits() {
    let merged = merge_busy_intervals(&[busy(9, 0, 10, 0), busy(10, 45, 12, 0)]);
    let slots = find_candidate_slots(at(9, 0), at(12, 0), Duration::minutes(45), &merged);

    assert_eq!(starts(&slots), vec![at(10, 0)]);
}

#[test]
fn busy_interval_before_window_moves_the_cursor() {
    // 08:00-09:30 started before the 09:00 window; the first slot is 09:30.
    let merged = merge_busy_intervals(&[busy(8, 0, 9, 30)]);
    let slots = find_candidate_slots(at(9, 0), at(11, 30), Duration::minutes(60), &merged);

    assert_eq!(starts(&slots), vec![at(9, 30), at(10, 30)]);
}

#[test]
fn busy_interval_past_window_end_never_yields_outside_slot() {
    // Busy starts at 13:00, after the 12:30 window end. The 12:00-13:00 gap is
    // an hour long but only 30 minutes of it lie inside the window.
    let merged = merge_busy_intervals(&[busy(9, 0, 12, 0), busy(13, 0, 14, 0)]);
    let slots = find_candidate_slots(at(9, 0), at(12, 30), Duration::minutes(60), &merged);

    assert!(slots.is_empty());
}

#[test]
fn trailing_region_stops_before_overflowing() {
    // 90 min of tail with 60 min slots → one slot, not two.
    let slots = find_candidate_slots(at(9, 0), at(10, 30), Duration::minutes(60), &[]);

    assert_eq!(starts(&slots), vec![at(9, 0)]);
}

#[test]
fn fully_busy_window_yields_nothing() {
    let merged = merge_busy_intervals(&[busy(8, 0, 19, 0)]);
    let slots = find_candidate_slots(at(9, 0), at(18, 0), Duration::minutes(30), &merged);

    assert!(slots.is_empty());
}

#[test]
fn slots_use_the_window_offset() {
    // Window given in +02:00; the busy interval is in UTC.
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let window_start = plus_two.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let window_end = plus_two.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    // 08:00Z-09:00Z is 10:00-11:00 local.
    let merged = merge_busy_intervals(&[busy(8, 0, 9, 0)]);

    let slots = find_candidate_slots(window_start, window_end, Duration::minutes(60), &merged);

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].start.offset(), &plus_two);
    assert_eq!(slots[1].start.hour(), 11);
}

#[test]
fn degenerate_inputs_yield_nothing() {
    assert!(find_candidate_slots(at(9, 0), at(9, 0), Duration::minutes(30), &[]).is_empty());
    assert!(find_candidate_slots(at(9, 0), at(12, 0), Duration::zero(), &[]).is_empty());
}
