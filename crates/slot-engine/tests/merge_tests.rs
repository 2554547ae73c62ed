//! Tests for busy interval merging.

use chrono::{TimeZone, Utc};
use slot_engine::interval::{merge_busy_intervals, BusyInterval};
use slot_engine::Timestamp;

/// Helper: an instant on 2026-03-01 (UTC).
fn at(hour: u32, minute: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, 0)
        .unwrap()
        .fixed_offset()
}

/// Helper: a busy interval from hour/minute pairs on 2026-03-01.
fn busy(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> BusyInterval {
    BusyInterval::new(at(start_hour, start_min), at(end_hour, end_min))
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(merge_busy_intervals(&[]).is_empty());
}

#[test]
fn overlapping_intervals_merge_into_one() {
    // 09:00-10:30 and 10:00-11:00 → 09:00-11:00
    let merged = merge_busy_intervals(&[busy(9, 0, 10, 30), busy(10, 0, 11, 0)]);

    assert_eq!(merged, vec![busy(9, 0, 11, 0)]);
}

#[test]
fn adjacent_intervals_merge() {
    // 09:00-10:00 touches 10:00-11:00, so they become one block.
    let merged = merge_busy_intervals(&[busy(9, 0, 10, 0), busy(10, 0, 11, 0)]);

    assert_eq!(merged, vec![busy(9, 0, 11, 0)]);
}

#[test]
fn separated_intervals_stay_apart() {
    let merged = merge_busy_intervals(&[busy(9, 0, 10, 0), busy(10, 1, 11, 0)]);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0], busy(9, 0, 10, 0));
    assert_eq!(merged[1], busy(10, 1, 11, 0));
}

#[test]
fn unordered_input_is_sorted() {
    let merged = merge_busy_intervals(&[
        busy(15, 0, 16, 0),
        busy(9, 0, 10, 0),
        busy(12, 0, 13, 0),
    ]);

    assert_eq!(
        merged,
        vec![busy(9, 0, 10, 0), busy(12, 0, 13, 0), busy(15, 0, 16, 0)]
    );
}

#[test]
fn contained_interval_does_not_shrink_the_block() {
    // 09:00-12:00 fully contains 10:00-11:00; the later, shorter end must not win.
    let merged = merge_busy_intervals(&[busy(9, 0, 12, 0), busy(10, 0, 11, 0)]);

    assert_eq!(merged, vec![busy(9, 0, 12, 0)]);
}

#[test]
fn chain_of_overlaps_collapses() {
    let merged = merge_busy_intervals(&[
        busy(9, 0, 9, 30),
        busy(9, 30, 10, 30),
        busy(10, 0, 11, 0),
        busy(11, 0, 14, 0),
        busy(14, 0, 15, 0),
    ]);

    assert_eq!(merged, vec![busy(9, 0, 15, 0)]);
}

#[test]
fn already_merged_list_is_unchanged() {
    let disjoint = vec![busy(8, 0, 9, 0), busy(10, 0, 11, 0), busy(13, 0, 17, 0)];

    assert_eq!(merge_busy_intervals(&disjoint), disjoint);
}

#[test]
fn mixed_offsets_compare_as_instants() {
    // 11:00+02:00 is 09:00Z, so it overlaps 08:30Z-09:30Z.
    let plus_two = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
    let a = busy(8, 30, 9, 30);
    let b = BusyInterval::new(
        plus_two.with_ymd_and_hms(2026, 3, 1, 11, 0, 0).unwrap(),
        plus_two.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
    );

    let merged = merge_busy_intervals(&[b, a]);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start, at(8, 30));
    assert_eq!(merged[0].end, at(10, 0));
}
