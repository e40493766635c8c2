use rappearance::core::calculator::events::build_events;
use rappearance::core::calculator::normalizer::{OddLengthPolicy, coalesce, normalize, pair_up};
use rappearance::core::calculator::sweep::{accumulate, segments, sort_events};
use rappearance::errors::AppError;
use rappearance::models::{Delta, Event, Interval, Role};

fn iv(start: u64, end: u64) -> Interval {
    Interval::new(start, end).unwrap()
}

#[test]
fn test_pair_up_keeps_order_and_drops_invalid() {
    let got = pair_up(Role::Pupil, &[50, 60, 30, 30, 10, 20, 9, 1], OddLengthPolicy::Reject).unwrap();
    assert_eq!(got, vec![iv(50, 60), iv(10, 20)]);
}

#[test]
fn test_pair_up_odd_length_policies() {
    let raw = [10, 20, 30];
    assert!(matches!(
        pair_up(Role::Tutor, &raw, OddLengthPolicy::Reject),
        Err(AppError::MalformedInputLength { role: Role::Tutor, len: 3 })
    ));
    assert_eq!(
        pair_up(Role::Tutor, &raw, OddLengthPolicy::Truncate).unwrap(),
        vec![iv(10, 20)]
    );
    assert!(pair_up(Role::Tutor, &[7], OddLengthPolicy::Truncate).unwrap().is_empty());
}

#[test]
fn test_coalesce_merges_overlapping_and_touching() {
    let merged = coalesce(vec![iv(50, 60), iv(10, 30), iv(20, 40), iv(40, 45), iv(70, 80)]);
    assert_eq!(merged, vec![iv(10, 45), iv(50, 60), iv(70, 80)]);
}

#[test]
fn test_coalesce_nested_interval() {
    assert_eq!(coalesce(vec![iv(0, 100), iv(10, 20)]), vec![iv(0, 100)]);
    assert!(coalesce(Vec::new()).is_empty());
}

#[test]
fn test_normalize_combines_both_steps() {
    let got = normalize(Role::Lesson, &[30, 40, 0, 35, 5, 5], OddLengthPolicy::Reject).unwrap();
    assert_eq!(got, vec![iv(0, 40)]);
}

#[test]
fn test_build_events_emits_two_per_interval() {
    let lesson = vec![iv(0, 100)];
    let pupil = vec![iv(10, 20), iv(30, 40)];
    let tutor: Vec<Interval> = Vec::new();
    let events = build_events([lesson.as_slice(), pupil.as_slice(), tutor.as_slice()]);
    assert_eq!(events.len(), 6);
    assert_eq!(events.iter().filter(|e| e.delta == Delta::Start).count(), 3);
}

#[test]
fn test_sort_puts_end_before_start_at_same_time() {
    let mut events = vec![Event::start(20), Event::end(20), Event::start(10), Event::end(30)];
    sort_events(&mut events);
    assert_eq!(
        events,
        vec![Event::start(10), Event::end(20), Event::start(20), Event::end(30)]
    );
}

#[test]
fn test_accumulate_empty_is_zero() {
    assert_eq!(accumulate(Vec::new()), 0);
    assert!(segments(Vec::new()).is_empty());
}

#[test]
fn test_accumulate_counts_only_full_presence() {
    let lesson = vec![iv(0, 100)];
    let pupil = vec![iv(10, 90)];
    let tutor = vec![iv(20, 80)];
    let events = build_events([lesson.as_slice(), pupil.as_slice(), tutor.as_slice()]);
    assert_eq!(accumulate(events.clone()), 60);
    assert_eq!(segments(events), vec![iv(20, 80)]);
}

#[test]
fn test_accumulate_handover_at_same_instant() {
    // pupil leaves at 50 exactly when the tutor arrives
    let lesson = vec![iv(0, 100)];
    let pupil = vec![iv(10, 50)];
    let tutor = vec![iv(50, 90)];
    let events = build_events([lesson.as_slice(), pupil.as_slice(), tutor.as_slice()]);
    assert_eq!(accumulate(events.clone()), 0);
    assert!(segments(events).is_empty());
}

#[test]
fn test_accumulate_simultaneous_starts_and_ends() {
    let all = vec![iv(10, 20)];
    let events = build_events([all.as_slice(), all.as_slice(), all.as_slice()]);
    assert_eq!(accumulate(events), 10);
}
