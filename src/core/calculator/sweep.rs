//! Sweep-line over start/end events.
//!
//! Events are sorted by `(time, delta)` with ends before starts, then walked
//! once while counting how many intervals are open. A gap between two
//! consecutive events counts when, before the later event is applied, the
//! number of open intervals equals `Role::REQUIRED`.

use crate::models::{Event, Interval, Role, Timestamp};

/// Sort in sweep order: time ascending, `End` before `Start` on ties.
pub fn sort_events(events: &mut [Event]) {
    events.sort_unstable();
}

/// Walk already sorted events, calling `on_full` for every non-empty gap
/// during which all required roles were active.
fn walk<F>(events: &[Event], mut on_full: F)
where
    F: FnMut(Timestamp, Timestamp),
{
    let Some(first) = events.first() else {
        return;
    };

    let mut active: i64 = 0;
    let mut cursor = first.time;

    for ev in events {
        if active == Role::REQUIRED as i64 && ev.time > cursor {
            on_full(cursor, ev.time);
        }
        active += ev.delta.value();
        cursor = ev.time;
    }

    debug_assert_eq!(active, 0, "unbalanced start/end events");
}

/// Total duration during which all required roles overlap.
pub fn accumulate(mut events: Vec<Event>) -> u64 {
    if events.is_empty() {
        return 0;
    }
    sort_events(&mut events);

    let mut total = 0;
    walk(&events, |from, to| total += to - from);

    tracing::trace!(events = events.len(), total, "sweep finished");
    total
}

/// The overlap itself, as disjoint intervals. Contiguous pieces are joined.
pub fn segments(mut events: Vec<Event>) -> Vec<Interval> {
    sort_events(&mut events);

    let mut out: Vec<Interval> = Vec::new();
    walk(&events, |from, to| {
        if let Some(last) = out.last_mut()
            && last.end() == from
        {
            if let Some(joined) = Interval::new(last.start(), to) {
                *last = joined;
            }
            return;
        }
        if let Some(iv) = Interval::new(from, to) {
            out.push(iv);
        }
    });
    out
}
