use super::interval::{Interval, Timestamp};

/// Direction of a sweep event.
///
/// The derived ordering puts `End` before `Start`, so that at an identical
/// instant a departure is processed before an arrival and abutting
/// intervals never count as overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Delta {
    End,
    Start,
}

impl Delta {
    pub fn value(&self) -> i64 {
        match self {
            Delta::End => -1,
            Delta::Start => 1,
        }
    }
}

/// Point on the timeline where an interval opens or closes.
///
/// Field order matters: the derived `Ord` sorts by `(time, delta)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Event {
    pub time: Timestamp,
    pub delta: Delta,
}

impl Event {
    pub fn start(time: Timestamp) -> Self {
        Self {
            time,
            delta: Delta::Start,
        }
    }

    pub fn end(time: Timestamp) -> Self {
        Self {
            time,
            delta: Delta::End,
        }
    }

    /// The two events delimiting an interval.
    pub fn pair(interval: &Interval) -> [Event; 2] {
        [Event::start(interval.start()), Event::end(interval.end())]
    }
}
