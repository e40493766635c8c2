use serde::Serialize;

/// Timestamps are plain integers (e.g. Unix epoch seconds).
pub type Timestamp = u64;

/// Half-open presence window `[start, end)`. Always satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Interval {
    start: Timestamp,
    end: Timestamp,
}

impl Interval {
    /// Returns `None` for zero-length or reversed pairs.
    pub fn new(start: Timestamp, end: Timestamp) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Common part of two intervals, if any. Touching intervals do not intersect.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        Interval::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Widen `self` to also cover `other`. Only meaningful when they overlap or touch.
    pub(crate) fn absorb(&mut self, other: &Interval) {
        self.start = self.start.min(other.start);
        self.end = self.end.max(other.end);
    }
}
