use chrono::{DateTime, Duration, Utc};

/// Half-open time interval `[start, end)` between two UTC instants.
///
/// The availability engine and booking admission both decide conflicts
/// through this type so they agree on boundaries: back-to-back intervals do
/// not overlap, and an interval ending exactly at another's start is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Interval of `length` beginning at `start`.
    pub fn starting_at(start: DateTime<Utc>, length: Duration) -> Self {
        Self::new(start, start + length)
    }

    pub fn length(&self) -> Duration {
        self.end - self.start
    }

    /// `self.start < other.end && other.start < self.end`
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Overlap with an existing booking, also treating equal starts as a clash.
    pub fn collides_with_booking(&self, booking: &Interval) -> bool {
        self.overlaps(booking) || self.start == booking.start
    }

    /// Splits the interval into consecutive pieces of `step`.
    ///
    /// A piece ending exactly at `self.end` is kept; a trailing remainder
    /// shorter than `step` is dropped. Non-positive steps yield nothing.
    pub fn tile(&self, step: Duration) -> Vec<Interval> {
        let mut pieces = Vec::new();
        if step <= Duration::zero() {
            return pieces;
        }

        let mut cursor = self.start;
        while cursor + step <= self.end {
            pieces.push(Interval::starting_at(cursor, step));
            cursor += step;
        }

        pieces
    }
}
