//! Direction queue - reconciles key events with simulation ticks.
//!
//! Key presses arrive at arbitrary rates between ticks; the queue buffers
//! them and hands the simulation exactly one committed heading change per
//! tick. Legality is enforced at push time against the most recently queued
//! heading (or the current one when nothing is queued), so a burst of inputs
//! can never reverse the snake 180° - not within one tick and not across
//! several.

use arrayvec::ArrayVec;

use crate::types::Heading;

/// Pending headings kept between ticks. More buffered turns than this are
/// stale by the time they would apply, so further pushes are rejected like
/// any other unusable input.
pub const PENDING_CAPACITY: usize = 4;

/// Buffered heading changes plus the heading currently in effect.
///
/// Owned by the session and passed to the engine each tick; there is no
/// global instance.
#[derive(Debug, Clone)]
pub struct DirectionQueue {
    current: Heading,
    pending: ArrayVec<Heading, PENDING_CAPACITY>,
    default: Heading,
}

impl DirectionQueue {
    /// Create a queue whose current heading is `default`; `clear` returns to
    /// the same heading.
    pub fn new(default: Heading) -> Self {
        Self {
            current: default,
            pending: ArrayVec::new(),
            default,
        }
    }

    /// Heading the next `take` will return if nothing is pending.
    pub fn current(&self) -> Heading {
        self.current
    }

    /// Number of buffered heading changes.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Buffer a heading change if it is legal.
    ///
    /// The candidate is compared against the last queued heading, or against
    /// the current heading when the buffer is empty. Rejected (returning
    /// `false`, with no other effect):
    ///
    /// - the opposite of the reference heading (a 180° reversal),
    /// - the reference heading itself (adds no information),
    /// - anything once the buffer is full.
    pub fn push(&mut self, heading: Heading) -> bool {
        let reference = *self.pending.last().unwrap_or(&self.current);

        if heading == reference || heading == reference.opposite() {
            return false;
        }
        if self.pending.is_full() {
            return false;
        }

        self.pending.push(heading);
        true
    }

    /// Commit at most one buffered heading change and return the heading in
    /// effect for this tick.
    pub fn take(&mut self) -> Heading {
        if !self.pending.is_empty() {
            self.current = self.pending.remove(0);
        }
        self.current
    }

    /// Reset to the default heading and drop everything buffered.
    pub fn clear(&mut self) {
        self.current = self.default;
        self.pending.clear();
    }
}
