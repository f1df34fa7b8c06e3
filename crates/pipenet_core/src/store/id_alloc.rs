//! Monotonic record-ID allocator.
//!
//! # Responsibility
//! - Hand out strictly increasing IDs, starting at 1 for a fresh store.
//! - Restore counter state across save/load so IDs stay unique between
//!   sessions.
//!
//! # Invariants
//! - The counter only ever moves forward.
//! - An ID handed out once is never handed out again by the same allocator.

use crate::model::RecordId;

/// Counter-based ID source for one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: RecordId,
}

impl IdAllocator {
    /// Fresh allocator: the first issued ID will be 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Restores an allocator from a persisted counter.
    ///
    /// A persisted value of 0 (never written by the codec, but cheap to
    /// tolerate) is treated as a fresh counter.
    pub fn resume_at(next: RecordId) -> Self {
        Self { next: next.max(1) }
    }

    /// Issues the next ID and advances the counter.
    pub fn allocate(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// ID that the next call to [`allocate`](Self::allocate) would return.
    pub fn next_id(&self) -> RecordId {
        self.next
    }

    /// Moves the counter past `id` if it is not already there.
    ///
    /// Used when restoring records whose IDs were assigned before the
    /// counter was persisted (legacy save files without allocator headers).
    pub fn ensure_above(&mut self, id: RecordId) {
        if id >= self.next {
            self.next = id + 1;
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::IdAllocator;

    #[test]
    fn fresh_allocator_starts_at_one_and_increases() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.allocate(), 1);
        assert_eq!(alloc.allocate(), 2);
        assert_eq!(alloc.next_id(), 3);
    }

    #[test]
    fn resume_at_zero_is_treated_as_fresh() {
        let mut alloc = IdAllocator::resume_at(0);
        assert_eq!(alloc.allocate(), 1);
    }

    #[test]
    fn ensure_above_only_moves_forward() {
        let mut alloc = IdAllocator::resume_at(10);
        alloc.ensure_above(4);
        assert_eq!(alloc.next_id(), 10);
        alloc.ensure_above(10);
        assert_eq!(alloc.next_id(), 11);
    }
}
