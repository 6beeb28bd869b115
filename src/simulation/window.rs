//! Sliding window of pending rolls.
//!
//! FIFO of the rolls contributing to the current trial's cumulative sum,
//! backed by a `VecDeque` (array-backed ring buffer, O(1) push-back and
//! pop-front). The sum is maintained incrementally on push/evict and never
//! recomputed by walking the deque.

use std::collections::VecDeque;

/// The rolls whose sum has not yet reached the target, oldest first.
#[derive(Clone, Debug, Default)]
pub struct RollWindow {
    rolls: VecDeque<u32>,
    sum: u64,
}

impl RollWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rolls: VecDeque::with_capacity(capacity),
            sum: 0,
        }
    }

    /// Append a roll at the back, adding it to the running sum.
    #[inline]
    pub fn push(&mut self, roll: u32) {
        self.rolls.push_back(roll);
        self.sum += u64::from(roll);
    }

    /// Remove the oldest roll, subtracting it from the running sum.
    #[inline]
    pub fn evict_front(&mut self) -> Option<u32> {
        let roll = self.rolls.pop_front()?;
        self.sum -= u64::from(roll);
        Some(roll)
    }

    /// Number of rolls currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Sum of all rolls currently held.
    #[inline]
    pub fn sum(&self) -> u64 {
        self.sum
    }
}
