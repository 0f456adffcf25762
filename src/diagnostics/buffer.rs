// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for diagnostic event storage.
//!
//! This module provides a memory-bounded ring buffer that automatically
//! evicts the oldest entries when capacity is reached.

use std::collections::VecDeque;

use crate::config::{MAX_DIAGNOSTICS_CAPACITY, MIN_DIAGNOSTICS_CAPACITY};

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use iced_vplayer::diagnostics::CircularBuffer;
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(16);
///
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![1, 2, 3]);
/// assert_eq!(buffer.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer, clamping the capacity to the supported
    /// diagnostics range.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_raw_capacity(capacity.clamp(MIN_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY))
    }

    /// Creates a new circular buffer with a raw capacity value.
    ///
    /// This is useful for testing with small capacities.
    /// For production use, prefer [`CircularBuffer::new`].
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the most recently pushed element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_capacity_to_supported_range() {
        assert_eq!(
            CircularBuffer::<u8>::new(0).capacity(),
            MIN_DIAGNOSTICS_CAPACITY
        );
        assert_eq!(
            CircularBuffer::<u8>::new(usize::MAX).capacity(),
            MAX_DIAGNOSTICS_CAPACITY
        );
    }

    #[test]
    fn raw_capacity_is_at_least_one() {
        let buffer: CircularBuffer<u8> = CircularBuffer::with_raw_capacity(0);
        assert_eq!(buffer.capacity(), 1);
    }

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for i in 1..=5 {
            buffer.push(i);
        }
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.last(), Some(&5));
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = CircularBuffer::with_raw_capacity(4);
        buffer.push("a");
        buffer.push("b");
        assert!(!buffer.is_empty());

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 4);
    }
}
