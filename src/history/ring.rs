// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Fixed-capacity ring of archived records.
//!
//! ```text
//!   slots: [Option<T>; C]   head: physical index of the oldest record
//!   len: number of live records (<= C)
//!
//!   logical i  => slots[(head + i) % C]
//!   push (full) => overwrite slots[head], head = (head + 1) % C
//! ```
//!
//! Removal compacts survivors toward `head` in a single forward pass, so
//! relative insertion order is preserved and no gaps remain.

/// Circular buffer that overwrites its oldest record once full
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }

    /// Append at the write cursor, returning the evicted oldest record if
    /// the ring was already full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let capacity = self.capacity();
        if capacity == 0 {
            return Some(item);
        }

        if self.is_full() {
            let evicted = self.slots[self.head].replace(item);
            self.head = (self.head + 1) % capacity;
            evicted
        } else {
            let tail = self.physical(self.len);
            self.slots[tail] = Some(item);
            self.len += 1;
            None
        }
    }

    /// Record at logical position `index`, 0 being the oldest
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Oldest-to-newest iterator; call `.rev()` for newest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Keep only records for which `keep` returns true.
    ///
    /// Every logical slot is visited exactly once and survivors are moved
    /// down to the write index, so adjacent matches are all removed.
    /// Returns the number of records dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let original_len = self.len;
        let mut write = 0;

        for read in 0..original_len {
            let from = self.physical(read);
            let Some(item) = self.slots[from].take() else {
                continue;
            };
            if keep(&item) {
                let to = self.physical(write);
                self.slots[to] = Some(item);
                write += 1;
            }
        }

        self.len = write;
        if self.len == 0 {
            self.head = 0;
        }
        original_len - write
    }

    /// Drop every record; returns how many there were
    pub fn clear(&mut self) -> usize {
        let removed = self.len;
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
        removed
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.len <= self.capacity());
        if self.capacity() == 0 {
            assert_eq!(self.head, 0);
            return;
        }
        assert!(self.head < self.capacity());
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.len);
        for i in 0..self.len {
            assert!(self.slots[self.physical(i)].is_some());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(ring: &RingBuffer<u32>) -> Vec<u32> {
        ring.iter().copied().collect()
    }

    #[test]
    fn ring_push_until_full() {
        let mut ring = RingBuffer::new(3);
        assert!(ring.is_empty());
        assert_eq!(ring.push(1), None);
        assert_eq!(ring.push(2), None);
        assert_eq!(ring.push(3), None);
        assert!(ring.is_full());
        assert_eq!(contents(&ring), vec![1, 2, 3]);
        ring.debug_validate_invariants();
    }

    #[test]
    fn ring_overwrites_oldest_when_full() {
        let mut ring = RingBuffer::new(3);
        for v in 1..=3 {
            ring.push(v);
        }
        assert_eq!(ring.push(4), Some(1));
        assert_eq!(ring.push(5), Some(2));
        assert_eq!(ring.len(), 3);
        assert_eq!(contents(&ring), vec![3, 4, 5]);
        ring.debug_validate_invariants();
    }

    #[test]
    fn ring_reverse_iteration() {
        let mut ring = RingBuffer::new(2);
        for v in 1..=5 {
            ring.push(v);
        }
        let newest_first: Vec<u32> = ring.iter().rev().copied().collect();
        assert_eq!(newest_first, vec![5, 4]);
    }

    #[test]
    fn ring_get_bounds() {
        let mut ring = RingBuffer::new(4);
        ring.push(10);
        ring.push(20);
        assert_eq!(ring.get(0), Some(&10));
        assert_eq!(ring.get(1), Some(&20));
        assert_eq!(ring.get(2), None);
    }

    #[test]
    fn ring_retain_removes_adjacent_matches() {
        let mut ring = RingBuffer::new(6);
        for v in [1, 2, 2, 3, 2, 2] {
            ring.push(v);
        }
        let removed = ring.retain(|v| *v != 2);
        assert_eq!(removed, 4);
        assert_eq!(contents(&ring), vec![1, 3]);
        ring.debug_validate_invariants();
    }

    #[test]
    fn ring_retain_across_wrap() {
        let mut ring = RingBuffer::new(4);
        for v in 1..=6 {
            ring.push(v);
        }
        // Live records wrap around the physical end: [5, 6, 3, 4]
        assert_eq!(contents(&ring), vec![3, 4, 5, 6]);

        let removed = ring.retain(|v| v % 2 == 0);
        assert_eq!(removed, 2);
        assert_eq!(contents(&ring), vec![4, 6]);
        ring.debug_validate_invariants();

        // Refill after compaction keeps FIFO order
        ring.push(7);
        ring.push(8);
        assert_eq!(ring.push(9), Some(4));
        assert_eq!(contents(&ring), vec![6, 7, 8, 9]);
        ring.debug_validate_invariants();
    }

    #[test]
    fn ring_retain_everything_removed() {
        let mut ring = RingBuffer::new(3);
        for v in 1..=5 {
            ring.push(v);
        }
        assert_eq!(ring.retain(|_| false), 3);
        assert!(ring.is_empty());
        ring.debug_validate_invariants();
        ring.push(9);
        assert_eq!(contents(&ring), vec![9]);
    }

    #[test]
    fn ring_retain_nothing_removed() {
        let mut ring = RingBuffer::new(3);
        ring.push(1);
        ring.push(2);
        assert_eq!(ring.retain(|_| true), 0);
        assert_eq!(contents(&ring), vec![1, 2]);
    }

    #[test]
    fn ring_clear() {
        let mut ring = RingBuffer::new(3);
        for v in 1..=4 {
            ring.push(v);
        }
        assert_eq!(ring.clear(), 3);
        assert!(ring.is_empty());
        ring.debug_validate_invariants();
    }

    #[test]
    fn ring_zero_capacity_rejects_everything() {
        let mut ring = RingBuffer::new(0);
        assert_eq!(ring.push(1), Some(1));
        assert!(ring.is_empty());
        ring.debug_validate_invariants();
    }
}
