// Copyright 2026-Present the topdocs authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::iter::FusedIterator;

/// A fixed-capacity, min-oriented binary heap.
///
/// The structural root is always the smallest element currently retained.
/// Once the heap is full, inserting a candidate replaces the root iff the
/// candidate is strictly greater than it; the heap therefore retains, at any
/// point, the `capacity` greatest elements seen so far.
///
/// A capacity of zero is tolerated at this layer: every candidate is handed
/// straight back. Callers that consider it a configuration error validate
/// before constructing.
#[derive(Clone, Debug)]
pub struct BoundedHeap<T> {
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedHeap<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedHeap {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether there are `capacity` elements retained already.
    pub fn at_capacity(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Inserts one candidate, returning the element that lost its spot.
    ///
    /// Below capacity the candidate is admitted unconditionally and `None` is
    /// returned. At capacity, the returned element is either the previous
    /// root (the candidate displaced it) or the candidate itself (it was not
    /// greater than the root).
    #[inline]
    pub fn insert(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        if !self.at_capacity() {
            self.heap.push(Reverse(item));
            return None;
        }
        let mut head = self.heap.peek_mut().unwrap();
        if head.0 < item {
            Some(std::mem::replace(&mut *head, Reverse(item)).0)
        } else {
            Some(item)
        }
    }

    /// A reference to the smallest retained element.
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.0)
    }

    /// Consumes the heap, yielding elements in ascending order.
    pub fn drain_sorted(self) -> DrainSorted<T> {
        DrainSorted { heap: self.heap }
    }
}

#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct DrainSorted<T> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Iterator for DrainSorted<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.0)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.heap.len();
        (exact, Some(exact))
    }
}

impl<T: Ord> ExactSizeIterator for DrainSorted<T> {}

impl<T: Ord> FusedIterator for DrainSorted<T> {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bounded_heap_below_capacity() {
        let mut heap = BoundedHeap::with_capacity(4);
        assert!(heap.insert(2u32).is_none());
        assert!(heap.insert(1).is_none());
        assert!(heap.insert(2).is_none());
        assert!(!heap.at_capacity());
        assert_eq!(heap.peek_min(), Some(&1));
        let drained: Vec<u32> = heap.drain_sorted().collect();
        assert_eq!(&drained, &[1, 2, 2]);
    }

    #[test]
    fn test_bounded_heap_eviction() {
        let mut heap = BoundedHeap::with_capacity(2);
        assert!(heap.insert(1u32).is_none());
        assert!(heap.insert(3).is_none());
        assert!(heap.at_capacity());
        // 2 displaces the root 1.
        assert_eq!(heap.insert(2), Some(1));
        // 2 is not strictly greater than the root 2: handed back.
        assert_eq!(heap.insert(2), Some(2));
        assert_eq!(heap.peek_min(), Some(&2));
        let drained: Vec<u32> = heap.drain_sorted().collect();
        assert_eq!(&drained, &[2, 3]);
    }

    #[test]
    fn test_bounded_heap_zero_capacity() {
        let mut heap = BoundedHeap::with_capacity(0);
        assert!(heap.at_capacity());
        assert_eq!(heap.insert(7u32), Some(7));
        assert!(heap.is_empty());
        assert_eq!(heap.drain_sorted().count(), 0);
    }

    #[test]
    fn test_drain_sorted_is_exact_size() {
        let mut heap = BoundedHeap::with_capacity(8);
        for value in [5u32, 3, 9, 1] {
            heap.insert(value);
        }
        let mut drain = heap.drain_sorted();
        assert_eq!(drain.len(), 4);
        assert_eq!(drain.next(), Some(1));
        assert_eq!(drain.len(), 3);
    }

    proptest! {
        #[test]
        fn proptest_retains_greatest_k(mut values in proptest::collection::vec(any::<u32>(), 0..100), k in 0usize..16) {
            let mut heap = BoundedHeap::with_capacity(k);
            for &value in &values {
                heap.insert(value);
            }
            prop_assert!(heap.len() <= k);
            let drained: Vec<u32> = heap.drain_sorted().collect();
            values.sort_unstable();
            let expected: Vec<u32> = values.iter().rev().take(k).rev().copied().collect();
            prop_assert_eq!(drained, expected);
        }
    }
}
