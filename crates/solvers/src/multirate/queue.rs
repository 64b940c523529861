use std::{cmp::Ordering, collections::BinaryHeap};

use super::Clock;

/// A min-queue of clocks keyed on their next firing time.
///
/// [`pop`](EventQueue::pop) always returns the clock with the smallest
/// `next_time`. Clocks with bit-identical times come out in ascending
/// [`Source`](super::Source) order: the global clock first, then layers by
/// index. Times are compared with [`f64::total_cmp`].
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Entry>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` clocks.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Adds a clock to the queue.
    pub fn push(&mut self, clock: Clock) {
        self.heap.push(Entry(clock));
    }

    /// Removes and returns the clock that fires next.
    pub fn pop(&mut self) -> Option<Clock> {
        self.heap.pop().map(|Entry(clock)| clock)
    }

    /// Returns the time of the next firing without removing it.
    #[must_use]
    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.0.next_time())
    }

    /// Returns the number of queued clocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no clocks are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Iterates over the queued clocks in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Clock> {
        self.heap.iter().map(|entry| &entry.0)
    }
}

impl FromIterator<Clock> for EventQueue {
    fn from_iter<T: IntoIterator<Item = Clock>>(iter: T) -> Self {
        Self {
            heap: iter.into_iter().map(Entry).collect(),
        }
    }
}

impl Extend<Clock> for EventQueue {
    fn extend<T: IntoIterator<Item = Clock>>(&mut self, iter: T) {
        self.heap.extend(iter.into_iter().map(Entry));
    }
}

/// Heap entry with reversed ordering so the std max-heap pops the minimum.
#[derive(Debug, Clone)]
struct Entry(Clock);

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .next_time()
            .total_cmp(&self.0.next_time())
            .then_with(|| other.0.source().cmp(&self.0.source()))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}
