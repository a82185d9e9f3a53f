//! A stable priority queue for in-process scheduling.
//!
//! Entries are kept sorted by an integer priority, lowest first. Entries that
//! share a priority come out in the order they went in.
//!
//! ```
//! use prioqueue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("/voice/1.mp3", 3).unwrap();
//! queue.insert("/voice/2.mp3", 1).unwrap();
//! queue.insert("/voice/3.mp3", 2).unwrap();
//! queue.insert("/voice/4.mp3", 1).unwrap();
//!
//! assert_eq!(queue.pop_minimum(), Ok(("/voice/2.mp3", 1)));
//! assert_eq!(queue.pop_minimum(), Ok(("/voice/4.mp3", 1)));
//! assert_eq!(queue.pop_minimum(), Ok(("/voice/3.mp3", 2)));
//! assert_eq!(queue.pop_minimum(), Ok(("/voice/1.mp3", 3)));
//! ```
//!
//! Tearing a queue down consumes it, so it cannot be touched afterwards:
//!
//! ```compile_fail
//! use prioqueue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(1u8, 1).unwrap();
//! let _remnant = queue.delete();
//! queue.insert(2u8, 2).unwrap();
//! ```

mod dump;
mod entry;
mod error;
mod handle;
mod iter;

#[cfg(feature = "typesize")]
mod typesize;

pub use dump::Dump;
pub use entry::Entry;
pub use error::QueueError;
pub use handle::QueueHandle;
pub use iter::{Drain, IntoIter, Iter, Remnant};

use core::fmt;
use std::collections::VecDeque;

/// Ordering key of an entry. Lower values pop sooner.
pub type Priority = i64;

const LOG_TARGET: &str = "prioqueue";

/// A priority queue that keeps its entries sorted on insertion.
///
/// Insertion places the new entry after every entry whose priority is less
/// than or equal to its own, which keeps equal priorities in FIFO order.
/// Popping takes the head in constant time.
///
/// The queue owns its bookkeeping and moves payloads in and out of it: a
/// popped payload belongs to the caller, and [`delete`](PriorityQueue::delete)
/// hands every payload still queued back instead of dropping it. Use a
/// borrowed payload type such as `&V` to keep the payloads owned elsewhere.
pub struct PriorityQueue<T> {
    entries: VecDeque<Entry<T>>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Same as [`new`](PriorityQueue::new).
    pub fn create() -> Self {
        Self::new()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Inserts `payload` with the given priority.
    ///
    /// Fails with [`QueueError::OutOfMemory`] if room for the entry cannot be
    /// allocated, in which case the queue is unchanged.
    pub fn insert(&mut self, payload: T, priority: Priority) -> Result<(), QueueError> {
        if let Err(err) = self.entries.try_reserve(1) {
            tracing::warn!(
                target: LOG_TARGET,
                priority,
                error = %err,
                "failed to allocate queue entry"
            );
            return Err(QueueError::OutOfMemory);
        }

        let index = self.insertion_point(priority);
        self.entries.insert(index, Entry::new(payload, priority));

        tracing::debug!(
            target: LOG_TARGET,
            priority,
            index,
            len = self.entries.len(),
            "inserted entry"
        );
        Ok(())
    }

    /// Inserts a payload that may be absent.
    ///
    /// `None` is rejected with [`QueueError::InvalidArgument`] and leaves the
    /// queue unchanged.
    pub fn insert_opt(&mut self, payload: Option<T>, priority: Priority) -> Result<(), QueueError> {
        match payload {
            Some(payload) => self.insert(payload, priority),
            None => {
                tracing::debug!(target: LOG_TARGET, priority, "rejected absent payload");
                Err(QueueError::InvalidArgument)
            }
        }
    }

    /// Removes the entry with the lowest priority and hands its payload to the
    /// caller. Among equal priorities the earliest inserted one goes first.
    pub fn pop_minimum(&mut self) -> Result<(T, Priority), QueueError> {
        match self.entries.pop_front() {
            Some(entry) => {
                tracing::trace!(
                    target: LOG_TARGET,
                    priority = entry.priority(),
                    len = self.entries.len(),
                    "popped entry"
                );
                Ok(entry.into_parts())
            }
            None => {
                tracing::debug!(target: LOG_TARGET, "pop on empty queue");
                Err(QueueError::EmptyQueue)
            }
        }
    }

    /// Returns the entry [`pop_minimum`](PriorityQueue::pop_minimum) would
    /// remove next, without removing it.
    pub fn peek_minimum(&self) -> Option<(&T, Priority)> {
        self.entries.front().map(|e| (e.payload(), e.priority()))
    }

    /// Tears the queue down.
    ///
    /// Only the queue's own bookkeeping is released. Payloads still queued are
    /// returned in pop order so the caller decides what happens to them.
    pub fn delete(self) -> Remnant<T> {
        tracing::debug!(target: LOG_TARGET, remaining = self.entries.len(), "queue deleted");
        Remnant::new(IntoIter::new(self.entries.into_iter()))
    }

    /// Calls `visit` once per entry, from the head of the queue to the tail.
    pub fn enumerate<F>(&self, mut visit: F)
    where
        F: FnMut(Priority, &T),
    {
        for entry in &self.entries {
            visit(entry.priority(), entry.payload());
        }
    }

    /// Like [`enumerate`](PriorityQueue::enumerate), but stops at the first
    /// error returned by `visit` and passes it on.
    pub fn try_enumerate<F, E>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(Priority, &T) -> Result<(), E>,
    {
        for entry in &self.entries {
            visit(entry.priority(), entry.payload())?;
        }

        Ok(())
    }

    /// Renders the queue with a caller supplied payload renderer.
    pub fn dump<F, R>(&self, render: F) -> Dump<'_, T, F>
    where
        F: Fn(&T) -> R,
        R: fmt::Display,
    {
        Dump::new(self, render)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.entries.iter())
    }

    /// Removes every entry, yielding them in pop order. The allocation is
    /// kept for reuse.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self.entries.drain(..))
    }

    /// Drops every queued payload.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    // Index of the first entry with a strictly greater priority.
    fn insertion_point(&self, priority: Priority) -> usize {
        self.entries.partition_point(|e| e.priority() <= priority)
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.priority(), e.payload())))
            .finish()
    }
}

impl<T> Extend<(T, Priority)> for PriorityQueue<T> {
    /// Inserts every pair with the same rule as [`insert`](PriorityQueue::insert).
    ///
    /// # Panics
    ///
    /// Panics if an entry cannot be allocated, like the std collections do.
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);

        for (payload, priority) in iter {
            if self.insert(payload, priority).is_err() {
                panic!("{}", QueueError::OutOfMemory);
            }
        }
    }
}

impl<T> FromIterator<(T, Priority)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, Priority)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = (T, Priority);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = (&'a T, Priority);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
