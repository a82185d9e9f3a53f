use crate::entry::Entry;
use crate::Priority;
use core::iter::FusedIterator;
use std::collections::vec_deque;

/// Iterator over a PriorityQueue yielding payload references in pop order.
///
/// # Examples
///
/// ```
/// use prioqueue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.insert("later", 5).unwrap();
/// queue.insert("sooner", 1).unwrap();
/// let order: Vec<_> = queue.iter().collect();
/// assert_eq!(order, [(&"sooner", 1), (&"later", 5)]);
/// ```
pub struct Iter<'a, T> {
    inner: vec_deque::Iter<'a, Entry<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: vec_deque::Iter<'a, Entry<T>>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, Priority);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.payload(), e.priority()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (e.payload(), e.priority()))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator over a PriorityQueue, yielding payloads with their
/// priorities in pop order.
///
/// # Examples
///
/// ```
/// use prioqueue::PriorityQueue;
///
/// let queue: PriorityQueue<_> = vec![('b', 2), ('a', 1)].into_iter().collect();
/// let payloads: Vec<char> = queue.into_iter().map(|(payload, _)| payload).collect();
/// assert_eq!(payloads, ['a', 'b']);
/// ```
pub struct IntoIter<T> {
    inner: vec_deque::IntoIter<Entry<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: vec_deque::IntoIter<Entry<T>>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (T, Priority);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::into_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Entry::into_parts)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Draining iterator returned by [`PriorityQueue::drain`](crate::PriorityQueue::drain).
///
/// Every entry is removed from the queue, even the ones that are not consumed
/// before the iterator is dropped. Those are dropped along with it.
pub struct Drain<'a, T> {
    inner: vec_deque::Drain<'a, Entry<T>>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(inner: vec_deque::Drain<'a, Entry<T>>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = (T, Priority);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::into_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Entry::into_parts)
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> FusedIterator for Drain<'a, T> {}

/// The payloads still queued when a PriorityQueue was torn down.
///
/// Teardown only releases the queue's own bookkeeping. Whatever was still
/// enqueued is handed back here, in pop order, and it is up to the caller to
/// keep, reuse or drop it.
#[must_use = "teardown hands the remaining payloads back to the caller"]
pub struct Remnant<T> {
    inner: IntoIter<T>,
}

impl<T> Remnant<T> {
    pub(crate) fn new(inner: IntoIter<T>) -> Self {
        Self { inner }
    }

    /// A remnant holding nothing, produced by tearing down an absent handle.
    pub(crate) fn empty() -> Self {
        Self::new(IntoIter::new(std::collections::VecDeque::new().into_iter()))
    }

    /// Number of payloads handed back.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops the priorities and keeps the payloads, in pop order.
    pub fn into_payloads(self) -> Vec<T> {
        self.inner.map(|(payload, _)| payload).collect()
    }
}

impl<T> Iterator for Remnant<T> {
    type Item = (T, Priority);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Remnant<T> {}

impl<T> FusedIterator for Remnant<T> {}
