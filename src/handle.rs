use crate::iter::Remnant;
use crate::{Priority, PriorityQueue, QueueError};

/// A handle that may or may not hold a queue.
///
/// `PriorityQueue::delete` consumes the queue, so the compiler already rejects
/// any use after teardown. `QueueHandle` is for queues kept in long-lived state
/// (a struct field, a registry) where teardown has to happen through a shared
/// owner. After [`delete`](QueueHandle::delete) the handle is absent and every
/// operation reports an error instead of touching freed state.
///
/// # Examples
///
/// ```
/// use prioqueue::{QueueError, QueueHandle};
///
/// let mut handle = QueueHandle::create();
/// handle.insert("beep", 2).unwrap();
///
/// let remnant = handle.delete();
/// assert_eq!(remnant.len(), 1);
///
/// assert_eq!(handle.insert("boop", 1), Err(QueueError::InvalidArgument));
/// assert_eq!(handle.pop_minimum(), Err(QueueError::EmptyQueue));
/// assert!(handle.delete().is_empty());
/// ```
pub struct QueueHandle<T> {
    queue: Option<PriorityQueue<T>>,
}

impl<T> QueueHandle<T> {
    /// Creates a handle holding a new, empty queue.
    pub fn create() -> Self {
        Self {
            queue: Some(PriorityQueue::new()),
        }
    }

    /// Creates a handle that holds no queue.
    pub fn absent() -> Self {
        Self { queue: None }
    }

    pub fn is_present(&self) -> bool {
        self.queue.is_some()
    }

    pub fn get(&self) -> Option<&PriorityQueue<T>> {
        self.queue.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut PriorityQueue<T>> {
        self.queue.as_mut()
    }

    /// Number of queued entries, zero when the handle is absent.
    pub fn len(&self) -> usize {
        self.queue.as_ref().map_or(0, PriorityQueue::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts into the held queue.
    ///
    /// Fails with [`QueueError::InvalidArgument`] when the handle is absent.
    pub fn insert(&mut self, payload: T, priority: Priority) -> Result<(), QueueError> {
        match self.queue.as_mut() {
            Some(queue) => queue.insert(payload, priority),
            None => {
                tracing::debug!(target: "prioqueue", priority, "insert on absent queue handle");
                Err(QueueError::InvalidArgument)
            }
        }
    }

    /// Pops from the held queue.
    ///
    /// Fails with [`QueueError::EmptyQueue`] when the handle is absent.
    pub fn pop_minimum(&mut self) -> Result<(T, Priority), QueueError> {
        match self.queue.as_mut() {
            Some(queue) => queue.pop_minimum(),
            None => {
                tracing::debug!(target: "prioqueue", "pop on absent queue handle");
                Err(QueueError::EmptyQueue)
            }
        }
    }

    /// Visits every entry of the held queue. An absent handle visits nothing.
    pub fn enumerate<F>(&self, visit: F)
    where
        F: FnMut(Priority, &T),
    {
        if let Some(queue) = self.queue.as_ref() {
            queue.enumerate(visit);
        }
    }

    /// Tears the held queue down and leaves the handle absent.
    ///
    /// Calling this on an absent handle does nothing and returns an empty
    /// remnant.
    pub fn delete(&mut self) -> Remnant<T> {
        match self.queue.take() {
            Some(queue) => queue.delete(),
            None => Remnant::empty(),
        }
    }
}

impl<T> Default for QueueHandle<T> {
    fn default() -> Self {
        Self::create()
    }
}

impl<T> From<PriorityQueue<T>> for QueueHandle<T> {
    fn from(queue: PriorityQueue<T>) -> Self {
        Self { queue: Some(queue) }
    }
}
