use crate::Priority;

/// A single record held by the queue: a payload tagged with its priority.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Entry<T> {
    priority: Priority,
    payload: T,
}

impl<T> Entry<T> {
    pub(crate) fn new(payload: T, priority: Priority) -> Self {
        Self { priority, payload }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Moves the payload out, returning it with its priority.
    pub fn into_parts(self) -> (T, Priority) {
        (self.payload, self.priority)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Entry")
            .field(&self.priority)
            .field(&self.payload)
            .finish()
    }
}
