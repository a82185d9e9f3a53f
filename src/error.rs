use core::fmt;

/// The ways an operation on a [`PriorityQueue`](crate::PriorityQueue) can fail.
///
/// Every variant is local and deterministic: the queue is left exactly as it
/// was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// Storage for a new entry could not be allocated.
    OutOfMemory,
    /// The queue handle or the payload was absent.
    InvalidArgument,
    /// There is nothing to pop, either because the queue is empty or because
    /// the handle holds no queue.
    EmptyQueue,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::OutOfMemory => f.write_str("memory allocation failed for queue entry"),
            QueueError::InvalidArgument => f.write_str("absent queue handle or payload"),
            QueueError::EmptyQueue => f.write_str("queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

#[cfg(test)]
mod tests {
    use super::QueueError;

    #[test]
    fn display_messages() {
        assert_eq!(QueueError::EmptyQueue.to_string(), "queue is empty");
        assert_eq!(
            QueueError::InvalidArgument.to_string(),
            "absent queue handle or payload"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(QueueError::OutOfMemory);
        assert!(err.to_string().contains("allocation"));
    }
}
