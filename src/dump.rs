use crate::PriorityQueue;
use core::fmt;

const DEFAULT_TITLE: &str = "Priority Queue";

/// Debug rendering of a queue, produced by [`PriorityQueue::dump`].
///
/// The queue knows nothing about its payloads, so the caller supplies a
/// renderer that turns a payload into something displayable.
///
/// # Examples
///
/// ```
/// use prioqueue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.insert("/voice/1.mp3", 3).unwrap();
/// queue.insert("/voice/2.mp3", 1).unwrap();
///
/// let text = queue.dump(|path| format!("[Path: {}]", path)).title("Voice Queue").to_string();
/// assert_eq!(
///     text,
///     "=== Voice Queue ===\n\
///      Data: [Path: /voice/2.mp3] | Priority: 1\n\
///      Data: [Path: /voice/1.mp3] | Priority: 3\n\
///      ===================\n"
/// );
/// ```
pub struct Dump<'a, T, F> {
    queue: &'a PriorityQueue<T>,
    render: F,
    title: &'a str,
}

impl<'a, T, F, R> Dump<'a, T, F>
where
    F: Fn(&T) -> R,
    R: fmt::Display,
{
    pub(crate) fn new(queue: &'a PriorityQueue<T>, render: F) -> Self {
        Self {
            queue,
            render,
            title: DEFAULT_TITLE,
        }
    }

    /// Replaces the heading printed above the entries.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl<'a, T, F, R> fmt::Display for Dump<'a, T, F>
where
    F: Fn(&T) -> R,
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("=== {} ===", self.title);
        writeln!(f, "{}", header)?;

        for (payload, priority) in self.queue.iter() {
            writeln!(f, "Data: {} | Priority: {}", (self.render)(payload), priority)?;
        }

        writeln!(f, "{}", "=".repeat(header.len()))
    }
}

#[cfg(test)]
mod tests {
    use crate::PriorityQueue;

    #[test]
    fn empty_queue_renders_frame_only() {
        let queue: PriorityQueue<u8> = PriorityQueue::new();
        let text = queue.dump(|b| *b).to_string();
        assert_eq!(text, "=== Priority Queue ===\n======================\n");
    }

    #[test]
    fn ties_render_in_insertion_order() {
        let mut queue = PriorityQueue::new();
        queue.insert("first", 1).unwrap();
        queue.insert("second", 1).unwrap();
        let text = queue.dump(|s| s.to_uppercase()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Data: FIRST | Priority: 1");
        assert_eq!(lines[2], "Data: SECOND | Priority: 1");
    }
}
