use prioqueue::{PriorityQueue, QueueError};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

struct Tracked {
    id: u32,
    drops: Rc<Cell<u32>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn insert_once() {
    let mut queue = PriorityQueue::with_capacity(256);
    queue.insert(6i32, 3).unwrap();
}

#[test]
fn insert_many() {
    const ITER: i64 = 64 * 1024;
    let mut queue = PriorityQueue::with_capacity(ITER as usize);

    for i in 0..ITER {
        queue.insert(i, ITER - i).unwrap();
    }

    assert_eq!(queue.len(), ITER as usize);
    assert_eq!(queue.pop_minimum(), Ok((ITER - 1, 1)));
}

#[test]
fn pop_transfers_ownership() {
    let drops = Rc::new(Cell::new(0));
    let mut queue = PriorityQueue::new();
    queue
        .insert(Tracked { id: 1, drops: drops.clone() }, 1)
        .unwrap();

    let (payload, priority) = queue.pop_minimum().unwrap();
    assert_eq!(priority, 1);
    assert_eq!(drops.get(), 0);
    assert_eq!(payload.id, 1);

    drop(payload);
    assert_eq!(drops.get(), 1);
}

#[test]
fn teardown_hands_back_every_payload_once() {
    let drops = Rc::new(Cell::new(0));
    let mut queue = PriorityQueue::new();
    for (id, priority) in [(1, 3), (2, 1), (3, 2), (4, 1)] {
        queue
            .insert(Tracked { id, drops: drops.clone() }, priority)
            .unwrap();
    }

    let remnant = queue.delete();
    assert_eq!(drops.get(), 0);

    let kept = remnant.into_payloads();
    assert_eq!(drops.get(), 0);
    assert_eq!(kept.iter().map(|t| t.id).collect::<Vec<_>>(), [2, 4, 3, 1]);

    drop(kept);
    assert_eq!(drops.get(), 4);
}

#[test]
fn teardown_of_empty_queue() {
    let queue: PriorityQueue<String> = PriorityQueue::new();
    assert!(queue.delete().is_empty());
}

#[test]
fn failed_operations_leave_queue_unchanged() {
    let mut queue = PriorityQueue::new();
    queue.insert("a", 1).unwrap();
    queue.insert("b", 0).unwrap();

    let before: Vec<_> = queue.iter().map(|(payload, priority)| (*payload, priority)).collect();
    assert_eq!(queue.insert_opt(None, -1), Err(QueueError::InvalidArgument));
    let after: Vec<_> = queue.iter().map(|(payload, priority)| (*payload, priority)).collect();
    assert_eq!(before, after);
}

#[test]
fn pop_order_matches_enumeration() {
    let queue_input = [(10, 4), (11, 2), (12, 4), (13, -3), (14, 2), (15, 0)];
    let mut queue: PriorityQueue<i32> = queue_input.into_iter().collect();

    let mut listed = Vec::new();
    queue.enumerate(|priority, payload| listed.push((*payload, priority)));

    let mut popped = Vec::new();
    while let Ok(entry) = queue.pop_minimum() {
        popped.push(entry);
    }

    assert_eq!(popped, listed);
    assert_eq!(
        popped,
        [(13, -3), (15, 0), (11, 2), (14, 2), (10, 4), (12, 4)]
    );
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn insertions_are_logged() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut queue = PriorityQueue::new();
        queue.insert("beep", 7).unwrap();
        let _ = queue.pop_minimum();
        let _ = queue.pop_minimum();
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("inserted entry"));
    assert!(output.contains("priority=7"));
    assert!(output.contains("pop on empty queue"));
}
