use core::mem;

use ::typesize::TypeSize;

use crate::{Entry, PriorityQueue};

impl<T: TypeSize> TypeSize for Entry<T> {
    fn extra_size(&self) -> usize {
        self.payload().extra_size()
    }
}

impl<T: TypeSize> TypeSize for PriorityQueue<T> {
    fn extra_size(&self) -> usize {
        let spare = self.capacity() - self.len();

        self.iter()
            .map(|(payload, _)| mem::size_of::<Entry<T>>() + payload.extra_size())
            .sum::<usize>()
            + spare * mem::size_of::<Entry<T>>()
    }
}

#[cfg(test)]
mod tests {
    use core::mem;

    use ::typesize::TypeSize;

    use crate::{Entry, PriorityQueue};

    #[test]
    fn counts_spare_capacity() {
        let queue: PriorityQueue<u32> = PriorityQueue::with_capacity(4);
        let expected = queue.capacity() * mem::size_of::<Entry<u32>>();
        assert_eq!(queue.extra_size(), expected);
    }

    #[test]
    fn includes_heap_payloads() {
        let mut queue = PriorityQueue::new();
        queue.insert(String::from("hello"), 1).unwrap();
        assert!(queue.extra_size() >= mem::size_of::<Entry<String>>() + 5);
    }
}
