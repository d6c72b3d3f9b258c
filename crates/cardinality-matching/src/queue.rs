/// A first-in first-out queue that is emptied between uses.
///
/// Popped elements stay in the buffer until [Queue::clear], so a queue that
/// receives at most `n` elements between two clears never reallocates after
/// `with_capacity(n)`.
pub(crate) struct Queue<T> {
    elements: Vec<T>,
    head: usize,
}

impl<T: Copy> Queue<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { elements: Vec::with_capacity(capacity), head: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len() - self.head
    }

    pub(crate) fn push_back(&mut self, element: T) {
        self.elements.push(element);
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let element = self.elements.get(self.head).copied()?;
        self.head += 1;
        Some(element)
    }

    pub(crate) fn clear(&mut self) {
        self.elements.clear();
        self.head = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::num::Wrapping;

    use crate::queue::Queue;

    #[test]
    fn fifo_order() {
        let mut q = Queue::with_capacity(0);
        for i in [2, 3, 5, 7] {
            q.push_back(i);
        }
        assert_eq!(q.len(), 4);
        assert_eq!(q.pop_front(), Some(2));
        q.push_back(11);
        assert_eq!(q.pop_front(), Some(3));
        assert_eq!(q.pop_front(), Some(5));
        assert_eq!(q.pop_front(), Some(7));
        assert_eq!(q.pop_front(), Some(11));
        assert_eq!(q.pop_front(), None);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn clear_empties() {
        let mut q = Queue::with_capacity(4);
        q.push_back(1);
        q.push_back(2);
        assert_eq!(q.pop_front(), Some(1));
        q.clear();
        assert_eq!(q.len(), 0);
        assert_eq!(q.pop_front(), None);
        q.push_back(3);
        assert_eq!(q.pop_front(), Some(3));
    }

    #[test]
    fn same_as_vec_deque_pseudorandom() {
        let mut q0 = Queue::with_capacity(0);
        let mut q1 = VecDeque::new();

        let mut seed = Wrapping(0_usize);
        let mut get_rand = || -> usize {
            seed ^= Wrapping(0x9e3779b9) + (seed << 6) + (seed >> 2);
            seed.0
        };

        let mut value = 0;
        for _ in 0..1000 {
            let n = get_rand() % 50;
            for _ in 0..n {
                q0.push_back(value);
                q1.push_back(value);
                value += 1;
            }
            let n = (get_rand() % 50).min(q0.len());
            for _ in 0..n {
                assert_eq!(q0.pop_front(), q1.pop_front());
            }
            assert_eq!(q0.len(), q1.len());
        }
        while let Some(x) = q1.pop_front() {
            assert_eq!(q0.pop_front(), Some(x));
        }
        assert_eq!(q0.pop_front(), None);
    }
}
