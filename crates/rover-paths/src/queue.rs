/// A single heap slot.
#[derive(Clone, Debug)]
struct Entry<T, P> {
    item: T,
    priority: P,
}

/// Minimum-priority queue backed by a binary heap in a dense `Vec`.
///
/// Every parent's priority is `<=` both of its children's. Items with equal
/// priority come out in whatever order the heap layout dictates; there is no
/// stability guarantee.
#[derive(Clone, Debug)]
pub struct MinQueue<T, P> {
    heap: Vec<Entry<T, P>>,
}

impl<T, P: Ord> Default for MinQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> MinQueue<T, P> {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Alias for [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Insert `item` with the given priority.
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Entry { item, priority });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return an item of minimum priority, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last.item);
        }
        let top = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Some(top.item)
    }

    /// The item that [`pop`](Self::pop) would return next, with its priority.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|e| (&e.item, &e.priority))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority <= self.heap[i].priority {
                break;
            }
            self.heap.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < n && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
