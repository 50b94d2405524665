//! Queue: arena-backed singly-linked FIFO with predicate search/removal.

use slotmap::{DefaultKey, SlotMap};

/// One link in the chain. Owned by the queue's arena; freed exactly when
/// the node leaves the queue (pop, predicate removal, or drop of the whole
/// queue), never when the element it carries is merely looked at.
#[derive(Debug)]
struct Node<E> {
    element: E,
    next: Option<DefaultKey>,
}

/// An ordered, mutable sequence of opaque elements.
///
/// Elements go in at the rear and come out at the front in insertion
/// order, except where [`Queue::remove`] has excised one from the middle.
/// The queue stores elements verbatim and never constructs, clones, or
/// dereferences them; callers indexing shared data store handle types and
/// retain ownership of the referenced records.
///
/// Nodes live in a [`SlotMap`] arena with generational keys rather than
/// raw links, so chain surgery stays in safe code while append and
/// pop-front remain O(1).
#[derive(Debug)]
pub struct Queue<E> {
    nodes: SlotMap<DefaultKey, Node<E>>,
    front: Option<DefaultKey>,
    rear: Option<DefaultKey>,
    len: usize,
}

// Invariant: front.is_none() == rear.is_none() == (len == 0), and the
// chain from front along `next` reaches rear in exactly `len` steps.

impl<E> Queue<E> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            front: None,
            rear: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `element` as the new rear of the queue. O(1).
    pub fn put(&mut self, element: E) {
        let key = self.nodes.insert(Node {
            element,
            next: None,
        });
        match self.rear {
            Some(rear) => self.nodes[rear].next = Some(key),
            None => self.front = Some(key),
        }
        self.rear = Some(key);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if the queue is
    /// empty. O(1). `None` is the normal empty outcome, not an error.
    pub fn get(&mut self) -> Option<E> {
        let key = self.front?;
        let node = self.nodes.remove(key).expect("front handle is live");
        self.front = node.next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.len -= 1;
        Some(node.element)
    }

    /// Invokes `visitor` once per element, front to rear. Structural
    /// mutation during the walk is unrepresentable: the queue is shared
    /// for the duration of the call.
    pub fn apply<F>(&self, mut visitor: F)
    where
        F: FnMut(&E),
    {
        for element in self.iter() {
            visitor(element);
        }
    }

    /// Returns the first element, front to rear, for which `pred` holds,
    /// or `None` if no element matches. Non-mutating; O(n).
    ///
    /// The lookup key, if any, travels inside the predicate closure.
    pub fn search<P>(&self, mut pred: P) -> Option<&E>
    where
        P: FnMut(&E) -> bool,
    {
        let mut cursor = self.front;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if pred(&node.element) {
                return Some(&node.element);
            }
            cursor = node.next;
        }
        None
    }

    /// Scans exactly like [`Queue::search`], but unlinks the first match
    /// and returns it by value. `None` if no element matches. O(n).
    ///
    /// This is the only way to excise a non-front element.
    pub fn remove<P>(&mut self, mut pred: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.front;
        while let Some(key) = cursor {
            if pred(&self.nodes[key].element) {
                let node = self.nodes.remove(key).expect("cursor handle is live");
                match prev {
                    Some(p) => self.nodes[p].next = node.next,
                    None => self.front = node.next,
                }
                if node.next.is_none() {
                    self.rear = prev;
                }
                self.len -= 1;
                return Some(node.element);
            }
            prev = cursor;
            cursor = self.nodes[key].next;
        }
        None
    }

    /// Appends all of `other`'s elements after this queue's rear, in
    /// `other`'s existing order. `other` is consumed; the borrow checker
    /// makes use-after-concat a compile error.
    ///
    /// An empty receiver adopts `other`'s whole arena in O(1); otherwise
    /// nodes move one at a time (each queue owns its own arena, so the
    /// chains cannot be spliced across).
    pub fn concat(&mut self, mut other: Queue<E>) {
        if self.is_empty() {
            *self = other;
            return;
        }
        while let Some(element) = other.get() {
            self.put(element);
        }
    }

    /// Borrowing iterator over the elements, front to rear.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            nodes: &self.nodes,
            cursor: self.front,
        }
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a queue's elements in front-to-rear order.
pub struct Iter<'a, E> {
    nodes: &'a SlotMap<DefaultKey, Node<E>>,
    cursor: Option<DefaultKey>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = &self.nodes[key];
        self.cursor = node.next;
        Some(&node.element)
    }
}

impl<'a, E> IntoIterator for &'a Queue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<E>(q: &mut Queue<E>) -> Vec<E> {
        std::iter::from_fn(|| q.get()).collect()
    }

    /// Invariant: elements come out in the exact order they were put.
    #[test]
    fn fifo_order() {
        let mut q = Queue::new();
        for i in 0..5 {
            q.put(i);
        }
        assert_eq!(q.len(), 5);
        assert_eq!(drain(&mut q), vec![0, 1, 2, 3, 4]);
        assert!(q.is_empty());
    }

    /// Invariant: `get` on an empty queue reports "nothing found", not an
    /// error, and leaves the queue usable.
    #[test]
    fn get_on_empty_is_none() {
        let mut q: Queue<u32> = Queue::new();
        assert_eq!(q.get(), None);
        q.put(7);
        assert_eq!(q.get(), Some(7));
        assert_eq!(q.get(), None);
    }

    /// Invariant: `search` returns the first match front-to-rear without
    /// disturbing the queue.
    #[test]
    fn search_finds_first_match_and_does_not_mutate() {
        let mut q = Queue::new();
        for i in [10, 21, 32, 41] {
            q.put(i);
        }
        assert_eq!(q.search(|&e| e % 2 == 1), Some(&21));
        assert_eq!(q.search(|&e| e > 100), None);
        assert_eq!(q.len(), 4);
        assert_eq!(drain(&mut q), vec![10, 21, 32, 41]);
    }

    /// Invariant: removing a middle element fixes neighbor links and the
    /// count; the remaining order is preserved.
    #[test]
    fn remove_middle_element() {
        let mut q = Queue::new();
        for i in 0..5 {
            q.put(i);
        }
        assert_eq!(q.remove(|&e| e == 2), Some(2));
        assert_eq!(q.len(), 4);
        assert_eq!(q.search(|&e| e == 2), None);
        assert_eq!(drain(&mut q), vec![0, 1, 3, 4]);
    }

    /// Invariant: removing the front element behaves like `get` for the
    /// chain links; removing the rear re-targets `rear` so a subsequent
    /// `put` lands at the end.
    #[test]
    fn remove_front_and_rear_fix_endpoints() {
        let mut q = Queue::new();
        for i in 0..3 {
            q.put(i);
        }
        assert_eq!(q.remove(|&e| e == 0), Some(0));
        assert_eq!(q.remove(|&e| e == 2), Some(2));
        q.put(9);
        assert_eq!(drain(&mut q), vec![1, 9]);
    }

    /// Invariant: removing the only element leaves a fully empty queue
    /// that accepts new elements.
    #[test]
    fn remove_sole_element_empties_queue() {
        let mut q = Queue::new();
        q.put(1);
        assert_eq!(q.remove(|_| true), Some(1));
        assert!(q.is_empty());
        assert_eq!(q.get(), None);
        q.put(2);
        assert_eq!(q.get(), Some(2));
    }

    /// Invariant: `remove` with no matching element is a no-op.
    #[test]
    fn remove_without_match_is_noop() {
        let mut q = Queue::new();
        q.put(1);
        q.put(2);
        assert_eq!(q.remove(|&e| e == 9), None);
        assert_eq!(q.len(), 2);
        assert_eq!(drain(&mut q), vec![1, 2]);
    }

    /// Invariant: `apply` visits every element exactly once, front to
    /// rear.
    #[test]
    fn apply_visits_in_order() {
        let mut q = Queue::new();
        for i in 0..4 {
            q.put(i);
        }
        let mut seen = Vec::new();
        q.apply(|&e| seen.push(e));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    /// Invariant: concat yields q1's order followed by q2's order, the
    /// count is the sum, and q2 is consumed (moved).
    #[test]
    fn concat_preserves_both_orders() {
        let mut a = Queue::new();
        let mut b = Queue::new();
        for i in 0..3 {
            a.put(i);
        }
        for i in 10..13 {
            b.put(i);
        }
        a.concat(b);
        assert_eq!(a.len(), 6);
        assert_eq!(drain(&mut a), vec![0, 1, 2, 10, 11, 12]);
    }

    /// Invariant: an empty receiver adopts the other queue wholesale and
    /// keeps working afterwards.
    #[test]
    fn concat_into_empty_adopts_chain() {
        let mut a: Queue<i32> = Queue::new();
        let mut b = Queue::new();
        b.put(1);
        b.put(2);
        a.concat(b);
        assert_eq!(a.len(), 2);
        a.put(3);
        assert_eq!(drain(&mut a), vec![1, 2, 3]);
    }

    /// Invariant: concat with an empty other queue leaves the receiver
    /// unchanged.
    #[test]
    fn concat_with_empty_other_is_noop() {
        let mut a = Queue::new();
        a.put(1);
        a.concat(Queue::new());
        assert_eq!(a.len(), 1);
        assert_eq!(drain(&mut a), vec![1]);
    }

    /// Invariant: interleaved puts and gets keep FIFO order across the
    /// empty/non-empty boundary (rear reset when the queue drains).
    #[test]
    fn interleaved_put_get() {
        let mut q = Queue::new();
        q.put(1);
        q.put(2);
        assert_eq!(q.get(), Some(1));
        q.put(3);
        assert_eq!(q.get(), Some(2));
        assert_eq!(q.get(), Some(3));
        assert_eq!(q.get(), None);
        q.put(4);
        assert_eq!(q.get(), Some(4));
    }

    /// Invariant: the queue never touches referenced data; borrowed
    /// elements are stored and returned verbatim.
    #[test]
    fn stores_borrowed_handles_verbatim() {
        let records = ["alpha".to_string(), "beta".to_string()];
        let mut q: Queue<&String> = Queue::new();
        q.put(&records[0]);
        q.put(&records[1]);
        let found = q.search(|e| e.as_str() == "beta").expect("present");
        assert!(std::ptr::eq(*found, &records[1]));
        assert!(std::ptr::eq(q.get().expect("front"), &records[0]));
    }
}
