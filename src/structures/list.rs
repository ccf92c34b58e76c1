//! Stack, queue, and singly linked list.
//!
//! Empty-structure removals are guarded no-ops returning `None`; the host
//! surfaces them as an underflow message rather than an error.

use std::collections::VecDeque;

/// LIFO stack of numeric values.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) {
        self.items.push(value);
    }

    /// Pop the top value; `None` on underflow.
    pub fn pop(&mut self) -> Option<i64> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<i64> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }
}

/// FIFO queue of numeric values.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: VecDeque<i64>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, value: i64) {
        self.items.push_back(value);
    }

    /// Remove the front value; `None` on underflow.
    pub fn dequeue(&mut self) -> Option<i64> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<i64> {
        self.items.front().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone)]
struct ListNode {
    id: usize,
    value: i64,
    next: Option<Box<ListNode>>,
}

/// Singly linked list whose nodes carry stable ids.
///
/// The id counter is owned by the instance and incremented on every insert;
/// ids are never reused and never shared across lists.
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
    next_id: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert at the head, returning the new node's id.
    pub fn push_front(&mut self, value: i64) -> usize {
        let id = self.fresh_id();
        self.head = Some(Box::new(ListNode {
            id,
            value,
            next: self.head.take(),
        }));
        self.len += 1;
        id
    }

    /// Insert at the tail, returning the new node's id.
    pub fn push_back(&mut self, value: i64) -> usize {
        let id = self.fresh_id();
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(ListNode {
            id,
            value,
            next: None,
        }));
        self.len += 1;
        id
    }

    /// Remove the first node holding `value`; `None` if absent.
    pub fn remove(&mut self, value: i64) -> Option<usize> {
        let mut slot = &mut self.head;
        loop {
            match slot {
                None => return None,
                Some(node) if node.value == value => {
                    let id = node.id;
                    *slot = node.next.take();
                    self.len -= 1;
                    return Some(id);
                }
                Some(node) => slot = &mut node.next,
            }
        }
    }

    /// Values front to back.
    pub fn values(&self) -> Vec<i64> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// `(id, value)` pairs front to back.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        std::iter::successors(self.head.as_deref(), |n| n.next.as_deref())
            .map(|n| (n.id, n.value))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_and_queue_underflow_are_none() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), None);
        stack.push(1);
        assert_eq!(stack.pop(), Some(1));

        let mut queue = Queue::new();
        assert_eq!(queue.dequeue(), None);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
    }

    #[test]
    fn list_ids_are_per_instance_and_never_reused() {
        let mut a = LinkedList::new();
        let mut b = LinkedList::new();
        let first = a.push_back(10);
        let second = a.push_front(20);
        assert_eq!((first, second), (0, 1));
        // A fresh list starts its own counter.
        assert_eq!(b.push_back(10), 0);

        a.remove(10);
        // Removed ids are not recycled.
        assert_eq!(a.push_back(30), 2);
        assert_eq!(a.values(), vec![20, 30]);
    }
}
