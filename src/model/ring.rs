//! Circular doubly linked list stored in an index arena
//!
//! Nodes live in a `Vec` of slots and point at each other by slot index.
//! Removed slots go on a free list and are reused by later insertions, so
//! a [`NodeId`] stays valid exactly as long as its node is linked.

use std::collections::TryReserveError;

/// Stable handle to a node in a [`Ring`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: usize,
    prev: usize,
}

/// Circular doubly linked list with O(1) append and unlink
#[derive(Debug, Clone)]
pub struct Ring<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> Ring<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First node in traversal order
    pub fn head(&self) -> Option<NodeId> {
        self.head.map(NodeId)
    }

    /// Last node in traversal order (the head's predecessor)
    pub fn tail(&self) -> Option<NodeId> {
        self.head.map(|h| NodeId(self.node(h).prev))
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0)?.as_ref().map(|n| &n.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0)?.as_mut().map(|n| &mut n.value)
    }

    /// Successor of `id`, wrapping from tail to head
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0)?.as_ref().map(|n| NodeId(n.next))
    }

    /// Predecessor of `id`, wrapping from head to tail
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0)?.as_ref().map(|n| NodeId(n.prev))
    }

    /// Append `value` after the tail, returning its handle and a reference
    /// to the stored value.
    ///
    /// Storage is reserved before anything is linked, so on allocation
    /// failure the ring is left untouched.
    pub fn push_back(&mut self, value: T) -> Result<(NodeId, &mut T), TryReserveError> {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(None);
                self.slots.len() - 1
            }
        };

        let (next, prev) = match self.head {
            None => {
                self.head = Some(index);
                (index, index)
            }
            Some(head) => {
                let tail = self.node(head).prev;
                self.node_mut(tail).next = index;
                self.node_mut(head).prev = index;
                (head, tail)
            }
        };

        self.len += 1;
        let node = self.slots[index].insert(Node { value, next, prev });
        Ok((NodeId(index), &mut node.value))
    }

    /// Unlink `id` and hand back its value.
    ///
    /// If the head is removed its successor becomes the new head; removing
    /// the last node empties the ring.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;

        if self.len == 0 {
            self.head = None;
        } else {
            self.node_mut(node.prev).next = node.next;
            self.node_mut(node.next).prev = node.prev;
            if self.head == Some(id.0) {
                self.head = Some(node.next);
            }
        }

        Some(node.value)
    }

    /// Drop every node and release the arena
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    /// Nodes in successor order starting at the head
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// First node (from the head) whose value satisfies `pred`
    pub fn find<F>(&self, mut pred: F) -> Option<NodeId>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|(_, value)| pred(value)).map(|(id, _)| id)
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.slots[index]
            .as_ref()
            .unwrap_or_else(|| panic!("ring link points at free slot {}", index))
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index]
            .as_mut()
            .unwrap_or_else(|| panic!("ring link points at free slot {}", index))
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Head-first iterator over a [`Ring`]
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.cursor?;
        let ring = self.ring;
        let node = ring.node(index);
        self.cursor = Some(node.next);
        self.remaining -= 1;
        Some((NodeId(index), &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(values: &[&'static str]) -> (Ring<&'static str>, Vec<NodeId>) {
        let mut ring = Ring::new();
        let ids = values
            .iter()
            .map(|v| ring.push_back(*v).unwrap().0)
            .collect();
        (ring, ids)
    }

    fn values(ring: &Ring<&'static str>) -> Vec<&'static str> {
        ring.iter().map(|(_, v)| *v).collect()
    }

    /// Every node's neighbours point back at it and a full lap returns home
    fn assert_consistent<T>(ring: &Ring<T>) {
        let Some(head) = ring.head() else {
            assert_eq!(ring.len(), 0);
            return;
        };

        let mut id = head;
        for _ in 0..ring.len() {
            let next = ring.next(id).unwrap();
            assert_eq!(ring.prev(next), Some(id));
            id = next;
        }
        assert_eq!(id, head);

        let mut id = head;
        for _ in 0..ring.len() {
            id = ring.prev(id).unwrap();
        }
        assert_eq!(id, head);
    }

    #[test]
    fn test_empty_ring() {
        let ring: Ring<u32> = Ring::new();
        assert!(ring.is_empty());
        assert_eq!(ring.head(), None);
        assert_eq!(ring.tail(), None);
        assert_eq!(ring.iter().count(), 0);
    }

    #[test]
    fn test_single_node_links_to_itself() {
        let (ring, ids) = ring_of(&["a"]);
        assert_eq!(ring.next(ids[0]), Some(ids[0]));
        assert_eq!(ring.prev(ids[0]), Some(ids[0]));
        assert_eq!(ring.head(), ring.tail());
    }

    #[test]
    fn test_push_back_keeps_order_and_wraps() {
        let (ring, ids) = ring_of(&["a", "b", "c"]);
        assert_eq!(values(&ring), vec!["a", "b", "c"]);
        assert_eq!(ring.tail(), Some(ids[2]));
        assert_eq!(ring.next(ids[2]), Some(ids[0]));
        assert_eq!(ring.prev(ids[0]), Some(ids[2]));
        assert_consistent(&ring);
    }

    #[test]
    fn test_remove_middle_head_and_tail() {
        let (mut ring, ids) = ring_of(&["a", "b", "c", "d"]);

        assert_eq!(ring.remove(ids[1]), Some("b"));
        assert_eq!(values(&ring), vec!["a", "c", "d"]);
        assert_consistent(&ring);

        assert_eq!(ring.remove(ids[0]), Some("a"));
        assert_eq!(ring.head(), Some(ids[2]));
        assert_consistent(&ring);

        assert_eq!(ring.remove(ids[3]), Some("d"));
        assert_eq!(ring.tail(), Some(ids[2]));
        assert_consistent(&ring);

        assert_eq!(ring.remove(ids[2]), Some("c"));
        assert!(ring.is_empty());
        assert_eq!(ring.head(), None);
    }

    #[test]
    fn test_removed_id_is_dead() {
        let (mut ring, ids) = ring_of(&["a", "b"]);
        ring.remove(ids[0]);
        assert_eq!(ring.get(ids[0]), None);
        assert_eq!(ring.next(ids[0]), None);
        assert_eq!(ring.remove(ids[0]), None);
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_free_slots_are_reused() {
        let (mut ring, ids) = ring_of(&["a", "b", "c"]);
        ring.remove(ids[1]);
        let (d, _) = ring.push_back("d").unwrap();
        assert_eq!(d, ids[1]);
        assert_eq!(values(&ring), vec!["a", "c", "d"]);
        assert_consistent(&ring);
    }

    #[test]
    fn test_find_and_get_mut() {
        let (mut ring, ids) = ring_of(&["a", "b", "c"]);
        let found = ring.find(|v| *v == "c");
        assert_eq!(found, Some(ids[2]));
        assert_eq!(ring.find(|v| *v == "z"), None);

        *ring.get_mut(ids[2]).unwrap() = "C";
        assert_eq!(values(&ring), vec!["a", "b", "C"]);
    }

    #[test]
    fn test_clear() {
        let (mut ring, _) = ring_of(&["a", "b"]);
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.iter().count(), 0);
        ring.clear();

        let (_, value) = ring.push_back("c").unwrap();
        assert_eq!(*value, "c");
        assert_eq!(values(&ring), vec!["c"]);
        assert_consistent(&ring);
    }
}
