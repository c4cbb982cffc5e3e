use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::error::SequenceError;
use crate::sequence::{Sequence, Value, render_values};

/// A node in the doubly linked list
/// Links are slot indices into the owning list's arena.
#[derive(Clone, Copy, Debug)]
struct Node {
    value: Value,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Node {
    fn new(value: Value, prev: Option<usize>, next: Option<usize>) -> Self {
        Node { value, prev, next }
    }
}

/// A doubly linked list whose nodes live in a slot arena
///
/// Unlinked slots go on a free list and are reused by later insertions,
/// so no node is ever reachable once it has been removed.
#[derive(Clone)]
pub struct DoublyLinkedList {
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl DoublyLinkedList {
    /// Creates a new empty doubly linked list
    pub fn new() -> Self {
        DoublyLinkedList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        DoublyLinkedList {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the length of the list
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the first value, or None if the list is empty
    pub fn head(&self) -> Option<Value> {
        self.head.map(|slot| self.nodes[slot].value)
    }

    /// Returns the last value, or None if the list is empty
    pub fn tail(&self) -> Option<Value> {
        self.tail.map(|slot| self.nodes[slot].value)
    }

    /// Adds an element to the front of the list
    pub fn prepend(&mut self, value: Value) {
        let new_node = self.alloc(Node::new(value, None, self.head));

        match self.head {
            Some(old_head) => self.nodes[old_head].prev = Some(new_node),
            // Empty list
            None => self.tail = Some(new_node),
        }
        self.head = Some(new_node);
        self.length += 1;
    }

    /// Adds an element to the back of the list
    pub fn append(&mut self, value: Value) {
        let new_node = self.alloc(Node::new(value, self.tail, None));

        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(new_node),
            // Empty list
            None => self.head = Some(new_node),
        }
        self.tail = Some(new_node);
        self.length += 1;
    }

    /// Inserts an element so that it occupies position `index`
    /// `index == len()` appends; anything larger is rejected untouched.
    pub fn insert_at(&mut self, value: Value, index: usize) -> Result<(), SequenceError> {
        if index > self.length {
            return Err(self.out_of_range(index));
        }
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }
        if index == self.length {
            self.append(value);
            return Ok(());
        }

        let Some(at) = self.slot_at(index) else {
            return Err(self.out_of_range(index));
        };
        let before = self.nodes[at].prev;
        let new_node = self.alloc(Node::new(value, before, Some(at)));
        if let Some(before) = before {
            self.nodes[before].next = Some(new_node);
        }
        self.nodes[at].prev = Some(new_node);
        self.length += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Value, SequenceError> {
        match self.slot_at(index) {
            Some(slot) => Ok(self.unlink(slot)),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Removes the first element equal to `value`
    /// Returns true if a match was found
    pub fn remove(&mut self, value: Value) -> bool {
        let found = self.slots().find(|&slot| self.nodes[slot].value == value);
        match found {
            Some(slot) => {
                self.unlink(slot);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element from the front of the list
    pub fn pop_front(&mut self) -> Option<Value> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Removes and returns the element from the back of the list
    pub fn pop_back(&mut self) -> Option<Value> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Returns the position of the first element equal to `value`
    pub fn find(&self, value: Value) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Returns the element at `index`
    pub fn get(&self, index: usize) -> Option<Value> {
        self.slot_at(index).map(|slot| self.nodes[slot].value)
    }

    /// Reverses the list in place by swapping every node's links
    pub fn reverse(&mut self) {
        let mut current = self.head;
        mem::swap(&mut self.head, &mut self.tail);

        while let Some(slot) = current {
            let node = &mut self.nodes[slot];
            let next = node.next;
            mem::swap(&mut node.prev, &mut node.next);
            current = next;
        }
    }

    /// Removes every element and releases the arena
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Returns the values from head to tail
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }

    /// Returns the values from tail to head, walking the `prev` links
    pub fn to_vec_rev(&self) -> Vec<Value> {
        self.iter().rev().collect()
    }

    /// Renders the list head to tail, e.g. `0 <-> 1 <-> 2 -> null`
    pub fn render(&self) -> String {
        render_values(&self.to_vec())
    }

    /// Renders the list tail to head
    pub fn render_rev(&self) -> String {
        render_values(&self.to_vec_rev())
    }

    /// Returns an iterator over the values of the list
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    /// Checks the structural invariants by walking both directions:
    /// boundary links are empty, every `next` is mirrored by a `prev`,
    /// and both walks visit exactly `len()` nodes.
    pub fn is_well_linked(&self) -> bool {
        if self.head.is_none() != (self.length == 0) || self.tail.is_none() != (self.length == 0)
        {
            return false;
        }

        let mut prev = None;
        let mut current = self.head;
        let mut count = 0;
        while let Some(slot) = current {
            let Some(node) = self.nodes.get(slot) else {
                return false;
            };
            if count == self.length || node.prev != prev {
                return false;
            }
            prev = current;
            current = node.next;
            count += 1;
        }
        if count != self.length || prev != self.tail {
            return false;
        }

        let mut next = None;
        let mut current = self.tail;
        let mut count = 0;
        while let Some(slot) = current {
            let node = &self.nodes[slot];
            if count == self.length || node.next != next {
                return false;
            }
            next = current;
            current = node.prev;
            count += 1;
        }
        count == self.length && next == self.head
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Splices the node out of the chain and frees its slot
    fn unlink(&mut self, slot: usize) -> Value {
        let Node { value, prev, next } = self.nodes[slot];

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            // Removing head
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            // Removing tail
            None => self.tail = prev,
        }

        self.length -= 1;
        if self.length == 0 {
            self.clear();
        } else {
            self.free.push(slot);
        }
        value
    }

    /// Walks from whichever end is closer to `index`
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.length {
            return None;
        }
        if index <= self.length / 2 {
            self.slots().nth(index)
        } else {
            let mut current = self.tail;
            for _ in 0..(self.length - 1 - index) {
                current = current.and_then(|slot| self.nodes[slot].prev);
            }
            current
        }
    }

    fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, |&slot| self.nodes[slot].next)
    }

    fn out_of_range(&self, index: usize) -> SequenceError {
        SequenceError::OutOfRange {
            index,
            len: self.length,
        }
    }
}

impl Default for DoublyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DoublyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl Eq for DoublyLinkedList {}

impl fmt::Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<Value> for DoublyLinkedList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Value> for DoublyLinkedList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl Sequence for DoublyLinkedList {
    fn prepend(&mut self, value: Value) {
        self.prepend(value)
    }

    fn append(&mut self, value: Value) {
        self.append(value)
    }

    fn insert_at(&mut self, value: Value, index: usize) -> Result<(), SequenceError> {
        self.insert_at(value, index)
    }

    fn remove_at(&mut self, index: usize) -> Result<Value, SequenceError> {
        self.remove_at(index)
    }

    fn remove(&mut self, value: Value) -> bool {
        self.remove(value)
    }

    fn find(&self, value: Value) -> Option<usize> {
        self.find(value)
    }

    fn get(&self, index: usize) -> Option<Value> {
        self.get(index)
    }

    fn reverse(&mut self) {
        self.reverse()
    }

    fn len(&self) -> usize {
        self.length
    }

    fn head(&self) -> Option<Value> {
        self.head()
    }

    fn tail(&self) -> Option<Value> {
        self.tail()
    }

    fn to_vec(&self) -> Vec<Value> {
        self.to_vec()
    }

    fn to_vec_rev(&self) -> Vec<Value> {
        self.to_vec_rev()
    }

    fn is_well_linked(&self) -> bool {
        self.is_well_linked()
    }
}

/// An iterator over the doubly linked list that consumes the list
pub struct IntoIter(DoublyLinkedList);

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back()
    }
}

impl ExactSizeIterator for IntoIter {}

/// An iterator over the doubly linked list that borrows the list
/// Iterating from the back follows the `prev` links.
pub struct Iter<'a> {
    list: &'a DoublyLinkedList,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(node.value)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl IntoIterator for DoublyLinkedList {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a> IntoIterator for &'a DoublyLinkedList {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
