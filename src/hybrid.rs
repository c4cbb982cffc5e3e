use std::fmt;

use crate::error::SequenceError;
use crate::sequence::{Sequence, Value, render_values};

#[derive(Clone, Copy, Debug)]
struct Node {
    value: Value,
    next: Option<usize>,
}

/// A singly linked list that also tracks its tail
///
/// Appending is O(1) through the tail link, but anything that needs the
/// predecessor of the tail (`pop_back`, removing the last element, the
/// reverse snapshot) has to walk from the head.
#[derive(Clone)]
pub struct HybridList {
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl HybridList {
    pub fn new() -> Self {
        HybridList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn head(&self) -> Option<Value> {
        self.head.map(|slot| self.nodes[slot].value)
    }

    pub fn tail(&self) -> Option<Value> {
        self.tail.map(|slot| self.nodes[slot].value)
    }

    pub fn prepend(&mut self, value: Value) {
        let new_node = self.alloc(Node {
            value,
            next: self.head,
        });
        if self.head.is_none() {
            self.tail = Some(new_node);
        }
        self.head = Some(new_node);
        self.length += 1;
    }

    pub fn append(&mut self, value: Value) {
        let new_node = self.alloc(Node { value, next: None });
        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(new_node),
            None => self.head = Some(new_node),
        }
        self.tail = Some(new_node);
        self.length += 1;
    }

    /// Inserts after the node at `index - 1`
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

        let Some(before) = self.slot_at(index - 1) else {
            return Err(self.out_of_range(index));
        };
        let new_node = self.alloc(Node {
            value,
            next: self.nodes[before].next,
        });
        self.nodes[before].next = Some(new_node);
        self.length += 1;
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Value, SequenceError> {
        if index >= self.length {
            return Err(self.out_of_range(index));
        }
        let before = match index {
            0 => None,
            _ => self.slot_at(index - 1),
        };
        let target = match before {
            Some(before) => self.nodes[before].next,
            None => self.head,
        };
        match target {
            Some(slot) => Ok(self.unlink(before, slot)),
            None => Err(self.out_of_range(index)),
        }
    }

    pub fn remove(&mut self, value: Value) -> bool {
        let mut before = None;
        let mut current = self.head;
        while let Some(slot) = current {
            if self.nodes[slot].value == value {
                self.unlink(before, slot);
                return true;
            }
            before = current;
            current = self.nodes[slot].next;
        }
        false
    }

    pub fn pop_front(&mut self) -> Option<Value> {
        let head = self.head?;
        Some(self.unlink(None, head))
    }

    /// O(n): walks to the node before the tail
    pub fn pop_back(&mut self) -> Option<Value> {
        let tail = self.tail?;
        let before = match self.length {
            1 => None,
            len => self.slot_at(len - 2),
        };
        Some(self.unlink(before, tail))
    }

    pub fn find(&self, value: Value) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.slot_at(index).map(|slot| self.nodes[slot].value)
    }

    /// Reverses the `next` links in place and swaps head with tail
    pub fn reverse(&mut self) {
        let mut before = None;
        let mut current = self.head;
        self.tail = self.head;

        while let Some(slot) = current {
            let next = self.nodes[slot].next;
            self.nodes[slot].next = before;
            before = current;
            current = next;
        }
        self.head = before;
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }

    /// There are no back links, so this collects forward and flips the result
    pub fn to_vec_rev(&self) -> Vec<Value> {
        let mut values = self.to_vec();
        values.reverse();
        values
    }

    pub fn render(&self) -> String {
        render_values(&self.to_vec())
    }

    pub fn render_rev(&self) -> String {
        render_values(&self.to_vec_rev())
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.length,
        }
    }

    /// Checks that the chain from head has exactly `len()` nodes and ends at the tail
    pub fn is_well_linked(&self) -> bool {
        if self.head.is_none() != (self.length == 0) || self.tail.is_none() != (self.length == 0)
        {
            return false;
        }

        let mut last = None;
        let mut current = self.head;
        let mut count = 0;
        while let Some(slot) = current {
            let Some(node) = self.nodes.get(slot) else {
                return false;
            };
            if count == self.length {
                return false;
            }
            last = current;
            current = node.next;
            count += 1;
        }
        count == self.length && last == self.tail
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

    /// `before` must be the predecessor of `slot`, or None when `slot` is the head
    fn unlink(&mut self, before: Option<usize>, slot: usize) -> Value {
        let Node { value, next } = self.nodes[slot];

        match before {
            Some(before) => self.nodes[before].next = next,
            None => self.head = next,
        }
        if next.is_none() {
            self.tail = before;
        }

        self.length -= 1;
        if self.length == 0 {
            self.clear();
        } else {
            self.free.push(slot);
        }
        value
    }

    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.length {
            return None;
        }
        std::iter::successors(self.head, |&slot| self.nodes[slot].next).nth(index)
    }

    fn out_of_range(&self, index: usize) -> SequenceError {
        SequenceError::OutOfRange {
            index,
            len: self.length,
        }
    }
}

impl Default for HybridList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for HybridList {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl Eq for HybridList {}

impl fmt::Debug for HybridList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for HybridList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<Value> for HybridList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = HybridList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Value> for HybridList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl Sequence for HybridList {
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

/// An iterator over the hybrid list that consumes the list
pub struct IntoIter(HybridList);

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for IntoIter {}

/// An iterator over the hybrid list that borrows the list
pub struct Iter<'a> {
    list: &'a HybridList,
    current: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl IntoIterator for HybridList {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a> IntoIterator for &'a HybridList {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
