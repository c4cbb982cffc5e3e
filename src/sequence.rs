use crate::error::SequenceError;

/// The scalar element type stored by every sequence in this crate
pub type Value = i64;

/// Trait defining the interface shared by the linked sequences
/// This allows callers to swap the doubly linked and the hybrid list
/// while keeping the same observable behaviour.
///
/// Positions are 0-based in front-to-back order.
pub trait Sequence {
    /// Inserts a value before the current first element
    fn prepend(&mut self, value: Value);

    /// Inserts a value after the current last element
    fn append(&mut self, value: Value);

    /// Inserts a value so that it ends up at `index`.
    /// `index == len()` appends. Larger indices are rejected without mutation.
    fn insert_at(&mut self, value: Value, index: usize) -> Result<(), SequenceError>;

    /// Removes and returns the value at `index`
    fn remove_at(&mut self, index: usize) -> Result<Value, SequenceError>;

    /// Removes the first element equal to `value`.
    /// Returns true if an element was removed.
    fn remove(&mut self, value: Value) -> bool;

    /// Returns the position of the first element equal to `value`
    fn find(&self, value: Value) -> Option<usize>;

    /// Returns the value at `index`
    fn get(&self, index: usize) -> Option<Value>;

    /// Reverses the sequence in place
    fn reverse(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn head(&self) -> Option<Value>;

    fn tail(&self) -> Option<Value>;

    /// Snapshot of the values from head to tail
    fn to_vec(&self) -> Vec<Value>;

    /// Snapshot of the values from tail to head
    fn to_vec_rev(&self) -> Vec<Value>;

    /// Walks the links and reports whether the structural invariants hold
    fn is_well_linked(&self) -> bool;

    /// Renders the values head to tail, e.g. `1 <-> 2 <-> 3 -> null`
    fn render(&self) -> String {
        render_values(&self.to_vec())
    }

    /// Renders the values tail to head
    fn render_rev(&self) -> String {
        render_values(&self.to_vec_rev())
    }
}

pub(crate) fn render_values(values: &[Value]) -> String {
    let joined = values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" <-> ");
    format!("{joined} -> null")
}
