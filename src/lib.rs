//! Linked sequences of numeric values backed by slot arenas.
//!
//! [`DoublyLinkedList`] keeps `prev` and `next` links and supports O(1)
//! work at both ends plus in-place reversal. [`HybridList`] is singly
//! linked but tracks its tail for O(1) appends. Both implement
//! [`Sequence`].
//!
//! ```
//! use linkseq::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.prepend(0);
//! assert_eq!(list.render(), "0 <-> 1 <-> 2 -> null");
//!
//! list.reverse();
//! assert_eq!(list.to_vec(), vec![2, 1, 0]);
//! ```

pub mod error;
pub mod hybrid;
pub mod list;
pub mod sequence;

pub use error::SequenceError;
pub use hybrid::HybridList;
pub use list::DoublyLinkedList;
pub use sequence::{Sequence, Value};
