//! This crate exposes an ordered map stored as an unbalanced Binary Search Tree (BST) whose
//! nodes keep a back-reference to their parent.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. Each `Node` stores a key, the value
//! associated with that key, up to two child `Node`s and a link to its parent.
//!
//! Placement is driven by a [`Comparator`]. Starting at the root, the tree evaluates
//! `comparator.compare(current_key, new_key)`:
//!
//! 1. When the result is [`Less`][std::cmp::Ordering::Less] the new key goes into the
//!    left subtree.
//! 2. When the result is [`Greater`][std::cmp::Ordering::Greater] the new key goes into the
//!    right subtree.
//! 3. When the keys compare equal the stored value is overwritten in place.
//!
//! > Note that this is the mirror image of the textbook rule: with the
//! > [`DefaultComparator`] larger keys end up on the left.
//!
//! The tree never rebalances itself, so inserting keys in sorted order degenerates it into a
//! linked list. None of the operations recurse, so even a degenerate tree can't overflow the
//! stack.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! tree.set(1, "one").unwrap();
//! tree.set(2, "two").unwrap();
//! assert_eq!(tree.get(&1), Some(&"one"));
//! assert_eq!(tree.len(), 2);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Some("one"));
//! assert_eq!(tree.get(&1), None);
//! assert_eq!(tree.len(), 1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[macro_use]
mod tracing_helpers;

mod arena;
pub mod compare;
mod error;
pub mod traverse;
pub mod tree;

#[cfg(test)]
mod test;

pub use compare::{Comparator, DefaultComparator};
pub use error::{Error, Result};
pub use tree::Tree;
