//! Total orders used to place and locate keys.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! // Order strings by length only. Keys of the same length collide.
//! let mut tree = Tree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//!
//! tree.set("one", 1).unwrap();
//! tree.set("two", 2).unwrap();
//!
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree.get(&"six"), Some(&2));
//! ```

use std::cmp::Ordering;

/// A total order over keys of type `K`. It must stay consistent for as long as the tree that
/// stores it is alive; the tree doesn't check this.
pub trait Comparator<K: ?Sized> {
    /// Compares the key already stored in the tree (`stored`) against the key being searched
    /// for or inserted (`probe`).
    fn compare(&self, stored: &K, probe: &K) -> Ordering;
}

impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, stored: &K, probe: &K) -> Ordering {
        self(stored, probe)
    }
}

/// The comparator used when none is supplied. Delegates to the key's [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultComparator;

impl<K: Ord + ?Sized> Comparator<K> for DefaultComparator {
    fn compare(&self, stored: &K, probe: &K) -> Ordering {
        stored.cmp(probe)
    }
}
