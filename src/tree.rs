//! The ordered map itself. Nodes keep a link to their parent so that deletion can splice a node
//! out by rewriting a single child slot.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.set(key, key.to_string()).unwrap();
//! }
//! assert_eq!(tree.len(), 7);
//!
//! // Inserting a new value for the same key overwrites the value.
//! assert_eq!(tree.set(1, "one".to_string()).unwrap(), Some("1".to_string()));
//! assert_eq!(tree.get(&1), Some(&"one".to_string()));
//! assert_eq!(tree.len(), 7);
//!
//! // 5 is the root and has two children.
//! assert_eq!(tree.delete(&5), Some("5".to_string()));
//! assert_eq!(tree.get(&5), None);
//! assert_eq!(tree.len(), 6);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::arena::{Arena, NodeId};
use crate::compare::{Comparator, DefaultComparator};
use crate::error::Result;

/// Which child slot of a node a link lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// Back-reference used only to splice this node out. Never owns anything.
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new(parent: Option<NodeId>, key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// The node reached by following `left` links from `id` until there are none.
pub(crate) fn leftmost<K, V>(nodes: &Arena<Node<K, V>>, mut id: NodeId) -> NodeId {
    while let Some(left) = nodes[id].left {
        id = left;
    }
    id
}

/// An ordered map stored as an unbalanced Binary Search Tree.
///
/// Keys are placed with `comparator.compare(stored, new)`: [`Less`][Ordering::Less] descends
/// left and [`Greater`][Ordering::Greater] descends right. Keys and values are never cloned, so
/// reference types can be stored when the caller wants to keep ownership.
///
/// Dropping the tree releases every node.
#[derive(Clone)]
pub struct Tree<K, V, C = DefaultComparator> {
    pub(crate) nodes: Arena<Node<K, V>>,
    pub(crate) root: Option<NodeId>,
    comparator: C,
}

impl<K: Ord, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> fmt::Debug for Tree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Tree<K, V> {
    /// Generates a new, empty `Tree` ordered by the keys' [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(DefaultComparator)
    }

    /// Generates a new, empty `Tree` with room for `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let tree = Tree::<u8, u8>::try_with_capacity(16).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// let too_big = Tree::<u64, u64>::try_with_capacity(usize::MAX);
    /// assert!(matches!(too_big, Err(Error::AllocationFailure(_))));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_and_comparator(capacity, DefaultComparator)
    }
}

impl<K, V, C> Tree<K, V, C> {
    /// Generates a new, empty `Tree` that orders its keys with `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Generates a new, empty `Tree` that orders its keys with `comparator` and has room for
    /// `capacity` nodes.
    pub fn try_with_capacity_and_comparator(capacity: usize, comparator: C) -> Result<Self> {
        Ok(Self {
            nodes: Arena::try_with_capacity(capacity)?,
            root: None,
            comparator,
        })
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every entry, dropping the keys and values.
    pub fn clear(&mut self) {
        debug_log!(len = self.len(), "clearing tree");
        self.root = None;
        self.nodes.clear();
    }
}

impl<K, V, C: Comparator<K>> Tree<K, V, C> {
    /// Inserts `value` at `key`. If a stored key compares equal to `key`, its value is replaced
    /// in place and the old value is returned; the stored key is kept and `key` is dropped.
    ///
    /// Fails only when memory for a new node can't be obtained, in which case the tree is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.set(1, 2).unwrap(), None);
    /// assert_eq!(tree.get(&1), Some(&2));
    ///
    /// assert_eq!(tree.set(1, 3).unwrap(), Some(2));
    /// assert_eq!(tree.get(&1), Some(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>> {
        let Some(mut current) = self.root else {
            // First entry, so it becomes the root.
            self.root = Some(self.nodes.try_alloc(Node::new(None, key, value))?);
            trace_log!("created root node");
            return Ok(None);
        };

        loop {
            let side = match self.comparator.compare(&self.nodes[current].key, &key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    trace_log!("overwrote value of existing node");
                    let old_value = std::mem::replace(&mut self.nodes[current].value, value);
                    return Ok(Some(old_value));
                }
            };

            match self.nodes[current].child(side) {
                Some(child) => current = child,
                None => {
                    let new = self.nodes.try_alloc(Node::new(Some(current), key, value))?;
                    *self.nodes[current].child_mut(side) = Some(new);
                    trace_log!(?side, len = self.len(), "created node");
                    return Ok(None);
                }
            }
        }
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.set(1, 2).unwrap();
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|id| &self.nodes[id].value)
    }

    /// Like [`get`][Self::get] but hands out a mutable reference to the value.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_node(key)?;
        Some(&mut self.nodes[id].value)
    }

    /// Whether some stored key compares equal to `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the
    /// tree does not contain a node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.set(1, 2).unwrap();
    ///
    /// assert_eq!(tree.delete(&1), Some(2));
    /// assert_eq!(tree.get(&1), None);
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V> {
        self.delete_entry(key).map(|(_, value)| value)
    }

    /// Like [`delete`][Self::delete] but also hands back the stored key.
    pub fn delete_entry(&mut self, key: &K) -> Option<(K, V)> {
        let target = self.find_node(key)?;

        let removed = match (self.nodes[target].left, self.nodes[target].right) {
            (Some(_), Some(right)) => {
                // Move the successor's contents into `target` and splice the successor out
                // instead. `target` keeps all of its links.
                let successor = leftmost(&self.nodes, right);
                let (target_node, successor_node) = self.nodes.pair_mut(target, successor);
                std::mem::swap(&mut target_node.key, &mut successor_node.key);
                std::mem::swap(&mut target_node.value, &mut successor_node.value);

                // The successor has no left child by construction.
                let replacement = self.nodes[successor].right;
                self.replace_in_parent(successor, replacement);
                debug_log!("deleted node with two children");
                successor
            }
            (Some(child), None) | (None, Some(child)) => {
                self.replace_in_parent(target, Some(child));
                debug_log!("deleted node with one child");
                target
            }
            (None, None) => {
                self.replace_in_parent(target, None);
                debug_log!("deleted leaf node");
                target
            }
        };

        let node = self.nodes.free(removed);
        Some((node.key, node.value))
    }

    fn find_node(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root?;
        loop {
            let node = &self.nodes[current];
            let next = match self.comparator.compare(&node.key, key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(current),
                Ordering::Greater => node.right,
            };
            current = next?;
        }
    }
}

impl<K, V, C> Tree<K, V, C> {
    /// Puts `replacement` wherever `node` hangs: its parent's child slot, or the root when
    /// `node` has no parent. `node`'s own links are left alone.
    fn replace_in_parent(&mut self, node: NodeId, replacement: Option<NodeId>) {
        let parent = self.nodes[node].parent;
        match parent {
            Some(parent) => {
                let parent_node = &mut self.nodes[parent];
                if parent_node.left == Some(node) {
                    parent_node.left = replacement;
                } else {
                    parent_node.right = replacement;
                }
            }
            None => self.root = replacement,
        }

        if let Some(replacement) = replacement {
            self.nodes[replacement].parent = parent;
        }

        if cfg!(debug_assertions) {
            if let Some(replacement) = replacement {
                match parent {
                    Some(parent) => {
                        let parent_node = &self.nodes[parent];
                        assert!(
                            parent_node.left == Some(replacement)
                                || parent_node.right == Some(replacement)
                        );
                    }
                    None => assert_eq!(self.root, Some(replacement)),
                }
            }
        }
    }
}
