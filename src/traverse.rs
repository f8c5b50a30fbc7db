//! Depth-first walks over a [`Tree`].
//!
//! Every walk follows child and parent links instead of recursing or keeping a stack, so it
//! uses constant memory no matter how deep the tree is.
//!
//! [`Tree::traverse`] visits the left subtree, then the right subtree, then the node itself.
//! Because larger keys are placed on the left, that order is neither ascending nor descending;
//! use [`Tree::traverse_in_order`] for entries sorted by the comparator.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.set(key, ()).unwrap();
//! }
//!
//! let mut seen = Vec::new();
//! tree.traverse(|key, _| {
//!     seen.push(*key);
//!     Ok::<_, ()>(())
//! })
//! .unwrap();
//! assert_eq!(seen, [9, 7, 8, 4, 1, 3, 5]);
//!
//! // A visitor error stops the walk and comes back unchanged.
//! let result = tree.traverse(|key, _| if *key == 8 { Err("found 8") } else { Ok(()) });
//! assert_eq!(result, Err("found 8"));
//! ```

use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};
use crate::tree::{leftmost, Node, Side, Tree};

impl<K, V, C> Tree<K, V, C> {
    /// Calls `visitor` on every entry: left subtree, right subtree, then the node. The first
    /// error returned by `visitor` stops the walk and is returned as is. An empty tree never
    /// calls `visitor` and returns `Ok(())`.
    pub fn traverse<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        walk(self.iter(), visitor)
    }

    /// The mirror image of [`traverse`][Self::traverse]: right subtree, left subtree, then the
    /// node.
    pub fn traverse_reverse<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        walk(PostOrder::new(self, Side::Right), visitor)
    }

    /// Calls `visitor` on every entry in comparator order: left subtree, the node, then the
    /// right subtree. With the default comparator this visits keys from largest to smallest.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1] {
    ///     tree.set(key, ()).unwrap();
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse_in_order(|key, _| {
    ///     seen.push(*key);
    ///     Ok::<_, ()>(())
    /// })
    /// .unwrap();
    /// assert_eq!(seen, [8, 5, 3, 1]);
    /// ```
    pub fn traverse_in_order<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        walk(self.iter_in_order(), visitor)
    }

    /// Iterates over the entries in the same order as [`traverse`][Self::traverse].
    pub fn iter(&self) -> PostOrder<'_, K, V> {
        PostOrder::new(self, Side::Left)
    }

    /// Iterates over the entries in the same order as
    /// [`traverse_in_order`][Self::traverse_in_order].
    pub fn iter_in_order(&self) -> InOrder<'_, K, V> {
        InOrder {
            nodes: &self.nodes,
            next: self.root.map(|root| leftmost(&self.nodes, root)),
            remaining: self.len(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a Tree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = PostOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn walk<'a, K: 'a, V: 'a, E, F>(
    mut entries: impl Iterator<Item = (&'a K, &'a V)>,
    mut visitor: F,
) -> Result<(), E>
where
    F: FnMut(&K, &V) -> Result<(), E>,
{
    let result = entries.try_for_each(|(key, value)| visitor(key, value));
    if result.is_err() {
        debug_log!("traversal aborted by visitor");
    }
    result
}

/// Post-order iterator over a [`Tree`]. Created by [`Tree::iter`].
pub struct PostOrder<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    next: Option<NodeId>,
    /// The child visited before its sibling.
    first: Side,
    remaining: usize,
}

impl<'a, K, V> PostOrder<'a, K, V> {
    fn new<C>(tree: &'a Tree<K, V, C>, first: Side) -> Self {
        Self {
            nodes: &tree.nodes,
            next: tree.root.map(|root| deepest_first(&tree.nodes, root, first)),
            first,
            remaining: tree.len(),
        }
    }
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (nodes, first) = (self.nodes, self.first);
        let id = self.next?;
        let node = &nodes[id];

        // Once a node is visited its whole subtree has been. Continue with the sibling subtree
        // if we came from the first child, otherwise with the parent itself.
        self.next = node.parent.map(|parent| {
            let parent_node = &nodes[parent];
            match parent_node.child(first.opposite()) {
                Some(second) if parent_node.child(first) == Some(id) => {
                    deepest_first(nodes, second, first)
                }
                _ => parent,
            }
        });
        self.remaining -= 1;

        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for PostOrder<'_, K, V> {}
impl<K, V> FusedIterator for PostOrder<'_, K, V> {}

/// In-order iterator over a [`Tree`]. Created by [`Tree::iter_in_order`].
pub struct InOrder<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let id = self.next?;
        let node = &nodes[id];

        self.next = match node.right {
            Some(right) => Some(leftmost(nodes, right)),
            None => {
                // Climb until we leave a left subtree; that parent comes next.
                let mut child = id;
                let mut parent = node.parent;
                while let Some(p) = parent {
                    if nodes[p].left == Some(child) {
                        break;
                    }
                    child = p;
                    parent = nodes[p].parent;
                }
                parent
            }
        };
        self.remaining -= 1;

        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for InOrder<'_, K, V> {}
impl<K, V> FusedIterator for InOrder<'_, K, V> {}

/// The first node a post-order walk of the subtree at `id` visits: keep descending, preferring
/// the `first` child, until reaching a leaf.
fn deepest_first<K, V>(nodes: &Arena<Node<K, V>>, mut id: NodeId, first: Side) -> NodeId {
    loop {
        let node = &nodes[id];
        match node.child(first).or(node.child(first.opposite())) {
            Some(child) => id = child,
            None => return id,
        }
    }
}
