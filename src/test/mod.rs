
use std::cmp::Ordering;

use crate::arena::NodeId;
use crate::compare::Comparator;
use crate::tree::{Side, Tree};

/// Walks the whole tree and asserts that:
///
/// 1. every child points back at the node holding it, and the root has no parent,
/// 2. every key sits on the side of each ancestor that the comparator sends it to,
/// 3. `len` matches the number of reachable nodes.
pub(crate) fn assert_invariants<K, V, C: Comparator<K>>(tree: &Tree<K, V, C>) {
    let mut reachable = 0;
    // Each entry is a node, the parent it should report and the path of (ancestor, side taken).
    let mut stack: Vec<(NodeId, Option<NodeId>, Vec<(NodeId, Side)>)> = Vec::new();
    if let Some(root) = tree.root {
        stack.push((root, None, Vec::new()));
    }

    while let Some((id, expected_parent, path)) = stack.pop() {
        reachable += 1;
        let node = &tree.nodes[id];
        assert_eq!(node.parent, expected_parent, "broken parent link");

        for &(ancestor, side) in &path {
            let expected = match side {
                Side::Left => Ordering::Less,
                Side::Right => Ordering::Greater,
            };
            let ordering = tree
                .comparator()
                .compare(&tree.nodes[ancestor].key, &node.key);
            assert_eq!(ordering, expected, "key on the wrong side of an ancestor");
        }

        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                let mut child_path = path.clone();
                child_path.push((id, side));
                stack.push((child, Some(id), child_path));
            }
        }
    }

    assert_eq!(tree.len(), reachable, "len doesn't match reachable nodes");
}
