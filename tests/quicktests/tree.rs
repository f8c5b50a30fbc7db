use bstree::Tree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of sets
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, V>)
where
    K: Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.set(k.clone(), v.clone()).unwrap();
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                assert_eq!(bst.delete(k), map.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len() && map.keys().all(|key| tree.get(key) == map.get(key))
}

#[quickcheck]
fn set_then_get(xs: Vec<(i8, i16)>) -> bool {
    let mut tree = Tree::new();
    xs.iter().all(|(k, v)| {
        tree.set(*k, *v).unwrap();
        tree.get(k) == Some(v)
    })
}

#[quickcheck]
fn overwrite_keeps_len(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.set(*x, 0).unwrap();
    }
    let len = tree.len();
    for x in &xs {
        tree.set(*x, 1).unwrap();
    }

    let distinct: HashSet<_> = xs.iter().collect();
    tree.len() == len && len == distinct.len() && xs.iter().all(|x| tree.get(x) == Some(&1))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.set(*x, *x).unwrap();
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.get(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.set(*x, *x).unwrap();
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.get(x).is_none())
        && still_present.iter().all(|x| tree.get(x).is_some())
}

#[quickcheck]
fn traversal_visits_len_nodes(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();
    do_ops(&ops, &mut tree, &mut map);

    let mut visited = 0;
    let result = tree.traverse(|_, _| {
        visited += 1;
        Ok::<_, ()>(())
    });

    result.is_ok() && visited == tree.len() && tree.iter().count() == tree.len()
}

#[quickcheck]
fn in_order_is_descending(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();
    do_ops(&ops, &mut tree, &mut map);

    tree.iter_in_order().eq(map.iter().rev())
}

#[quickcheck]
fn deleting_keeps_other_values(xs: Vec<i8>, victim: i8) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.set(*x, x.to_string()).unwrap();
    }

    let expected = xs.contains(&victim).then(|| victim.to_string());
    tree.delete(&victim) == expected
        && tree.get(&victim).is_none()
        && xs
            .iter()
            .filter(|x| **x != victim)
            .all(|x| tree.get(x) == Some(&x.to_string()))
}
