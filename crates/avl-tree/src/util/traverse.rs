//! Read-only traversals.
//!
//! Each visitor yields keys in its order and never touches the output
//! channel; an empty tree yields nothing.

use std::collections::VecDeque;

use crate::types::AvlNode;

/// Left, node, right. Keys come out ascending.
pub fn in_order<K, F>(node: Option<&AvlNode<K>>, f: &mut F)
where
    F: FnMut(&K) + ?Sized,
{
    if let Some(n) = node {
        in_order(n.left(), f);
        f(&n.value);
        in_order(n.right(), f);
    }
}

/// Node, left, right.
pub fn pre_order<K, F>(node: Option<&AvlNode<K>>, f: &mut F)
where
    F: FnMut(&K) + ?Sized,
{
    if let Some(n) = node {
        f(&n.value);
        pre_order(n.left(), f);
        pre_order(n.right(), f);
    }
}

/// Left, right, node.
pub fn post_order<K, F>(node: Option<&AvlNode<K>>, f: &mut F)
where
    F: FnMut(&K) + ?Sized,
{
    if let Some(n) = node {
        post_order(n.left(), f);
        post_order(n.right(), f);
        f(&n.value);
    }
}

/// Breadth-first, FIFO queue seeded with `root`.
pub fn level_order<K, F>(root: Option<&AvlNode<K>>, f: &mut F)
where
    F: FnMut(&K) + ?Sized,
{
    let mut queue: VecDeque<&AvlNode<K>> = root.into_iter().collect();
    while let Some(n) = queue.pop_front() {
        f(&n.value);
        queue.extend(n.left());
        queue.extend(n.right());
    }
}
