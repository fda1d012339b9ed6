//! Key-order helpers over owned links.
//!
//! Nothing here mutates or rebalances; see [`crate::avl::util`] for that.

pub mod print;
pub mod traverse;

use std::cmp::Ordering;

use crate::types::{AvlNode, Link};

pub use print::print;
pub use traverse::{in_order, level_order, post_order, pre_order};

/// Cached height of a link, -1 for an empty subtree.
#[inline]
pub fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(-1, |n| n.height)
}

/// Leftmost (minimum) node under `root`.
pub fn first<K>(root: Option<&AvlNode<K>>) -> Option<&AvlNode<K>> {
    let mut curr = root?;
    while let Some(l) = curr.l.as_deref() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost (maximum) node under `root`.
pub fn last<K>(root: Option<&AvlNode<K>>) -> Option<&AvlNode<K>> {
    let mut curr = root?;
    while let Some(r) = curr.r.as_deref() {
        curr = r;
    }
    Some(curr)
}

/// Number of nodes under `root`.
pub fn size<K>(root: Option<&AvlNode<K>>) -> usize {
    root.map_or(0, |n| 1 + size(n.left()) + size(n.right()))
}

/// Finds a node by key.
pub fn find<'a, K, C>(
    root: Option<&'a AvlNode<K>>,
    key: &K,
    comparator: &C,
) -> Option<&'a AvlNode<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(n) = curr {
        curr = match comparator(key, &n.value) {
            Ordering::Equal => return Some(n),
            Ordering::Less => n.left(),
            Ordering::Greater => n.right(),
        };
    }
    None
}
