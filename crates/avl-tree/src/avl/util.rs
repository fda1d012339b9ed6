use std::cmp::Ordering;

use crate::error::InvariantError;
use crate::types::{AvlNode, Link};
use crate::util::{first, height, last};

/// Re-derives `height` and `bf` of `node` from its children's cached heights.
#[inline]
pub fn update_height<K>(node: &mut AvlNode<K>) {
    let lh = height(&node.l);
    let rh = height(&node.r);
    node.height = lh.max(rh) + 1;
    node.bf = lh - rh;
}

/// Right rotation at `n`: its left child becomes the subtree root.
///
/// `n` is re-measured before the new root, since the new root's height
/// depends on it. Returns `n` unchanged if it has no left child.
pub fn rotate_right<K>(mut n: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut l) = n.l.take() else {
        return n;
    };
    n.l = l.r.take();
    update_height(&mut n);
    l.r = Some(n);
    update_height(&mut l);
    log::trace!("rotate right, subtree height now {}", l.height);
    l
}

/// Left rotation at `n`: its right child becomes the subtree root.
pub fn rotate_left<K>(mut n: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut r) = n.r.take() else {
        return n;
    };
    n.r = r.l.take();
    update_height(&mut n);
    r.l = Some(n);
    update_height(&mut r);
    log::trace!("rotate left, subtree height now {}", r.height);
    r
}

/// Restores `|bf| <= 1` at `n`, assuming both children are already AVL trees
/// and `n`'s cached values are fresh. Returns the new subtree root.
pub fn rebalance<K>(mut n: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    if n.bf > 1 {
        if let Some(l) = n.l.take() {
            n.l = Some(if l.bf >= 0 {
                l
            } else {
                log::trace!("left-right case");
                rotate_left(l)
            });
            return rotate_right(n);
        }
    } else if n.bf < -1 {
        if let Some(r) = n.r.take() {
            n.r = Some(if r.bf <= 0 {
                r
            } else {
                log::trace!("right-left case");
                rotate_right(r)
            });
            return rotate_left(n);
        }
    }
    n
}

/// Inserts `key` as a new leaf under `link` and rebalances every node on the
/// way back up. An equal key already present leaves the subtree untouched.
pub fn insert<K, C>(link: Link<K>, key: K, comparator: &C) -> Box<AvlNode<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut n) = link else {
        return Box::new(AvlNode::new(key));
    };
    match comparator(&key, &n.value) {
        Ordering::Less => n.l = Some(insert(n.l.take(), key, comparator)),
        Ordering::Greater => n.r = Some(insert(n.r.take(), key, comparator)),
        Ordering::Equal => return n,
    }
    update_height(&mut n);
    rebalance(n)
}

/// Detaches the minimum of the subtree. Returns the remaining subtree and the key.
fn remove_first<K>(mut n: Box<AvlNode<K>>) -> (Link<K>, K) {
    match n.l.take() {
        None => (n.r.take(), n.value),
        Some(l) => {
            let (l, min) = remove_first(l);
            n.l = l;
            update_height(&mut n);
            (Some(rebalance(n)), min)
        }
    }
}

/// Detaches the maximum of the subtree.
fn remove_last<K>(mut n: Box<AvlNode<K>>) -> (Link<K>, K) {
    match n.r.take() {
        None => (n.l.take(), n.value),
        Some(r) => {
            let (r, max) = remove_last(r);
            n.r = r;
            update_height(&mut n);
            (Some(rebalance(n)), max)
        }
    }
}

/// Removes `key` from the subtree under `link`.
///
/// Returns the new subtree and the removed key, if it was present. A node
/// with two children takes its replacement from the taller side: the in-order
/// predecessor when the left subtree is taller, the successor otherwise.
pub fn remove<K, C>(link: Link<K>, key: &K, comparator: &C) -> (Link<K>, Option<K>)
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut n) = link else {
        return (None, None);
    };

    let removed = match comparator(key, &n.value) {
        Ordering::Less => {
            let (l, removed) = remove(n.l.take(), key, comparator);
            n.l = l;
            removed
        }
        Ordering::Greater => {
            let (r, removed) = remove(n.r.take(), key, comparator);
            n.r = r;
            removed
        }
        Ordering::Equal => match (n.l.take(), n.r.take()) {
            (None, None) => return (None, Some(n.value)),
            (Some(c), None) | (None, Some(c)) => return (Some(c), Some(n.value)),
            (Some(l), Some(r)) => {
                let replacement = if l.height > r.height {
                    let (l, max) = remove_last(l);
                    n.l = l;
                    n.r = Some(r);
                    max
                } else {
                    let (r, min) = remove_first(r);
                    n.l = Some(l);
                    n.r = r;
                    min
                };
                Some(std::mem::replace(&mut n.value, replacement))
            }
        },
    };

    if removed.is_none() {
        return (Some(n), None);
    }
    update_height(&mut n);
    (Some(rebalance(n)), removed)
}

/// Largest key strictly below `key`, provided `key` itself is present.
///
/// With a left subtree the answer is its maximum. Otherwise it is the last
/// ancestor where the descent from the root turned right.
pub fn predecessor<'a, K, C>(
    root: Option<&'a AvlNode<K>>,
    key: &K,
    comparator: &C,
) -> Option<&'a AvlNode<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut ancestor = None;
    let mut curr = root;
    while let Some(n) = curr {
        match comparator(key, &n.value) {
            Ordering::Greater => {
                ancestor = Some(n);
                curr = n.right();
            }
            Ordering::Less => curr = n.left(),
            Ordering::Equal => {
                return match n.left() {
                    Some(l) => last(Some(l)),
                    None => ancestor,
                };
            }
        }
    }
    None
}

/// Smallest key strictly above `key`, provided `key` itself is present.
pub fn successor<'a, K, C>(
    root: Option<&'a AvlNode<K>>,
    key: &K,
    comparator: &C,
) -> Option<&'a AvlNode<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut ancestor = None;
    let mut curr = root;
    while let Some(n) = curr {
        match comparator(key, &n.value) {
            Ordering::Less => {
                ancestor = Some(n);
                curr = n.left();
            }
            Ordering::Greater => curr = n.right(),
            Ordering::Equal => {
                return match n.right() {
                    Some(r) => first(Some(r)),
                    None => ancestor,
                };
            }
        }
    }
    None
}

fn validate_shape<K>(node: &AvlNode<K>) -> Result<i32, InvariantError> {
    let lh = match node.left() {
        Some(l) => validate_shape(l)?,
        None => -1,
    };
    let rh = match node.right() {
        Some(r) => validate_shape(r)?,
        None => -1,
    };

    let expected = lh.max(rh) + 1;
    if node.height != expected {
        return Err(InvariantError::StaleHeight {
            expected,
            actual: node.height,
        });
    }
    let expected_bf = lh - rh;
    if node.bf != expected_bf {
        return Err(InvariantError::StaleBalanceFactor {
            expected: expected_bf,
            actual: node.bf,
        });
    }
    if !(-1..=1).contains(&expected_bf) {
        return Err(InvariantError::Unbalanced { bf: expected_bf });
    }
    Ok(expected)
}

/// Checks ordering, balance and the cached `height` / `bf` of every node.
pub fn assert_avl_tree<K, C>(
    root: Option<&AvlNode<K>>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };
    validate_shape(root)?;

    let mut stack = Vec::new();
    let mut curr = Some(root);
    let mut prev: Option<&K> = None;
    let mut index = 0;
    loop {
        while let Some(n) = curr {
            stack.push(n);
            curr = n.left();
        }
        let Some(n) = stack.pop() else {
            break;
        };
        if let Some(p) = prev {
            if comparator(p, &n.value) != Ordering::Less {
                return Err(InvariantError::OrderViolated { index });
            }
        }
        prev = Some(&n.value);
        index += 1;
        curr = n.right();
    }
    Ok(())
}
