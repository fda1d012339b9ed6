use std::cmp::Ordering;
use std::fmt;

use crate::error::InvariantError;
use crate::types::{AvlNode, Link};
use crate::util::{self, first, last, print};

use super::util::{assert_avl_tree, insert, predecessor, remove, successor};

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Self-balancing binary search tree over unique keys.
///
/// Every mutation descends from the root and re-derives the cached height and
/// balance factor of each node on the way back up, rotating wherever the
/// balance factor leaves `{-1, 0, 1}`.
///
/// Not synchronized: mutation takes `&mut self`, so sharing a tree across
/// threads for writing means wrapping the whole tree, e.g. in a `Mutex`.
pub struct AvlTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Link<K>,
    size: usize,
    comparator: C,
}

impl<K> AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
        }
    }

    /// Inserts `key`. Returns `false`, leaving the tree untouched, if an equal
    /// key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.find(&key) {
            log::debug!("insert: key already present, ignoring");
            return false;
        }
        self.root = Some(insert(self.root.take(), key, &self.comparator));
        self.size += 1;
        true
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and hands back the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let (root, removed) = remove(self.root.take(), key, &self.comparator);
        self.root = root;
        match removed {
            Some(_) => self.size -= 1,
            None => log::debug!("remove: key not present, ignoring"),
        }
        removed
    }

    pub fn find(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    pub fn find_node(&self, key: &K) -> Option<&AvlNode<K>> {
        util::find(self.root.as_deref(), key, &self.comparator)
    }

    /// Largest key strictly below `key`. `None` if `key` is absent or is the minimum.
    pub fn find_predecessor(&self, key: &K) -> Option<&K> {
        predecessor(self.root.as_deref(), key, &self.comparator).map(AvlNode::value)
    }

    /// Smallest key strictly above `key`. `None` if `key` is absent or is the maximum.
    pub fn find_successor(&self, key: &K) -> Option<&K> {
        successor(self.root.as_deref(), key, &self.comparator).map(AvlNode::value)
    }

    pub fn first(&self) -> Option<&K> {
        first(self.root.as_deref()).map(AvlNode::value)
    }

    pub fn last(&self) -> Option<&K> {
        last(self.root.as_deref()).map(AvlNode::value)
    }

    pub fn root(&self) -> Option<&AvlNode<K>> {
        self.root.as_deref()
    }

    /// Height of the root; a single node has height 0.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|n| n.height as usize)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    pub fn for_each_in_order<F: FnMut(&K)>(&self, mut f: F) {
        util::in_order(self.root.as_deref(), &mut f);
    }

    pub fn for_each_pre_order<F: FnMut(&K)>(&self, mut f: F) {
        util::pre_order(self.root.as_deref(), &mut f);
    }

    pub fn for_each_post_order<F: FnMut(&K)>(&self, mut f: F) {
        util::post_order(self.root.as_deref(), &mut f);
    }

    pub fn for_each_level_order<F: FnMut(&K)>(&self, mut f: F) {
        util::level_order(self.root.as_deref(), &mut f);
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_avl_tree(self.root.as_deref(), &self.comparator)
    }
}

impl<K, C> AvlTree<K, C>
where
    K: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.size);
        self.for_each_in_order(|k| out.push(k.clone()));
        out
    }

    pub fn pre_order(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.size);
        self.for_each_pre_order(|k| out.push(k.clone()));
        out
    }

    pub fn post_order(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.size);
        self.for_each_post_order(|k| out.push(k.clone()));
        out
    }

    /// Breadth-first, root first. Shows the shape the rotations produced.
    pub fn level_order(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.size);
        self.for_each_level_order(|k| out.push(k.clone()));
        out
    }
}

impl<K, C> Extend<K> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> fmt::Debug for AvlTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.for_each_in_order(|k| {
            set.entry(k);
        });
        set.finish()
    }
}

impl<K, C> fmt::Display for AvlTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AvlTree {}", print(self.root.as_deref(), ""))
    }
}
