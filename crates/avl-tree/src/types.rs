//! Node definitions.
//!
//! Every node exclusively owns its children through a [`Link`]. There are no
//! parent pointers: operations descend from the root and re-derive the cached
//! `height` / `bf` on the way back up.

/// Owned child link. `None` is an empty subtree.
pub type Link<K> = Option<Box<AvlNode<K>>>;

/// One key in the tree.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub(crate) value: K,
    pub(crate) l: Link<K>,
    pub(crate) r: Link<K>,
    /// Height of the subtree rooted here. A leaf has height 0.
    pub(crate) height: i32,
    /// Balance factor, `height(left) - height(right)`, with -1 for a missing child.
    pub(crate) bf: i32,
}

impl<K> AvlNode<K> {
    pub fn new(value: K) -> Self {
        Self {
            value,
            l: None,
            r: None,
            height: 0,
            bf: 0,
        }
    }

    pub fn value(&self) -> &K {
        &self.value
    }

    pub fn left(&self) -> Option<&AvlNode<K>> {
        self.l.as_deref()
    }

    pub fn right(&self) -> Option<&AvlNode<K>> {
        self.r.as_deref()
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bf(&self) -> i32 {
        self.bf
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}
