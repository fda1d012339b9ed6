//! Self-balancing AVL binary search tree.
//!
//! Each node exclusively owns its children (`Option<Box<AvlNode<K>>>`) and
//! caches its subtree `height` and balance factor `bf`. Insertion and removal
//! descend recursively from the root, then re-derive the cached values and
//! rotate on the way back up so that `bf ∈ {-1, 0, 1}` holds at every node
//! once the call returns.
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for k in [14, 17, 11, 7, 53, 4, 13] {
//!     tree.insert(k);
//! }
//! assert_eq!(tree.in_order(), vec![4, 7, 11, 13, 14, 17, 53]);
//! assert_eq!(tree.find_successor(&13), Some(&14));
//! assert_eq!(tree.find_predecessor(&4), None);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`] and the owned [`Link`] |
//! [`error`] | [`InvariantError`] reported by validation |
//! [`util`] | `first`, `last`, `find`, `size`, traversals, debug `print` |
//! [`avl::util`] | height bookkeeping, rotations, `insert`, `remove`, predecessor/successor |
//! [`avl::avl_tree`] | the [`AvlTree`] controller |

pub mod avl;
pub mod error;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use error::InvariantError;
pub use types::{AvlNode, Link};
