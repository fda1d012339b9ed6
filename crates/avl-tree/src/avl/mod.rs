//! AVL balancing and the [`AvlTree`] controller.

#[path = "AvlTree.rs"]
pub mod avl_tree;
#[cfg(feature = "serde")]
mod serde;
pub mod util;

pub use avl_tree::AvlTree;
pub use util::{
    assert_avl_tree, insert, predecessor, rebalance, remove, rotate_left, rotate_right, successor,
    update_height,
};
