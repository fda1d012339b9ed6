//! Structural validation errors.
//!
//! Returned only by [`assert_avl_tree`](crate::avl::util::assert_avl_tree) and
//! [`AvlTree::assert_valid`](crate::AvlTree::assert_valid). A tree built through
//! the public API never produces one.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("node order violated at in-order position {index}")]
    OrderViolated { index: usize },
    #[error("stale height: expected {expected}, got {actual}")]
    StaleHeight { expected: i32, actual: i32 },
    #[error("stale balance factor: expected {expected}, got {actual}")]
    StaleBalanceFactor { expected: i32, actual: i32 },
    #[error("AVL balance violated: balance factor {bf}")]
    Unbalanced { bf: i32 },
}
