use std::fmt::Debug;

use crate::types::AvlNode;

/// Debug printer: one node per line, children indented under `L=` / `R=`.
pub fn print<K: Debug>(node: Option<&AvlNode<K>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let left = print(n.left(), &format!("{tab}  "));
            let right = print(n.right(), &format!("{tab}  "));
            format!(
                "{:?} [h={}, bf={}]\n{tab}L={left}\n{tab}R={right}",
                n.value, n.height, n.bf
            )
        }
    }
}
