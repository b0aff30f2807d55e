//! Unbalanced binary search tree.

#[path = "BstMap.rs"]
pub mod bst_map;
pub mod types;

pub use bst_map::BstMap;
pub use types::BstNode;
