//! Red-black tree with a shared sentinel node.

#[path = "RbMap.rs"]
pub mod rb_map;
pub mod types;
pub mod util;

pub use rb_map::RbMap;
pub use types::{Color, RbNode, NIL};
pub use util::{assert_red_black_tree, insert_fixup, left_rotate, right_rotate};
