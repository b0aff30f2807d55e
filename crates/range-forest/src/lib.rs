//! Arena-based ordered range indexes.
//!
//! Two interchangeable engines answer the same questions (insert, lower
//! bound, in-order successor, range count/collect, height) so their shape
//! and speed can be compared under identical inputs:
//!
//! - [`BstMap`]: plain binary search tree, never rebalanced. Sorted input
//!   degenerates it into a chain of height `n`.
//! - [`RbMap`]: red-black tree with a shared black sentinel, height bounded
//!   by `2·log₂(n+1)`.
//!
//! Nodes never hold pointers. Every `left` / `right` / `parent` link is a
//! `u32` index into a `Vec` owned by the map, so parent back-references are
//! plain non-owning indices and the whole tree is dropped as a unit.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`KvNode`] link/payload traits |
//! | [`util`] | `Option`-linked navigation: `first`, `next`, `lower_bound`, iterative `height`, debug `print` |
//! | [`bst`] | [`BstMap`] and its node type |
//! | [`red_black`] | [`RbMap`], sentinel node type, rotations and insert fixup |
//! | [`range`] | [`OrderedMap`] trait and the lazy [`Range`] iterator |

pub mod bst;
pub mod range;
#[path = "red-black/mod.rs"]
pub mod red_black;
pub mod types;
pub mod util;

pub use bst::BstMap;
pub use range::{OrderedMap, Range};
pub use red_black::{Color, RbMap};
pub use types::{KvNode, Node};
