//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena.
//! Tree-walking functions in [`crate::util`] take the arena as a slice and
//! work with indices, so any node layout implementing [`Node`] can reuse
//! them.

/// Tree links (`p`, `l`, `r`).
///
/// `p` is a back-reference only: it never owns the parent, and following it
/// is how successor and rotation code climbs the tree.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value node interface used by map-like structures.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn set_value(&mut self, value: V);
}
