use crate::types::Node;

/// Index of the sentinel node. Every red-black arena holds it at slot 0.
///
/// All leaf children and the root's parent point here, so links are never
/// absent. The sentinel has no key or value.
pub const NIL: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Links and color of a red-black node. The key/value payload lives in a
/// separate arena owned by [`RbMap`](super::RbMap).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RbNode {
    pub p: u32,
    pub l: u32,
    pub r: u32,
    pub color: Color,
}

impl RbNode {
    pub const SENTINEL: RbNode = RbNode {
        p: NIL,
        l: NIL,
        r: NIL,
        color: Color::Black,
    };

    /// Fresh red leaf hanging under `p`.
    pub fn red(p: u32) -> Self {
        Self {
            p,
            l: NIL,
            r: NIL,
            color: Color::Red,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

#[inline]
fn link(i: u32) -> Option<u32> {
    (i != NIL).then_some(i)
}

/// `NIL` reads as `None`, so sentinel trees work with the generic
/// `Option`-linked utilities.
impl Node for RbNode {
    fn p(&self) -> Option<u32> {
        link(self.p)
    }

    fn l(&self) -> Option<u32> {
        link(self.l)
    }

    fn r(&self) -> Option<u32> {
        link(self.r)
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v.unwrap_or(NIL);
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v.unwrap_or(NIL);
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v.unwrap_or(NIL);
    }
}
