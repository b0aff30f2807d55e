use std::cmp::Ordering;
use std::fmt::Debug;

use crate::range::OrderedMap;

use super::types::{Color, RbNode, NIL};
use super::util;

/// Red-black tree map.
///
/// Node links live in `nodes`, whose slot 0 is the black sentinel; the
/// key/value of node `i` lives in `entries[i - 1]`. Keeping payloads apart
/// means the sentinel never carries data that could be read as an entry.
#[derive(Clone, Debug)]
pub struct RbMap<K, V> {
    nodes: Vec<RbNode>,
    entries: Vec<(K, V)>,
    root: u32,
}

impl<K, V> RbMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(RbNode::SENTINEL);
        Self {
            nodes,
            entries: Vec::with_capacity(capacity),
            root: NIL,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        (self.root != NIL).then_some(self.root)
    }

    /// Link arena, sentinel included.
    pub fn nodes(&self) -> &[RbNode] {
        &self.nodes
    }

    pub fn node(&self, idx: u32) -> &RbNode {
        &self.nodes[idx as usize]
    }

    pub fn color(&self, idx: u32) -> Color {
        self.nodes[idx as usize].color
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.entry(idx).0
    }

    pub fn value(&self, idx: u32) -> &V {
        &self.entry(idx).1
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn first(&self) -> Option<u32> {
        self.root_index().map(|root| util::minimum(&self.nodes, root))
    }

    pub fn last(&self) -> Option<u32> {
        self.root_index().map(|root| util::maximum(&self.nodes, root))
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        let next = util::successor(&self.nodes, curr);
        (next != NIL).then_some(next)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        let prev = util::predecessor(&self.nodes, curr);
        (prev != NIL).then_some(prev)
    }

    pub fn height(&self) -> usize {
        util::height(&self.nodes, self.root)
    }

    pub fn black_height(&self) -> usize {
        util::black_height(&self.nodes, self.root)
    }

    #[inline]
    fn entry(&self, idx: u32) -> &(K, V) {
        debug_assert_ne!(idx, NIL, "sentinel has no entry");
        &self.entries[idx as usize - 1]
    }
}

impl<K: Ord, V> RbMap<K, V> {
    /// Inserts `key`, or overwrites the value of an existing node.
    ///
    /// A new key descends from the root with [`NIL`] as the empty-slot
    /// marker, is linked as a red leaf, then [`util::insert_fixup`] restores
    /// the coloring.
    pub fn set(&mut self, key: K, value: V) -> u32 {
        let mut parent = NIL;
        let mut curr = self.root;
        let mut left = false;
        while curr != NIL {
            parent = curr;
            match key.cmp(&self.entry(curr).0) {
                Ordering::Equal => {
                    self.entries[curr as usize - 1].1 = value;
                    return curr;
                }
                Ordering::Less => {
                    left = true;
                    curr = self.nodes[curr as usize].l;
                }
                Ordering::Greater => {
                    left = false;
                    curr = self.nodes[curr as usize].r;
                }
            }
        }

        let z = self.nodes.len() as u32;
        self.nodes.push(RbNode::red(parent));
        self.entries.push((key, value));
        if parent == NIL {
            self.root = z;
        } else if left {
            self.nodes[parent as usize].l = z;
        } else {
            self.nodes[parent as usize].r = z;
        }
        util::insert_fixup(&mut self.nodes, &mut self.root, z);
        z
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while curr != NIL {
            curr = match key.cmp(&self.entry(curr).0) {
                Ordering::Equal => return Some(curr),
                Ordering::Less => self.nodes[curr as usize].l,
                Ordering::Greater => self.nodes[curr as usize].r,
            };
        }
        None
    }

    /// Leftmost node whose key is `>= key`.
    pub fn lower_bound(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        let mut result = NIL;
        while curr != NIL {
            if self.entry(curr).0 >= *key {
                result = curr;
                curr = self.nodes[curr as usize].l;
            } else {
                curr = self.nodes[curr as usize].r;
            }
        }
        (result != NIL).then_some(result)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_red_black_tree(&self.nodes, self.root, move |i| {
            &self.entries[i as usize - 1].0
        })
    }
}

impl<K: Debug, V: Debug> RbMap<K, V> {
    /// Debug dump of the tree shape with node colors.
    pub fn print(&self) -> String {
        crate::util::print(&self.nodes, self.root_index(), |i, n| {
            let color = if n.is_black() { "black" } else { "red" };
            let (k, v) = self.entry(i);
            format!("Node[{i}] {color} {{ {k:?} = {v:?} }}")
        })
    }
}

impl<K, V> Default for RbMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> OrderedMap<K, V> for RbMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> u32 {
        self.set(key, value)
    }

    fn lower_bound(&self, key: &K) -> Option<u32> {
        RbMap::lower_bound(self, key)
    }

    fn successor(&self, node: u32) -> Option<u32> {
        self.next(node)
    }

    fn first(&self) -> Option<u32> {
        RbMap::first(self)
    }

    fn key(&self, node: u32) -> &K {
        RbMap::key(self, node)
    }

    fn value(&self, node: u32) -> &V {
        RbMap::value(self, node)
    }

    fn height(&self) -> usize {
        RbMap::height(self)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Ord, V> Extend<(K, V)> for RbMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RbMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map() {
        let map = RbMap::<i32, i32>::new();
        assert!(map.is_empty());
        assert_eq!(map.root_index(), None);
        assert_eq!(map.height(), 0);
        assert_eq!(map.lower_bound(&1), None);
        assert_eq!(map.range_count(&i32::MIN, &i32::MAX), 0);
        assert_eq!(map.print(), "∅");
        map.assert_valid().unwrap();
    }

    #[test]
    fn first_node_is_black_root() {
        let mut map = RbMap::new();
        let idx = map.set(7, "seven");
        assert_eq!(idx, 1);
        assert_eq!(map.root_index(), Some(1));
        assert_eq!(map.color(1), Color::Black);
        assert_eq!(map.node(1).p, NIL);
        assert_eq!(map.black_height(), 1);
    }

    #[test]
    fn three_ascending_keys_rotate_left() {
        let mut map = RbMap::new();
        map.set(1, ());
        map.set(2, ());
        map.set(3, ());
        let root = map.root_index().unwrap();
        assert_eq!(*map.key(root), 2);
        assert_eq!(map.color(root), Color::Black);
        assert_eq!(map.color(map.node(root).l), Color::Red);
        assert_eq!(map.color(map.node(root).r), Color::Red);
        assert_eq!(map.height(), 2);
        map.assert_valid().unwrap();
    }

    #[test]
    fn triangle_case_straightens_before_rotating() {
        let mut map = RbMap::new();
        map.set(30, ());
        map.set(10, ());
        map.set(20, ());
        let root = map.root_index().unwrap();
        assert_eq!(*map.key(root), 20);
        assert_eq!(*map.key(map.node(root).l), 10);
        assert_eq!(*map.key(map.node(root).r), 30);
        map.assert_valid().unwrap();
    }

    #[test]
    fn red_uncle_recolors() {
        let mut map = RbMap::new();
        for k in [20, 10, 30, 5] {
            map.set(k, ());
        }
        let root = map.root_index().unwrap();
        assert_eq!(*map.key(root), 20);
        let l = map.node(root).l;
        let r = map.node(root).r;
        assert_eq!(map.color(l), Color::Black);
        assert_eq!(map.color(r), Color::Black);
        assert_eq!(map.color(map.find(&5).unwrap()), Color::Red);
        assert_eq!(map.black_height(), 2);
        map.assert_valid().unwrap();
    }

    #[test]
    fn duplicate_key_overwrites_value_without_fixup() {
        let mut map = RbMap::new();
        for k in 0..10 {
            map.set(k, k);
        }
        let before = map.nodes().to_vec();
        let idx = map.set(4, 400);
        assert_eq!(map.nodes(), &before[..]);
        assert_eq!(*map.value(idx), 400);
        assert_eq!(map.size(), 10);
    }

    #[test]
    fn sentinel_stays_black_and_detached() {
        let map: RbMap<i32, ()> = (0..500).map(|k| (k, ())).collect();
        assert_eq!(map.nodes()[NIL as usize], RbNode::SENTINEL);
    }

    #[test]
    fn prev_walks_backwards() {
        let map: RbMap<i32, ()> = [5, 1, 9, 3, 7].map(|k| (k, ())).into_iter().collect();
        let mut keys = Vec::new();
        let mut curr = map.last();
        while let Some(i) = curr {
            keys.push(*map.key(i));
            curr = map.prev(i);
        }
        assert_eq!(keys, vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn print_includes_colors() {
        let map: RbMap<i32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(
            map.print(),
            "Node[1] black { 1 = 'a' }\nL=∅\nR=Node[2] red { 2 = 'b' }\n  L=∅\n  R=∅"
        );
    }
}
