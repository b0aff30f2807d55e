use std::cmp::Ordering;
use std::fmt::Debug;

use crate::range::OrderedMap;
use crate::types::KvNode;
use crate::util;

use super::types::BstNode;

fn key_of<K, V>(node: &BstNode<K, V>) -> &K {
    &node.k
}

/// Unbalanced binary search tree map.
///
/// Insertion walks from the root and hangs the new node off the first empty
/// child slot; nothing ever rotates. Insertion order alone decides the
/// shape, so sorted input produces a chain with `height() == len()`.
#[derive(Clone, Debug)]
pub struct BstMap<K, V> {
    arena: Vec<BstNode<K, V>>,
    root: Option<u32>,
}

impl<K, V> BstMap<K, V> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            root: None,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[BstNode<K, V>] {
        &self.arena
    }

    pub fn node(&self, idx: u32) -> &BstNode<K, V> {
        &self.arena[idx as usize]
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn first(&self) -> Option<u32> {
        util::first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        util::last(&self.arena, self.root)
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        util::next(&self.arena, curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        util::prev(&self.arena, curr)
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    fn push(&mut self, key: K, value: V) -> u32 {
        self.arena.push(BstNode::new(key, value));
        (self.arena.len() - 1) as u32
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Builds a height-optimal tree from strictly ascending entries.
    ///
    /// Each subrange's middle entry becomes the subtree root. Subranges are
    /// processed from an explicit work stack. Returns `None` if `items` is
    /// not strictly ascending by key.
    pub fn from_sorted(items: Vec<(K, V)>) -> Option<Self> {
        if items.windows(2).any(|w| w[0].0 >= w[1].0) {
            return None;
        }

        let len = items.len();
        let mut map = Self::with_capacity(len);
        for (k, v) in items {
            map.push(k, v);
        }

        // (start, end, parent, attach as left child)
        let mut stack: Vec<(usize, usize, Option<u32>, bool)> = vec![(0, len, None, false)];
        while let Some((start, end, parent, left)) = stack.pop() {
            if start >= end {
                continue;
            }
            let mid = start + (end - start) / 2;
            let node = mid as u32;
            match parent {
                None => map.root = Some(node),
                Some(p) if left => util::attach_left(&mut map.arena, node, p),
                Some(p) => util::attach_right(&mut map.arena, node, p),
            }
            stack.push((mid + 1, end, Some(node), false));
            stack.push((start, mid, Some(node), true));
        }
        Some(map)
    }

    /// Inserts `key`, or overwrites the value of an existing node.
    pub fn set(&mut self, key: K, value: V) -> u32 {
        let Some(mut curr) = self.root else {
            let idx = self.push(key, value);
            self.root = Some(idx);
            return idx;
        };

        loop {
            let node = &self.arena[curr as usize];
            match key.cmp(&node.k) {
                Ordering::Equal => {
                    self.arena[curr as usize].set_value(value);
                    return curr;
                }
                Ordering::Less => match node.l {
                    Some(l) => curr = l,
                    None => {
                        let idx = self.push(key, value);
                        util::attach_left(&mut self.arena, idx, curr);
                        return idx;
                    }
                },
                Ordering::Greater => match node.r {
                    Some(r) => curr = r,
                    None => {
                        let idx = self.push(key, value);
                        util::attach_right(&mut self.arena, idx, curr);
                        return idx;
                    }
                },
            }
        }
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        util::find(&self.arena, self.root, key, key_of)
    }

    pub fn lower_bound(&self, key: &K) -> Option<u32> {
        util::lower_bound(&self.arena, self.root, key, key_of)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_binary_search_tree(&self.arena, self.root, key_of)
    }
}

impl<K: Debug, V: Debug> BstMap<K, V> {
    /// Debug dump of the tree shape.
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, |i, n| {
            format!("Node[{i}] {{ {:?} = {:?} }}", n.key(), n.value())
        })
    }
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> OrderedMap<K, V> for BstMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> u32 {
        self.set(key, value)
    }

    fn lower_bound(&self, key: &K) -> Option<u32> {
        BstMap::lower_bound(self, key)
    }

    fn successor(&self, node: u32) -> Option<u32> {
        self.next(node)
    }

    fn first(&self) -> Option<u32> {
        BstMap::first(self)
    }

    fn key(&self, node: u32) -> &K {
        self.arena[node as usize].key()
    }

    fn value(&self, node: u32) -> &V {
        self.arena[node as usize].value()
    }

    fn height(&self) -> usize {
        BstMap::height(self)
    }

    fn len(&self) -> usize {
        self.arena.len()
    }
}

impl<K: Ord, V> Extend<(K, V)> for BstMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BstMap<K, V> {
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
        let map = BstMap::<i32, i32>::new();
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert_eq!(map.lower_bound(&0), None);
        assert_eq!(map.first(), None);
        assert_eq!(map.range_count(&0, &100), 0);
        assert!(map.assert_valid().is_ok());
    }

    #[test]
    fn duplicate_key_overwrites_value() {
        let mut map = BstMap::new();
        let a = map.set(5, "a");
        map.set(3, "b");
        let again = map.set(5, "c");
        assert_eq!(a, again);
        assert_eq!(map.size(), 2);
        assert_eq!(map.get(&5), Some(&"c"));
    }

    #[test]
    fn ascending_insert_degenerates_to_chain() {
        let map: BstMap<i32, ()> = (0..64).map(|k| (k, ())).collect();
        assert_eq!(map.height(), 64);
        for i in 0..63u32 {
            assert_eq!(map.node(i).l, None);
            assert_eq!(map.node(i).r, Some(i + 1));
        }
    }

    #[test]
    fn descending_insert_degenerates_to_left_chain() {
        let map: BstMap<i32, ()> = (0..64).rev().map(|k| (k, ())).collect();
        assert_eq!(map.height(), 64);
        assert_eq!(map.node(0).r, None);
        assert_eq!(map.node(0).l, Some(1));
        assert!(map.assert_valid().is_ok());
    }

    #[test]
    fn lower_bound_and_successor() {
        let map: BstMap<i32, i32> = [30, 10, 50, 20, 40]
            .map(|k| (k, k * 2))
            .into_iter()
            .collect();
        let lb = map.lower_bound(&25).unwrap();
        assert_eq!(map.node(lb).k, 30);
        let next = map.next(lb).unwrap();
        assert_eq!(map.node(next).k, 40);
        let last = map.last().unwrap();
        assert_eq!(map.next(last), None);
        assert_eq!(map.lower_bound(&51), None);
    }

    #[test]
    fn from_sorted_is_height_optimal() {
        for n in [0usize, 1, 2, 3, 4, 7, 8, 100, 1023, 1024] {
            let items: Vec<(usize, usize)> = (0..n).map(|k| (k, k)).collect();
            let map = BstMap::from_sorted(items).unwrap();
            let expected = (usize::BITS - n.leading_zeros()) as usize;
            assert_eq!(map.height(), expected, "n = {n}");
            assert_eq!(map.size(), n);
            map.assert_valid().unwrap();
        }
    }

    #[test]
    fn from_sorted_rejects_unsorted_or_duplicate_keys() {
        assert!(BstMap::from_sorted(vec![(2, ()), (1, ())]).is_none());
        assert!(BstMap::from_sorted(vec![(1, ()), (1, ())]).is_none());
    }

    #[test]
    fn print_shows_shape() {
        let map: BstMap<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(
            map.print(),
            "Node[0] { 2 = 'b' }\nL=Node[1] { 1 = 'a' }\n  L=∅\n  R=∅\nR=∅"
        );
    }
}
