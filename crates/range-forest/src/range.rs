//! Shared operation surface of the tree engines.

use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Ordered key-value index addressed by stable `u32` node handles.
///
/// Implementors supply the structural primitives (`insert`, `lower_bound`,
/// `successor`, `first`, accessors, `height`); range queries are derived
/// from them. Handles stay valid for the map's lifetime because nodes are
/// never removed.
pub trait OrderedMap<K: Ord, V> {
    /// Inserts `key`, or overwrites its value if already present. Returns
    /// the handle of the node holding `key`.
    fn insert(&mut self, key: K, value: V) -> u32;

    /// Leftmost node whose key is `>= key`.
    fn lower_bound(&self, key: &K) -> Option<u32>;

    /// In-order successor of `node`, or `None` past the maximum.
    fn successor(&self, node: u32) -> Option<u32>;

    /// Node with the smallest key.
    fn first(&self) -> Option<u32>;

    fn key(&self, node: u32) -> &K;

    fn value(&self, node: u32) -> &V;

    /// Levels on the longest root-to-leaf path; 0 when empty.
    fn height(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &K) -> Option<&V> {
        let node = self.lower_bound(key)?;
        (self.key(node) == key).then(|| self.value(node))
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Entries with `lo <= key <= hi`, ascending. Empty when `lo > hi`.
    fn range<'a>(&'a self, lo: &K, hi: &'a K) -> Range<'a, K, V, Self>
    where
        Self: Sized,
        V: 'a,
    {
        let start = if lo > hi { None } else { self.lower_bound(lo) };
        Range::new(self, start, Some(hi))
    }

    /// Collecting form of [`range`](Self::range).
    fn range_items(&self, lo: &K, hi: &K) -> Vec<(K, V)>
    where
        Self: Sized,
        K: Clone,
        V: Clone,
    {
        self.range(lo, hi)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Counting form of [`range`](Self::range); allocates nothing.
    fn range_count(&self, lo: &K, hi: &K) -> usize
    where
        Self: Sized,
    {
        self.range(lo, hi).count()
    }

    /// All entries, ascending.
    fn iter<'a>(&'a self) -> Range<'a, K, V, Self>
    where
        Self: Sized,
        K: 'a,
        V: 'a,
    {
        Range::new(self, self.first(), None)
    }
}

/// Lazy in-order walk from a start node up to an optional inclusive bound.
///
/// Each step is one `successor` call, so a query costs one descent plus the
/// number of yielded entries.
pub struct Range<'a, K, V, M: ?Sized> {
    map: &'a M,
    curr: Option<u32>,
    hi: Option<&'a K>,
    _v: PhantomData<&'a V>,
}

impl<'a, K, V, M: ?Sized> Range<'a, K, V, M> {
    pub fn new(map: &'a M, start: Option<u32>, hi: Option<&'a K>) -> Self {
        Self {
            map,
            curr: start,
            hi,
            _v: PhantomData,
        }
    }
}

impl<'a, K, V, M> Iterator for Range<'a, K, V, M>
where
    K: Ord,
    M: OrderedMap<K, V> + ?Sized,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        let key = self.map.key(node);
        if self.hi.is_some_and(|hi| key > hi) {
            self.curr = None;
            return None;
        }
        self.curr = self.map.successor(node);
        Some((key, self.map.value(node)))
    }
}

impl<K, V, M> FusedIterator for Range<'_, K, V, M>
where
    K: Ord,
    M: OrderedMap<K, V> + ?Sized,
{
}
