//! Tree utility functions over `Option`-linked arenas.
//!
//! Key-based helpers (`find`, `lower_bound`) take a `key_of` accessor
//! closure so callers can use any arena-backed node layout.
//!
//! Nothing in here recurses. A BST fed sorted keys is a chain as deep as the
//! tree is large, so every walk that would naturally recurse keeps an
//! explicit stack instead.

pub mod print;

use std::cmp::Ordering;

use crate::types::Node;

pub use print::print;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
///
/// With a right subtree, its leftmost node. Otherwise the first ancestor
/// reached from a left child, or `None` if `node` is the maximum.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Finds a node by key.
pub fn find<N, K, F>(arena: &[N], root: Option<u32>, key: &K, key_of: F) -> Option<u32>
where
    N: Node,
    K: Ord,
    F: Fn(&N) -> &K,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(key_of(&arena[i as usize])) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Leftmost node whose key is `>= key`.
///
/// Every node at or above `key` becomes the current candidate and the walk
/// continues left looking for a tighter one; smaller nodes send it right.
pub fn lower_bound<N, K, F>(arena: &[N], root: Option<u32>, key: &K, key_of: F) -> Option<u32>
where
    N: Node,
    K: Ord,
    F: Fn(&N) -> &K,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        if key_of(&arena[i as usize]) >= key {
            result = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    result
}

/// Links `node` as the left child of `parent`, which must have none.
pub fn attach_left<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    set_l(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Links `node` as the right child of `parent`, which must have none.
pub fn attach_right<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    set_r(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Number of levels under `root`; 0 for an empty tree.
///
/// Depth-first walk with an explicit stack of `(node, depth)` pairs.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut max = 0;
    let mut stack = vec![(root, 1usize)];
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, i) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Checks parent links and strict in-order key order of an `Option`-linked
/// tree. Also checks that every arena slot is reachable from `root`.
pub fn assert_binary_search_tree<N, K, F>(
    arena: &[N],
    root: Option<u32>,
    key_of: F,
) -> Result<(), String>
where
    N: Node,
    K: Ord,
    F: Fn(&N) -> &K,
{
    let Some(root) = root else {
        return if arena.is_empty() {
            Ok(())
        } else {
            Err("Empty root over non-empty arena".to_string())
        };
    };
    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        for child in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            if get_p(arena, child) != Some(i) {
                return Err(format!("Broken parent link below node {i}"));
            }
            stack.push(child);
        }
    }

    let mut count = 0;
    let mut prev_node: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if key_of(&arena[prev as usize]) >= key_of(&arena[i as usize]) {
                return Err("Node order violated".to_string());
            }
        }
        count += 1;
        prev_node = Some(i);
        curr = next(arena, i);
    }

    if count != arena.len() {
        return Err(format!(
            "Reached {count} of {} arena nodes",
            arena.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::BstNode;

    fn key(node: &BstNode<i32, ()>) -> &i32 {
        &node.k
    }

    /// Arena for:
    ///
    /// ```text
    ///       20
    ///     /    \
    ///   10      30
    ///     \
    ///      15
    /// ```
    fn sample() -> (Vec<BstNode<i32, ()>>, Option<u32>) {
        let mut arena: Vec<BstNode<i32, ()>> =
            [20, 10, 30, 15].map(|k| BstNode::new(k, ())).into();
        attach_left(&mut arena, 1, 0);
        attach_right(&mut arena, 2, 0);
        attach_right(&mut arena, 3, 1);
        (arena, Some(0))
    }

    #[test]
    fn first_last_on_empty_tree() {
        let arena: Vec<BstNode<i32, ()>> = Vec::new();
        assert_eq!(first(&arena, None), None);
        assert_eq!(last(&arena, None), None);
        assert_eq!(height(&arena, None), 0);
        assert_eq!(size(&arena, None), 0);
    }

    #[test]
    fn next_and_prev_walk_in_order() {
        let (arena, root) = sample();
        let mut keys = Vec::new();
        let mut curr = first(&arena, root);
        while let Some(i) = curr {
            keys.push(arena[i as usize].k);
            curr = next(&arena, i);
        }
        assert_eq!(keys, vec![10, 15, 20, 30]);

        let mut keys = Vec::new();
        let mut curr = last(&arena, root);
        while let Some(i) = curr {
            keys.push(arena[i as usize].k);
            curr = prev(&arena, i);
        }
        assert_eq!(keys, vec![30, 20, 15, 10]);
    }

    #[test]
    fn lower_bound_picks_tightest_candidate() {
        let (arena, root) = sample();
        let at = |k: i32| lower_bound(&arena, root, &k, key).map(|i| arena[i as usize].k);
        assert_eq!(at(0), Some(10));
        assert_eq!(at(10), Some(10));
        assert_eq!(at(11), Some(15));
        assert_eq!(at(16), Some(20));
        assert_eq!(at(30), Some(30));
        assert_eq!(at(31), None);
    }

    #[test]
    fn find_exact_only() {
        let (arena, root) = sample();
        assert_eq!(find(&arena, root, &15, key), Some(3));
        assert_eq!(find(&arena, root, &16, key), None);
    }

    #[test]
    fn height_and_size() {
        let (arena, root) = sample();
        assert_eq!(height(&arena, root), 3);
        assert_eq!(size(&arena, root), 4);
        assert_eq!(assert_binary_search_tree(&arena, root, key), Ok(()));
    }

    #[test]
    fn deep_chain_walks_iteratively() {
        let n = 200_000u32;
        let mut arena: Vec<BstNode<u32, ()>> = (0..n).map(|k| BstNode::new(k, ())).collect();
        for i in 1..n {
            attach_right(&mut arena, i, i - 1);
        }
        let root = Some(0);
        assert_eq!(height(&arena, root), n as usize);
        assert_eq!(size(&arena, root), n as usize);
        assert_eq!(
            lower_bound(&arena, root, &(n - 1), |node| &node.k),
            Some(n - 1)
        );
        assert_eq!(
            assert_binary_search_tree(&arena, root, |node| &node.k),
            Ok(())
        );
    }

    #[test]
    fn validation_catches_broken_parent_link() {
        let (mut arena, root) = sample();
        arena[3].p = Some(0);
        assert!(assert_binary_search_tree(&arena, root, key).is_err());
    }

    #[test]
    fn validation_catches_order_violation() {
        let (mut arena, root) = sample();
        arena[3].k = 25;
        assert_eq!(
            assert_binary_search_tree(&arena, root, key),
            Err("Node order violated".to_string())
        );
    }
}
