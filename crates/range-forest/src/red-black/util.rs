//! Structural red-black operations over a sentinel arena.
//!
//! Every "no node" test compares against [`NIL`]. The sentinel's own links
//! are never written: rotations only update a displaced subtree's parent
//! when that subtree is a real node.

use super::types::{Color, RbNode, NIL};

#[inline]
fn is_red(nodes: &[RbNode], i: u32) -> bool {
    nodes[i as usize].is_red()
}

#[inline]
fn set_color(nodes: &mut [RbNode], i: u32, color: Color) {
    nodes[i as usize].color = color;
}

/// Replaces `old` with `new` in the child slot of `parent`, or in `root`
/// when `parent` is the sentinel.
#[inline]
fn replace_child(nodes: &mut [RbNode], root: &mut u32, parent: u32, old: u32, new: u32) {
    if parent == NIL {
        *root = new;
    } else if nodes[parent as usize].l == old {
        nodes[parent as usize].l = new;
    } else {
        nodes[parent as usize].r = new;
    }
}

/// Rotates `x` down to the left; its right child `y` takes its place.
///
/// ```text
///     x              y
///    / \            / \
///   a   y    =>    x   c
///      / \        / \
///     b   c      a   b
/// ```
pub fn left_rotate(nodes: &mut [RbNode], root: &mut u32, x: u32) {
    let y = nodes[x as usize].r;
    let b = nodes[y as usize].l;

    nodes[x as usize].r = b;
    if b != NIL {
        nodes[b as usize].p = x;
    }

    let xp = nodes[x as usize].p;
    nodes[y as usize].p = xp;
    replace_child(nodes, root, xp, x, y);

    nodes[y as usize].l = x;
    nodes[x as usize].p = y;
}

/// Mirror of [`left_rotate`]: `x`'s left child `y` takes its place.
pub fn right_rotate(nodes: &mut [RbNode], root: &mut u32, x: u32) {
    let y = nodes[x as usize].l;
    let b = nodes[y as usize].r;

    nodes[x as usize].l = b;
    if b != NIL {
        nodes[b as usize].p = x;
    }

    let xp = nodes[x as usize].p;
    nodes[y as usize].p = xp;
    replace_child(nodes, root, xp, x, y);

    nodes[y as usize].r = x;
    nodes[x as usize].p = y;
}

/// Restores the red-black properties after linking the red leaf `z`.
///
/// Walks up while `z` and its parent are both red. A red uncle is pushed
/// down by recoloring and the violation moves to the grandparent. A black
/// uncle ends the loop: an inner `z` is first rotated into an outer
/// position, then the grandparent is rotated the other way. The root is
/// forced black at the end.
pub fn insert_fixup(nodes: &mut [RbNode], root: &mut u32, mut z: u32) {
    while is_red(nodes, nodes[z as usize].p) {
        let p = nodes[z as usize].p;
        // p is red, so it is not the root and g is real.
        let g = nodes[p as usize].p;

        if p == nodes[g as usize].l {
            let u = nodes[g as usize].r;
            if is_red(nodes, u) {
                set_color(nodes, p, Color::Black);
                set_color(nodes, u, Color::Black);
                set_color(nodes, g, Color::Red);
                z = g;
                continue;
            }
            if z == nodes[p as usize].r {
                z = p;
                left_rotate(nodes, root, z);
            }
            let p = nodes[z as usize].p;
            let g = nodes[p as usize].p;
            set_color(nodes, p, Color::Black);
            set_color(nodes, g, Color::Red);
            right_rotate(nodes, root, g);
        } else {
            let u = nodes[g as usize].l;
            if is_red(nodes, u) {
                set_color(nodes, p, Color::Black);
                set_color(nodes, u, Color::Black);
                set_color(nodes, g, Color::Red);
                z = g;
                continue;
            }
            if z == nodes[p as usize].l {
                z = p;
                right_rotate(nodes, root, z);
            }
            let p = nodes[z as usize].p;
            let g = nodes[p as usize].p;
            set_color(nodes, p, Color::Black);
            set_color(nodes, g, Color::Red);
            left_rotate(nodes, root, g);
        }
    }
    if *root != NIL {
        set_color(nodes, *root, Color::Black);
    }
}

/// Leftmost node under `x`, which must be real.
pub fn minimum(nodes: &[RbNode], mut x: u32) -> u32 {
    while nodes[x as usize].l != NIL {
        x = nodes[x as usize].l;
    }
    x
}

/// Rightmost node under `x`, which must be real.
pub fn maximum(nodes: &[RbNode], mut x: u32) -> u32 {
    while nodes[x as usize].r != NIL {
        x = nodes[x as usize].r;
    }
    x
}

/// In-order successor of `x`, or [`NIL`] past the maximum.
pub fn successor(nodes: &[RbNode], mut x: u32) -> u32 {
    let r = nodes[x as usize].r;
    if r != NIL {
        return minimum(nodes, r);
    }
    let mut y = nodes[x as usize].p;
    while y != NIL && x == nodes[y as usize].r {
        x = y;
        y = nodes[y as usize].p;
    }
    y
}

/// In-order predecessor of `x`, or [`NIL`] before the minimum.
pub fn predecessor(nodes: &[RbNode], mut x: u32) -> u32 {
    let l = nodes[x as usize].l;
    if l != NIL {
        return maximum(nodes, l);
    }
    let mut y = nodes[x as usize].p;
    while y != NIL && x == nodes[y as usize].l {
        x = y;
        y = nodes[y as usize].p;
    }
    y
}

/// Levels on the longest path from `root`; 0 when `root` is [`NIL`].
pub fn height(nodes: &[RbNode], root: u32) -> usize {
    if root == NIL {
        return 0;
    }
    let mut max = 0;
    let mut stack = vec![(root, 1usize)];
    while let Some((x, depth)) = stack.pop() {
        max = max.max(depth);
        let node = nodes[x as usize];
        if node.l != NIL {
            stack.push((node.l, depth + 1));
        }
        if node.r != NIL {
            stack.push((node.r, depth + 1));
        }
    }
    max
}

/// Black nodes on the leftmost path below `root`, counting the sentinel and
/// not `root` itself. 0 for an empty tree.
pub fn black_height(nodes: &[RbNode], root: u32) -> usize {
    if root == NIL {
        return 0;
    }
    let mut count = 0;
    let mut x = nodes[root as usize].l;
    loop {
        if nodes[x as usize].is_black() {
            count += 1;
        }
        if x == NIL {
            return count;
        }
        x = nodes[x as usize].l;
    }
}

/// Checks every red-black property plus link and order consistency:
///
/// - the sentinel and the root are black, the root's parent is the sentinel;
/// - children point back at their parent;
/// - no red node has a red child;
/// - every root-to-sentinel path holds the same number of black nodes;
/// - in-order keys are strictly ascending and every node is reachable.
///
/// `key_of` maps a real node index to its key.
pub fn assert_red_black_tree<'a, K, F>(nodes: &[RbNode], root: u32, key_of: F) -> Result<(), String>
where
    K: Ord + 'a,
    F: Fn(u32) -> &'a K,
{
    let sentinel = nodes[NIL as usize];
    if !sentinel.is_black() {
        return Err("Sentinel is not black".to_string());
    }
    if root == NIL {
        return if nodes.len() == 1 {
            Ok(())
        } else {
            Err("Empty root over non-empty arena".to_string())
        };
    }
    if nodes[root as usize].p != NIL {
        return Err("Root has parent".to_string());
    }
    if !nodes[root as usize].is_black() {
        return Err("Root is not black".to_string());
    }

    let mut path_black: Option<usize> = None;
    // (node, black nodes on the path above it)
    let mut stack = vec![(root, 0usize)];
    while let Some((x, above)) = stack.pop() {
        let node = nodes[x as usize];
        let blacks = above + usize::from(node.is_black());
        for child in [node.l, node.r] {
            if child == NIL {
                let total = blacks + 1;
                match path_black {
                    None => path_black = Some(total),
                    Some(expected) if expected != total => {
                        return Err("Black height mismatch".to_string());
                    }
                    Some(_) => {}
                }
                continue;
            }
            let c = nodes[child as usize];
            if c.p != x {
                return Err(format!("Broken parent link below node {x}"));
            }
            if node.is_red() && c.is_red() {
                return Err(format!("Red node {x} has red child {child}"));
            }
            stack.push((child, blacks));
        }
    }

    let mut count = 0;
    let mut prev = NIL;
    let mut curr = minimum(nodes, root);
    while curr != NIL {
        if prev != NIL && key_of(prev) >= key_of(curr) {
            return Err("Node order violated".to_string());
        }
        count += 1;
        prev = curr;
        curr = successor(nodes, curr);
    }
    if count != nodes.len() - 1 {
        return Err(format!(
            "Reached {count} of {} arena nodes",
            nodes.len() - 1
        ));
    }

    Ok(())
}
