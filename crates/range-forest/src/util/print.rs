use crate::types::Node;

/// Debug dump of an `Option`-linked tree.
///
/// Output shape, one line per slot, children indented by two spaces:
///
/// ```text
/// Node[0] { 20 = "b" }
/// L=Node[1] { 10 = "a" }
///   L=∅
///   R=∅
/// R=∅
/// ```
///
/// `label` renders a single node. Lines are produced from an explicit stack,
/// so chains of any depth are safe to print.
pub fn print<N, F>(arena: &[N], root: Option<u32>, label: F) -> String
where
    N: Node,
    F: Fn(u32, &N) -> String,
{
    let mut out = String::new();
    // (node, indent of this line, side prefix, indent for its children)
    let mut stack: Vec<(Option<u32>, String, &str, String)> =
        vec![(root, String::new(), "", String::new())];
    while let Some((node, indent, side, tab)) = stack.pop() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&indent);
        out.push_str(side);
        match node {
            None => out.push('∅'),
            Some(i) => {
                let n = &arena[i as usize];
                out.push_str(&label(i, n));
                let child_tab = format!("{tab}  ");
                stack.push((n.r(), tab.clone(), "R=", child_tab.clone()));
                stack.push((n.l(), tab, "L=", child_tab));
            }
        }
    }
    out
}
