use std::fmt::Display;

use super::types::{Link, LlrbNode};

type Edge<'a, K> = Option<(&'a K, &'static str)>;

/// Render the tree shape as a Graphviz `strict digraph`.
///
/// Edges are listed in in-order sequence of their child node, labelled `L`
/// or `R`; red links are drawn red. Debugging aid only, the format is not
/// stable.
pub fn render_dot<K: Display, V>(root: &Link<K, V>) -> String {
    let mut out = String::from("strict digraph {\n");

    let Some(root) = root.as_deref() else {
        out.push('}');
        return out;
    };

    if root.l.is_none() && root.r.is_none() {
        out.push_str(&format!("\t{}\n}}", root.k));
        return out;
    }

    let mut stack = Vec::new();
    push_left_spine(&mut stack, root, None);
    while let Some((node, edge)) = stack.pop() {
        if let Some((parent, label)) = edge {
            let color = if node.is_red() { ", color = red" } else { "" };
            out.push_str(&format!(
                "\t{} -> {} [label=\"{label}\"{color}]\n",
                parent, node.k
            ));
        }
        if let Some(r) = node.r.as_deref() {
            push_left_spine(&mut stack, r, Some((&node.k, "R")));
        }
    }

    out.push('}');
    out
}

fn push_left_spine<'a, K, V>(
    stack: &mut Vec<(&'a LlrbNode<K, V>, Edge<'a, K>)>,
    mut node: &'a LlrbNode<K, V>,
    mut edge: Edge<'a, K>,
) {
    loop {
        stack.push((node, edge));
        match node.l.as_deref() {
            Some(l) => {
                edge = Some((&node.k, "L"));
                node = l;
            }
            None => break,
        }
    }
}
