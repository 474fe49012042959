//! Human-readable structure dumps.
//!
//! Renders a subtree with box-drawing branches, one node per line:
//!
//! ```text
//! root [0..10) w0
//! ├─ a [2..3) w0
//! ├─ b [3..6) w-1
//! │  └─ c [3..6) w0
//! └─ g [6..7) w0
//! ```

use std::fmt::{Display, Write};

use crate::nav;
use crate::node::{Node, NodeId};

/// Renders the subtree rooted at `id`.
pub fn render<T: Display>(nodes: &[Node<T>], id: NodeId) -> String {
    let mut out = String::new();
    write_node(&mut out, nodes, id, "");
    out
}

fn write_node<T: Display>(out: &mut String, nodes: &[Node<T>], id: NodeId, tab: &str) {
    let node = &nodes[id as usize];
    let _ = write!(
        out,
        "{} [{}..{}) w{}",
        node.value,
        node.offset(),
        node.terminal(),
        node.weight()
    );

    let kids: Vec<NodeId> = nav::children(nodes, id).collect();
    for (index, kid) in kids.iter().enumerate() {
        let is_last = index + 1 == kids.len();
        let branch = if is_last { "└─" } else { "├─" };
        let _ = write!(out, "\n{tab}{branch} ");
        let kid_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        write_node(out, nodes, *kid, &kid_tab);
    }
}
