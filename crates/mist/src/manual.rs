//! Explicit placement, bypassing the range algebra.
//!
//! The manual flavor of the tree: the caller decides where a node goes.
//! These functions keep the link invariants but do not consult ranges at
//! all, so they can build structures the range-aware `offer` would reject.
//! Useful for assembling fixtures and for callers that manage ordering
//! themselves.

use crate::error::TreeError;
use crate::link::{set_bottom, set_right};
use crate::node::{Node, NodeId};

fn check_detached<T>(nodes: &[Node<T>], anchor: NodeId, node: NodeId) -> Result<(), TreeError> {
    if anchor == node {
        return Err(TreeError::illegal("node pushed onto itself", node));
    }
    if !nodes[node as usize].is_detached() {
        return Err(TreeError::illegal("pushed node must be detached", node));
    }
    Ok(())
}

/// Makes `node` the first child of `anchor`; the former first child becomes
/// `node`'s next sibling.
pub fn push_child<T>(nodes: &mut [Node<T>], anchor: NodeId, node: NodeId) -> Result<(), TreeError> {
    check_detached(nodes, anchor, node)?;
    let displaced = nodes[anchor as usize].bottom;
    set_bottom(nodes, anchor, Some(node));
    if displaced.is_some() {
        set_right(nodes, node, displaced);
    }
    Ok(())
}

/// Inserts `node` between `anchor` and its next sibling.
pub fn push_next<T>(nodes: &mut [Node<T>], anchor: NodeId, node: NodeId) -> Result<(), TreeError> {
    check_detached(nodes, anchor, node)?;
    let displaced = nodes[anchor as usize].right;
    set_right(nodes, anchor, Some(node));
    if displaced.is_some() {
        set_right(nodes, node, displaced);
    }
    Ok(())
}

/// Inserts `node` between `anchor` and its previous sibling, or makes it the
/// new leftmost child when `anchor` had none.
pub fn push_previous<T>(
    nodes: &mut [Node<T>],
    anchor: NodeId,
    node: NodeId,
) -> Result<(), TreeError> {
    check_detached(nodes, anchor, node)?;
    let anchor_node = &nodes[anchor as usize];
    if anchor_node.top.is_some() && anchor_node.left.is_some() {
        return Err(TreeError::corrupted("node has both top and left set", anchor));
    }
    let (top, left) = (anchor_node.top, anchor_node.left);
    if let Some(left) = left {
        set_right(nodes, left, Some(node));
    } else if let Some(top) = top {
        set_bottom(nodes, top, Some(node));
    }
    set_right(nodes, node, Some(anchor));
    Ok(())
}
