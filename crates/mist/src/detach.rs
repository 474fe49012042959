//! Detachment: `pop`, `remove`, `clear`.
//!
//! All three check the target for the impossible link state (`top` and
//! `left` both set) before touching anything, so a recoverable structure is
//! never half-modified.

use crate::error::TreeError;
use crate::link::{set_bottom, set_right};
use crate::nav;
use crate::node::{Node, NodeId};

fn shape_check<T>(nodes: &[Node<T>], id: NodeId) -> Result<(), TreeError> {
    let node = &nodes[id as usize];
    if node.top.is_some() && node.left.is_some() {
        return Err(TreeError::corrupted("node has both top and left set", id));
    }
    Ok(())
}

/// Detaches the child list of `id`. The former first child becomes the root
/// of the detached subtree; `id` keeps its own position.
pub fn clear<T>(nodes: &mut [Node<T>], id: NodeId) -> Result<(), TreeError> {
    shape_check(nodes, id)?;
    set_bottom(nodes, id, None);
    Ok(())
}

/// Detaches `id` together with its entire subtree. `id`'s former siblings
/// collapse around the gap; afterward `id` has neither `top`, `left`, nor
/// `right`, and keeps `bottom`.
pub fn remove<T>(nodes: &mut [Node<T>], id: NodeId) -> Result<(), TreeError> {
    shape_check(nodes, id)?;
    let node = &nodes[id as usize];
    let (top, left, right) = (node.top, node.left, node.right);

    if let Some(top) = top {
        set_right(nodes, id, None);
        set_bottom(nodes, top, right);
    } else if let Some(left) = left {
        set_right(nodes, left, right);
    } else if right.is_some() {
        set_right(nodes, id, None);
    }
    Ok(())
}

/// Detaches `id` alone, inlining its children in its place: the first child
/// takes `id`'s former slot and the last child is linked to `id`'s former
/// right neighbor. Afterward `id` is fully isolated.
pub fn pop<T>(nodes: &mut [Node<T>], id: NodeId) -> Result<(), TreeError> {
    shape_check(nodes, id)?;
    let node = &nodes[id as usize];
    let (top, left, right, bottom) = (node.top, node.left, node.right, node.bottom);

    let Some(first) = bottom else {
        return remove(nodes, id);
    };
    let last = nav::tail(nodes, first);

    if let Some(top) = top {
        // Re-homing the first child under `top` also clears both of `id`'s
        // vertical links in one move.
        set_bottom(nodes, top, Some(first));
    } else {
        set_bottom(nodes, id, None);
        if let Some(left) = left {
            set_right(nodes, left, Some(first));
        }
    }
    if right.is_some() {
        set_right(nodes, last, right);
    }
    Ok(())
}
