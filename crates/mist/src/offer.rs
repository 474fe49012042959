//! Range-aware insertion.
//!
//! `offer` places a node at the unique position its range and weight dictate
//! within the structure containing the target node. The position is found by
//! the pure walk in [`crate::compute`]; only once a slot is known does the
//! incoming node get popped out of its previous structure and linked in.
//! Every rejection therefore happens before the first mutation, and a failed
//! offer leaves both structures exactly as they were.

use crate::compute::{compute, Fantom};
use crate::detach;
use crate::error::TreeError;
use crate::link::{set_bottom, set_right};
use crate::node::{Node, NodeId};

/// Inserts `incoming` at the position dictated by its range and weight,
/// relative to the structure containing `this`.
///
/// `incoming` may currently belong to another structure in the same arena;
/// it is popped first, which inlines its children in its old place. On error
/// nothing has been mutated.
pub fn offer<T>(nodes: &mut [Node<T>], this: NodeId, incoming: NodeId) -> Result<(), TreeError> {
    if this == incoming {
        return Err(TreeError::illegal("node offered onto itself", this));
    }
    let slot = compute(nodes, this, nodes[incoming as usize].syntax_range())?;
    detach::pop(nodes, incoming)?;
    apply(nodes, incoming, slot);
    Ok(())
}

/// Wires a detached node into the slot described by a [`Fantom`].
///
/// Because only the leftmost child of a generation carries a `top` link, a
/// placement is fully determined by its four neighbors: linking the new node
/// to each of them also severs exactly the links the insertion displaces (an
/// adopted sibling run, for instance, is cut out of its old chain by the
/// `left` and `right` relinks and picked up whole through its head's new
/// `top`).
fn apply<T>(nodes: &mut [Node<T>], id: NodeId, slot: Fantom) {
    if let Some(top) = slot.top {
        set_bottom(nodes, top, Some(id));
    }
    if let Some(left) = slot.left {
        set_right(nodes, left, Some(id));
    }
    if let Some(right) = slot.right {
        set_right(nodes, id, Some(right));
    }
    if let Some(bottom) = slot.bottom {
        set_bottom(nodes, id, Some(bottom));
    }
}
