//! Derived read-only views computed by walking links.
//!
//! The direct accessors live on [`Node`]; this module derives everything
//! else: `head`/`tail` along the sibling axis, `parent` (the leftmost
//! sibling's `top`), `root`, the lazy [`children`] and [`hierarchy`]
//! sequences, indexed child access, and the generic [`collect`] traversal.

use std::collections::VecDeque;

use crate::error::TreeError;
use crate::node::{Node, NodeId};

/// Leftmost sibling of `id` (possibly `id` itself).
pub fn head<T>(nodes: &[Node<T>], mut id: NodeId) -> NodeId {
    while let Some(l) = nodes[id as usize].left {
        id = l;
    }
    id
}

/// Rightmost sibling of `id` (possibly `id` itself).
pub fn tail<T>(nodes: &[Node<T>], mut id: NodeId) -> NodeId {
    while let Some(r) = nodes[id as usize].right {
        id = r;
    }
    id
}

/// The node whose child list contains `id`: the leftmost sibling's `top`.
pub fn parent<T>(nodes: &[Node<T>], id: NodeId) -> Option<NodeId> {
    nodes[head(nodes, id) as usize].top
}

/// Topmost ancestor of `id`; `id` itself when the parent chain is empty.
pub fn root<T>(nodes: &[Node<T>], mut id: NodeId) -> NodeId {
    while let Some(p) = parent(nodes, id) {
        id = p;
    }
    id
}

// ── Children ──────────────────────────────────────────────────────────────

/// Lazy sequence `bottom, bottom.right, bottom.right.right, ...`.
pub fn children<T>(nodes: &[Node<T>], id: NodeId) -> Children<'_, T> {
    Children {
        nodes,
        curr: nodes[id as usize].bottom,
    }
}

pub struct Children<'a, T> {
    nodes: &'a [Node<T>],
    curr: Option<NodeId>,
}

impl<T> Iterator for Children<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.curr?;
        self.curr = self.nodes[id as usize].right;
        Some(id)
    }
}

// ── Collect ───────────────────────────────────────────────────────────────

/// Generic lazy traversal from `start`.
///
/// `expand` lists the neighbors to follow from each visited node. The
/// traversal keeps a back-stack of just-visited nodes and drops, from each
/// expansion, the single most recent back-stack entry, so an expansion over
/// symmetric links does not immediately walk back where it came from. Only
/// that one entry is suppressed: an expansion over a cyclic neighbor set may
/// revisit a node reachable through two distinct edges.
///
/// Internally the pending queue holds a sentinel after each expanded group;
/// consuming the sentinel pops the back-stack.
pub fn collect<'a, T, F>(
    nodes: &'a [Node<T>],
    start: NodeId,
    inclusive: bool,
    expand: F,
) -> Collect<'a, T, F>
where
    F: FnMut(&[Node<T>], NodeId) -> Vec<NodeId>,
{
    let mut queue = VecDeque::new();
    queue.push_back(Some(start));
    Collect {
        nodes,
        expand,
        queue,
        back: Vec::new(),
        skip_start: !inclusive,
    }
}

pub struct Collect<'a, T, F> {
    nodes: &'a [Node<T>],
    expand: F,
    queue: VecDeque<Option<NodeId>>,
    back: Vec<NodeId>,
    skip_start: bool,
}

impl<T, F> Iterator for Collect<'_, T, F>
where
    F: FnMut(&[Node<T>], NodeId) -> Vec<NodeId>,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            match self.queue.pop_front()? {
                None => {
                    self.back.pop();
                }
                Some(id) => {
                    let from = self.back.last().copied();
                    let mut followed = (self.expand)(self.nodes, id);
                    followed.retain(|&next| Some(next) != from);
                    self.queue.push_front(None);
                    while let Some(next) = followed.pop() {
                        self.queue.push_front(Some(next));
                    }
                    self.back.push(id);
                    if self.skip_start {
                        self.skip_start = false;
                        continue;
                    }
                    return Some(id);
                }
            }
        }
    }
}

/// Depth-first, pre-order traversal over the descendants of `id`, not
/// including `id` itself.
pub fn hierarchy<T>(nodes: &[Node<T>], id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    collect(nodes, id, false, move |nodes, n| {
        let node = &nodes[n as usize];
        let mut followed = Vec::new();
        if let Some(b) = node.bottom {
            followed.push(b);
        }
        if n != id {
            if let Some(r) = node.right {
                followed.push(r);
            }
        }
        followed
    })
}

// ── Indexed access ────────────────────────────────────────────────────────

/// Descends a child-index path: `path[k]` selects the `path[k]`-th child at
/// depth `k + 1`. The empty path is an error; a missing index is an error.
pub fn at<T>(nodes: &[Node<T>], id: NodeId, path: &[usize]) -> Result<NodeId, TreeError> {
    if path.is_empty() {
        return Err(TreeError::illegal("empty child path", id));
    }
    let mut curr = id;
    for &index in path {
        curr = children(nodes, curr)
            .nth(index)
            .ok_or_else(|| TreeError::illegal("child index out of bounds", curr))?;
    }
    Ok(curr)
}

/// [`at`], with missing indices (and the empty path) reported as `None`.
pub fn get<T>(nodes: &[Node<T>], id: NodeId, path: &[usize]) -> Option<NodeId> {
    at(nodes, id, path).ok()
}
