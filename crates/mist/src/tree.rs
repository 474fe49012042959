//! The arena-owning tree handle.
//!
//! A [`SyntaxTree`] owns every node ever created in it and hands out
//! [`NodeId`]s as stable identities. Several independent structures may live
//! side by side in one arena; a structure is whatever is reachable from a
//! node over neighbor links, and [`SyntaxTree::offer`] moves nodes between
//! structures. The arena never frees nodes.
//!
//! All structural work is done by the free functions of the sibling modules;
//! this type is the ergonomic front door.

use std::fmt::Display;

use crate::algebra::{Dominance, Intersection, Precedence, Relation};
use crate::compute::{self, Fantom};
use crate::detach;
use crate::error::TreeError;
use crate::manual;
use crate::nav::{self, Children};
use crate::node::{Node, NodeId};
use crate::offer;
use crate::print;
use crate::range::SyntaxRange;

/// Arena of managed nodes; see the [module docs](self).
#[derive(Debug, Default)]
pub struct SyntaxTree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> SyntaxTree<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a detached node with weight 0 and returns its identity.
    pub fn push(&mut self, value: T, offset: usize, length: usize) -> NodeId {
        self.push_weighted(value, offset, length, 0)
    }

    /// Creates a detached node and returns its identity. The range and
    /// weight are fixed for the node's lifetime.
    pub fn push_weighted(
        &mut self,
        value: T,
        offset: usize,
        length: usize,
        weight: i64,
    ) -> NodeId {
        self.nodes.push(Node::new(value, offset, length, weight));
        (self.nodes.len() - 1) as NodeId
    }

    /// Number of nodes ever created in this arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id as usize]
    }

    /// Mutable access to a node's value. Links and range stay behind the
    /// structural API.
    pub fn value_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id as usize].value
    }

    /// The raw arena, for the free-function modules.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    // ── Navigation ────────────────────────────────────────────────────────

    pub fn head(&self, id: NodeId) -> NodeId {
        nav::head(&self.nodes, id)
    }

    pub fn tail(&self, id: NodeId) -> NodeId {
        nav::tail(&self.nodes, id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        nav::parent(&self.nodes, id)
    }

    pub fn root(&self, id: NodeId) -> NodeId {
        nav::root(&self.nodes, id)
    }

    pub fn children(&self, id: NodeId) -> Children<'_, T> {
        nav::children(&self.nodes, id)
    }

    /// Depth-first, pre-order descendants of `id`, not including `id`.
    pub fn hierarchy(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        nav::hierarchy(&self.nodes, id)
    }

    /// Generic lazy traversal; see [`nav::collect`].
    pub fn collect<'a, F>(
        &'a self,
        start: NodeId,
        inclusive: bool,
        expand: F,
    ) -> impl Iterator<Item = NodeId> + 'a
    where
        F: FnMut(&[Node<T>], NodeId) -> Vec<NodeId> + 'a,
    {
        nav::collect(&self.nodes, start, inclusive, expand)
    }

    /// Child-index path access; the empty path and missing indices error.
    pub fn at(&self, id: NodeId, path: &[usize]) -> Result<NodeId, TreeError> {
        nav::at(&self.nodes, id, path)
    }

    /// Child-index path access; `None` on the empty path or a missing index.
    pub fn get(&self, id: NodeId, path: &[usize]) -> Option<NodeId> {
        nav::get(&self.nodes, id, path)
    }

    // ── Algebra over nodes ────────────────────────────────────────────────

    pub fn intersection(&self, a: NodeId, b: NodeId) -> Intersection {
        Intersection::of(self.node(a).range(), self.node(b).range())
    }

    pub fn relation(&self, a: NodeId, b: NodeId) -> Relation {
        Relation::of(self.node(a).range(), self.node(b).range())
    }

    pub fn dominance(&self, a: NodeId, b: NodeId) -> Dominance {
        Dominance::of(self.node(a).range(), self.node(b).range())
    }

    pub fn precedence(&self, a: NodeId, b: NodeId) -> Precedence {
        Precedence::of(self.node(a).weight(), self.node(b).weight())
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Range-aware insertion; see [`offer::offer`].
    pub fn offer(&mut self, this: NodeId, incoming: NodeId) -> Result<(), TreeError> {
        offer::offer(&mut self.nodes, this, incoming)
    }

    /// Detaches `id` alone, inlining its children in its place.
    pub fn pop(&mut self, id: NodeId) -> Result<(), TreeError> {
        detach::pop(&mut self.nodes, id)
    }

    /// Detaches `id` together with its subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        detach::remove(&mut self.nodes, id)
    }

    /// Detaches the children of `id`.
    pub fn clear(&mut self, id: NodeId) -> Result<(), TreeError> {
        detach::clear(&mut self.nodes, id)
    }

    /// Explicit placement as the first child of `anchor`.
    pub fn push_child(&mut self, anchor: NodeId, node: NodeId) -> Result<(), TreeError> {
        manual::push_child(&mut self.nodes, anchor, node)
    }

    /// Explicit placement after `anchor`.
    pub fn push_next(&mut self, anchor: NodeId, node: NodeId) -> Result<(), TreeError> {
        manual::push_next(&mut self.nodes, anchor, node)
    }

    /// Explicit placement before `anchor`.
    pub fn push_previous(&mut self, anchor: NodeId, node: NodeId) -> Result<(), TreeError> {
        manual::push_previous(&mut self.nodes, anchor, node)
    }

    // ── Dry run ───────────────────────────────────────────────────────────

    /// Where would `incoming` land if offered to `this`? No mutation.
    pub fn compute(&self, this: NodeId, incoming: NodeId) -> Result<Fantom, TreeError> {
        compute::compute(&self.nodes, this, self.node(incoming).syntax_range())
    }

    /// [`Self::compute`] for a hypothetical `(offset, length, weight)`.
    pub fn compute_at(
        &self,
        this: NodeId,
        offset: usize,
        length: usize,
        weight: i64,
    ) -> Result<Fantom, TreeError> {
        compute::compute(&self.nodes, this, SyntaxRange::new(offset, length, weight))
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Box-drawing dump of the subtree rooted at `id`.
    pub fn render(&self, id: NodeId) -> String
    where
        T: Display,
    {
        print::render(&self.nodes, id)
    }
}
