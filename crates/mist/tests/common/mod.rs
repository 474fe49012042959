#![allow(dead_code)]

//! Shared helpers for the integration suites: structure membership,
//! link-state snapshots, and the full structural invariant check.

use std::collections::HashSet;

use mist::{Dominance, Intersection, NodeId, SyntaxTree};

/// `root` and all of its descendants, in hierarchy order.
pub fn members<T>(tree: &SyntaxTree<T>, root: NodeId) -> Vec<NodeId> {
    let mut out = vec![root];
    out.extend(tree.hierarchy(root));
    out
}

/// Full link-state snapshot of the structure rooted at `root`, for
/// before/after comparison.
pub type Shape = Vec<(NodeId, [Option<NodeId>; 4])>;

pub fn shape<T>(tree: &SyntaxTree<T>, root: NodeId) -> Shape {
    members(tree, root)
        .into_iter()
        .map(|id| {
            let node = tree.node(id);
            (id, [node.top(), node.left(), node.right(), node.bottom()])
        })
        .collect()
}

/// Labels of the descendants of `root`, in hierarchy order.
pub fn label_hierarchy(tree: &SyntaxTree<&'static str>, root: NodeId) -> Vec<&'static str> {
    tree.hierarchy(root).map(|id| tree.node(id).value).collect()
}

/// Asserts every structural invariant over the structure rooted at `root`.
pub fn assert_invariants<T>(tree: &SyntaxTree<T>, root: NodeId) {
    let ids = members(tree, root);

    for &id in &ids {
        let node = tree.node(id);
        assert!(
            node.top().is_none() || node.left().is_none(),
            "node {id} has both top and left set"
        );
        if let Some(top) = node.top() {
            assert_eq!(tree.node(top).bottom(), Some(id), "top link of {id} not reciprocal");
        }
        if let Some(bottom) = node.bottom() {
            assert_eq!(tree.node(bottom).top(), Some(id), "bottom link of {id} not reciprocal");
        }
        if let Some(left) = node.left() {
            assert_eq!(tree.node(left).right(), Some(id), "left link of {id} not reciprocal");
        }
        if let Some(right) = node.right() {
            assert_eq!(tree.node(right).left(), Some(id), "right link of {id} not reciprocal");
        }
    }

    for &id in &ids {
        let kids: Vec<NodeId> = tree.children(id).collect();
        for pair in kids.windows(2) {
            let between = tree.intersection(pair[0], pair[1]);
            assert!(
                matches!(between, Intersection::Front | Intersection::After),
                "siblings {} and {} are {:?}, not disjoint and ordered",
                pair[0],
                pair[1],
                between
            );
        }
        for &kid in &kids {
            match tree.dominance(kid, id) {
                Dominance::Contain => {}
                Dominance::Exact => assert!(
                    tree.node(id).weight() < tree.node(kid).weight(),
                    "equal-range child {kid} does not outweigh its parent {id}"
                ),
                other => panic!("parent {id} does not enclose child {kid}: {other:?}"),
            }
        }
    }

    let mut triples = HashSet::new();
    for &id in &ids {
        let node = tree.node(id);
        assert!(
            triples.insert((node.offset(), node.length(), node.weight())),
            "duplicate (offset, length, weight) at node {id}"
        );
    }
    for (index, &a) in ids.iter().enumerate() {
        for &b in &ids[index + 1..] {
            assert_ne!(
                tree.dominance(a, b),
                Dominance::Share,
                "nodes {a} and {b} clash"
            );
        }
    }
}
