//! End-to-end insertion scenarios: weight-driven nesting at identical
//! ranges, backward offering with upward delegation, clash and takeover
//! rejection, and the three detachment operations.

mod common;

use mist::{NodeId, SyntaxTree, TreeError};

fn kids(tree: &SyntaxTree<&'static str>, id: NodeId) -> Vec<&'static str> {
    tree.children(id).map(|kid| tree.node(kid).value).collect()
}

#[test]
fn identical_ranges_nest_by_weight_matrix() {
    let mut tree = SyntaxTree::new();
    let root = tree.push("root", 0, 10);
    let a = tree.push("a", 2, 1);
    let b = tree.push_weighted("b", 3, 3, -1);
    let g = tree.push("g", 6, 1);
    let e = tree.push("e", 3, 1);
    let f = tree.push("f", 5, 1);
    let d = tree.push_weighted("d", 3, 3, 1);
    let c = tree.push("c", 3, 3);

    for node in [a, b, g, e, f, d, c] {
        tree.offer(root, node).unwrap();
    }

    assert_eq!(kids(&tree, root), ["a", "b", "g"]);
    assert_eq!(kids(&tree, b), ["c"]);
    assert_eq!(kids(&tree, c), ["d"]);
    assert_eq!(kids(&tree, d), ["e", "f"]);
    common::assert_invariants(&tree, root);
}

#[test]
fn backward_offers_and_late_root_matrix() {
    let mut tree = SyntaxTree::new();
    let a = tree.push("a", 8, 1);
    let b = tree.push("b", 6, 2);
    let c = tree.push("c", 3, 3);
    let d = tree.push("d", 0, 2);
    let e = tree.push("e", 5, 1);
    let f = tree.push("f", 4, 1);
    let g = tree.push("g", 0, 1);

    for node in [b, c, d, e, f, g] {
        tree.offer(a, node).unwrap();
    }

    // The top generation runs d, c, b, a with e and f tucked inside c and
    // g inside d.
    assert_eq!(tree.node(d).right(), Some(c));
    assert_eq!(tree.node(c).right(), Some(b));
    assert_eq!(tree.node(b).right(), Some(a));
    assert_eq!(tree.node(c).bottom(), Some(f));
    assert_eq!(tree.node(f).right(), Some(e));
    assert_eq!(tree.node(d).bottom(), Some(g));

    // A root offered from deep inside adopts the whole top generation.
    let root = tree.push("root", 0, 10);
    tree.offer(f, root).unwrap();

    assert_eq!(tree.node(root).child(), Some(d));
    assert_eq!(tree.root(f), root);
    assert_eq!(
        common::label_hierarchy(&tree, root),
        ["d", "g", "c", "f", "e", "b", "a"]
    );
    common::assert_invariants(&tree, root);
}

#[test]
fn sharing_ranges_clash_matrix() {
    let mut tree = SyntaxTree::new();
    let root = tree.push("root", 0, 10);
    let left = tree.push("left", 0, 5);
    let right = tree.push("right", 5, 5);
    tree.offer(root, left).unwrap();
    tree.offer(root, right).unwrap();

    let before = common::shape(&tree, root);
    let spanning = tree.push("spanning", 3, 4);
    let err = tree.offer(root, spanning).unwrap_err();

    assert!(matches!(err, TreeError::Clash { .. }));
    assert!(err.recoverable());
    assert_eq!(err.trace().last(), Some(&left));
    assert_eq!(common::shape(&tree, root), before);
    assert!(tree.node(spanning).is_detached());
}

#[test]
fn duplicate_range_and_weight_take_over_matrix() {
    let mut tree = SyntaxTree::new();
    let root = tree.push("root", 0, 10);
    let resident = tree.push("resident", 3, 3);
    tree.offer(root, resident).unwrap();

    let before = common::shape(&tree, root);
    let duplicate = tree.push("duplicate", 3, 3);
    let err = tree.offer(root, duplicate).unwrap_err();

    assert!(matches!(err, TreeError::Takeover { .. }));
    assert_eq!(err.trace().last(), Some(&resident));
    assert_eq!(common::shape(&tree, root), before);
    assert!(tree.node(duplicate).is_detached());
}

#[test]
fn lower_weight_wraps_resident_matrix() {
    let mut tree = SyntaxTree::new();
    let resident = tree.push_weighted("resident", 0, 10, 5);
    let inner = tree.push("inner", 2, 2);
    tree.offer(resident, inner).unwrap();

    // Higher weight slides underneath the resident, adopting its children.
    let lining = tree.push_weighted("lining", 0, 10, 8);
    tree.offer(resident, lining).unwrap();
    assert_eq!(tree.node(resident).child(), Some(lining));
    assert_eq!(tree.node(lining).child(), Some(inner));

    // Lower weight wraps the resident instead.
    let shell = tree.push_weighted("shell", 0, 10, 2);
    tree.offer(resident, shell).unwrap();
    assert_eq!(tree.node(shell).child(), Some(resident));
    assert_eq!(tree.parent(resident), Some(shell));
    common::assert_invariants(&tree, shell);
}

#[test]
fn pop_inlines_children_matrix() {
    let mut tree = SyntaxTree::new();
    let root = tree.push("root", 0, 10);
    let x = tree.push("x", 2, 5);
    let a = tree.push("a", 2, 2);
    let b = tree.push("b", 4, 3);
    let y = tree.push("y", 7, 2);
    for node in [x, a, b, y] {
        tree.offer(root, node).unwrap();
    }
    assert_eq!(kids(&tree, root), ["x", "y"]);
    assert_eq!(kids(&tree, x), ["a", "b"]);

    tree.pop(x).unwrap();

    assert_eq!(kids(&tree, root), ["a", "b", "y"]);
    assert!(tree.node(x).is_detached());
    common::assert_invariants(&tree, root);
}

#[test]
fn remove_detaches_whole_subtree_matrix() {
    let mut tree = SyntaxTree::new();
    let root = tree.push("root", 0, 10);
    let x = tree.push("x", 2, 5);
    let a = tree.push("a", 2, 2);
    let b = tree.push("b", 4, 3);
    let y = tree.push("y", 7, 2);
    for node in [x, a, b, y] {
        tree.offer(root, node).unwrap();
    }

    tree.remove(x).unwrap();

    assert_eq!(kids(&tree, root), ["y"]);
    assert_eq!(tree.node(x).top(), None);
    assert_eq!(tree.node(x).right(), None);
    assert_eq!(kids(&tree, x), ["a", "b"]);
    common::assert_invariants(&tree, root);
    common::assert_invariants(&tree, x);
}

#[test]
fn clear_detaches_child_list_matrix() {
    let mut tree = SyntaxTree::new();
    let root = tree.push("root", 0, 10);
    let x = tree.push("x", 2, 5);
    let a = tree.push("a", 2, 2);
    let b = tree.push("b", 4, 3);
    for node in [x, a, b] {
        tree.offer(root, node).unwrap();
    }

    tree.clear(x).unwrap();

    assert_eq!(kids(&tree, x), Vec::<&str>::new());
    assert_eq!(tree.node(x).top(), Some(root));
    // The detached child list stands alone, rooted at its former head.
    assert_eq!(tree.node(a).top(), None);
    assert_eq!(tree.node(a).left(), None);
    assert_eq!(tree.node(a).right(), Some(b));
    common::assert_invariants(&tree, a);
}

#[test]
fn offering_between_structures_transfers_ownership_matrix() {
    let mut tree = SyntaxTree::new();
    let second = tree.push("second", 20, 10);
    let mover = tree.push("mover", 22, 3);
    let inner = tree.push("inner", 23, 1);

    tree.offer(second, mover).unwrap();
    tree.offer(second, inner).unwrap();
    assert_eq!(kids(&tree, mover), ["inner"]);

    // Re-offering elsewhere pops the node out first; its children inline
    // into the old structure.
    let elsewhere = tree.push("elsewhere", 22, 4);
    tree.offer(elsewhere, mover).unwrap();
    assert_eq!(tree.node(elsewhere).child(), Some(mover));
    assert_eq!(kids(&tree, second), ["inner"]);
    common::assert_invariants(&tree, second);
    common::assert_invariants(&tree, elsewhere);
}

#[test]
fn dry_run_previews_the_slot_matrix() {
    use mist::Side;

    let mut tree = SyntaxTree::new();
    let root = tree.push("root", 0, 10);
    let a = tree.push("a", 0, 2);
    let c = tree.push("c", 6, 2);
    tree.offer(root, a).unwrap();
    tree.offer(root, c).unwrap();

    // A gap between the two children.
    let slot = tree.compute_at(root, 3, 2, 0).unwrap();
    assert_eq!(slot.side(Side::Left), Some(a));
    assert_eq!(slot.side(Side::Right), Some(c));
    assert_eq!(slot.side(Side::Top), None);
    assert_eq!(slot.sides().count(), 2);

    // Inside a leaf child.
    let slot = tree.compute_at(root, 0, 1, 0).unwrap();
    assert_eq!(slot.side(Side::Top), Some(a));
    assert_eq!(slot.sides().count(), 1);

    // The dry run is a preview: offering the same range lands exactly there.
    let gap = tree.push("gap", 3, 2);
    let planned = tree.compute(root, gap).unwrap();
    tree.offer(root, gap).unwrap();
    assert_eq!(tree.node(gap).left(), planned.left);
    assert_eq!(tree.node(gap).right(), planned.right);
    common::assert_invariants(&tree, root);
}

#[test]
fn manual_pushes_place_without_the_algebra_matrix() {
    let mut tree = SyntaxTree::new();
    let root = tree.push("root", 0, 10);
    let a = tree.push("a", 9, 1);
    let b = tree.push("b", 1, 1);
    let c = tree.push("c", 4, 1);
    let d = tree.push("d", 7, 1);

    tree.push_child(root, a).unwrap();
    tree.push_previous(a, b).unwrap();
    tree.push_next(b, c).unwrap();
    assert_eq!(kids(&tree, root), ["b", "c", "a"]);
    assert_eq!(tree.parent(a), Some(root));

    // Pushing displaces the current first child rightward.
    tree.push_child(root, d).unwrap();
    assert_eq!(kids(&tree, root), ["d", "b", "c", "a"]);

    // Only detached nodes can be pushed.
    let err = tree.push_child(root, a).unwrap_err();
    assert!(matches!(err, TreeError::Illegal { .. }));
}

#[test]
fn offer_onto_itself_is_illegal_matrix() {
    let mut tree = SyntaxTree::new();
    let solo = tree.push("solo", 0, 4);
    let err = tree.offer(solo, solo).unwrap_err();
    assert!(matches!(err, TreeError::Illegal { .. }));
    assert!(err.is_illegal());
}
