//! Dry-run placement: where would a range go?
//!
//! For each insertion routine of [`crate::offer`] this module holds the pure
//! twin that performs the same walk without mutating. The result is a
//! [`Fantom`]: the immutable snapshot of the four neighbors the inserted
//! node would end up with. [`crate::offer`] itself is the application of a
//! `Fantom`, so the dry run and the real insertion cannot disagree.
//!
//! The walk starts at any node of the target structure and dispatches on
//! [`Relation`] at every step:
//!
//! - `Equal` ranges descend the weight-ordered chain of identical ranges;
//! - `Child` descends into the child generation, walking siblings rightward;
//! - `Parent` climbs the parent chain until the incoming range fits;
//! - `Next`/`Previous` walk the sibling axis, delegating upward when the
//!   incoming range leaves the current generation;
//! - `Clash` rejects, and impossible configurations report corruption.

use crate::algebra::{Intersection, Precedence, Relation};
use crate::error::TreeError;
use crate::nav;
use crate::node::{Node, NodeId};
use crate::range::SyntaxRange;

/// A side of a node, used to key the neighbor map of a dry run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

/// An immutable snapshot of would-be neighbors.
///
/// A fantom takes no part in any linked structure and compares structurally,
/// unlike managed nodes whose identity is their arena index. At most three
/// sides are set, and `top` and `left` are never both set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fantom {
    pub top: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub bottom: Option<NodeId>,
}

impl Fantom {
    /// The would-be neighbor on `side`.
    pub fn side(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Top => self.top,
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    /// The sides that are set, paired with their nodes.
    pub fn sides(&self) -> impl Iterator<Item = (Side, NodeId)> {
        [
            (Side::Top, self.top),
            (Side::Left, self.left),
            (Side::Right, self.right),
            (Side::Bottom, self.bottom),
        ]
        .into_iter()
        .filter_map(|(side, id)| Some((side, id?)))
    }
}

/// Computes the position `incoming` would take if offered to the structure
/// containing `this`, without mutating anything.
pub fn compute<T>(
    nodes: &[Node<T>],
    this: NodeId,
    incoming: SyntaxRange,
) -> Result<Fantom, TreeError> {
    let result = match Relation::of(nodes[this as usize].range(), incoming.range) {
        Relation::Clash => Err(TreeError::clash(this)),
        Relation::Equal => compute_equal(nodes, this, incoming),
        Relation::Child => compute_child(nodes, this, incoming),
        Relation::Parent => compute_parent(nodes, this, incoming),
        Relation::Next => compute_next(nodes, this, incoming),
        Relation::Previous => compute_previous(nodes, this, incoming),
    };
    result.map_err(|e| e.via(this))
}

fn intersection<T>(nodes: &[Node<T>], id: NodeId, incoming: SyntaxRange) -> Intersection {
    Intersection::of(nodes[id as usize].range(), incoming.range)
}

/// `incoming` has the same range as `this`. Weight decides the nesting
/// order: among identical ranges, weights strictly increase downward.
pub fn compute_equal<T>(
    nodes: &[Node<T>],
    this: NodeId,
    incoming: SyntaxRange,
) -> Result<Fantom, TreeError> {
    // Normalize to the top of the equal-range chain, so every entry node of
    // the chain resolves to the same slot.
    let mut curr = this;
    while let Some(top) = nodes[curr as usize].top {
        if intersection(nodes, top, incoming) != Intersection::Same {
            break;
        }
        curr = top;
    }

    loop {
        match Precedence::of(nodes[curr as usize].weight(), incoming.weight) {
            Precedence::Equal => return Err(TreeError::takeover(curr)),
            Precedence::Higher => {
                // `incoming` wraps `curr`: it takes over the slot and adopts
                // `curr` (with its subtree) as the only child.
                let node = &nodes[curr as usize];
                return Ok(Fantom {
                    top: node.top,
                    left: node.left,
                    right: node.right,
                    bottom: Some(curr),
                });
            }
            Precedence::Lower => match nodes[curr as usize].bottom {
                None => {
                    return Ok(Fantom {
                        top: Some(curr),
                        ..Fantom::default()
                    })
                }
                Some(below) if intersection(nodes, below, incoming) == Intersection::Same => {
                    curr = below;
                }
                Some(below) => {
                    // Slot between `curr` and its children; the whole child
                    // list fits inside `incoming` and moves with its head.
                    return Ok(Fantom {
                        top: Some(curr),
                        bottom: Some(below),
                        ..Fantom::default()
                    });
                }
            },
        }
    }
}

/// `incoming` fits strictly inside `this`.
pub fn compute_child<T>(
    nodes: &[Node<T>],
    this: NodeId,
    incoming: SyntaxRange,
) -> Result<Fantom, TreeError> {
    let Some(first) = nodes[this as usize].bottom else {
        return Ok(Fantom {
            top: Some(this),
            ..Fantom::default()
        });
    };

    use Intersection::*;
    match intersection(nodes, first, incoming) {
        Same => compute_equal(nodes, first, incoming),
        Fragment | Start | End => compute_child(nodes, first, incoming),
        Before | Back => Ok(Fantom {
            top: Some(this),
            right: Some(first),
            ..Fantom::default()
        }),
        Front | After => walk_right(nodes, first, incoming),
        Container | Ahead | Behind => {
            // `incoming` becomes the new first child, adopting the leading
            // run of current children it encloses.
            let rest = contained_run_right(nodes, first, incoming)?;
            Ok(Fantom {
                top: Some(this),
                right: rest,
                bottom: Some(first),
                ..Fantom::default()
            })
        }
        Overflow | Underflow => Err(TreeError::clash(first)),
    }
}

/// `incoming` strictly encloses `this`.
pub fn compute_parent<T>(
    nodes: &[Node<T>],
    this: NodeId,
    incoming: SyntaxRange,
) -> Result<Fantom, TreeError> {
    use Intersection::*;
    if let Some(parent) = nav::parent(nodes, this) {
        return match intersection(nodes, parent, incoming) {
            Same => compute_equal(nodes, parent, incoming),
            Container | Ahead | Behind => compute_parent(nodes, parent, incoming),
            Fragment | Start | End => compute_child(nodes, parent, incoming),
            Overflow | Underflow => Err(TreeError::clash(parent)),
            // Reachable only through an empty descendant sitting on the
            // parent's edge; the incoming range then belongs beside the
            // parent, exactly as if it had been offered to the parent.
            Front | After => compute_next(nodes, parent, incoming),
            Before | Back => compute_previous(nodes, parent, incoming),
        };
    }

    // Topmost generation. `incoming` adopts the contiguous run of siblings
    // it encloses around `this` and splices in between the outer ones.
    let mut start = this;
    let left = loop {
        let Some(left) = nodes[start as usize].left else {
            break None;
        };
        match intersection(nodes, left, incoming) {
            Container | Ahead | Behind => start = left,
            Front | After => break Some(left),
            Overflow | Underflow => return Err(TreeError::clash(left)),
            Same | Fragment | Start | End | Before | Back => {
                return Err(TreeError::corrupted(
                    "sibling order broken beside an enclosed run",
                    left,
                ))
            }
        }
    };
    let rest = contained_run_right(nodes, this, incoming)?;
    Ok(Fantom {
        left,
        right: rest,
        bottom: Some(start),
        ..Fantom::default()
    })
}

/// `incoming` lies at or past the terminal of `this`.
pub fn compute_next<T>(
    nodes: &[Node<T>],
    this: NodeId,
    incoming: SyntaxRange,
) -> Result<Fantom, TreeError> {
    use Intersection::*;
    let Some(parent) = nav::parent(nodes, this) else {
        return walk_right(nodes, this, incoming);
    };
    match intersection(nodes, parent, incoming) {
        Fragment | Start | End => walk_right(nodes, this, incoming),
        Front | After => compute_next(nodes, parent, incoming),
        Overflow | Underflow => Err(TreeError::clash(parent)),
        Same | Container | Ahead | Behind | Before | Back => Err(TreeError::corrupted(
            "parent does not enclose its descendant",
            parent,
        )),
    }
}

/// `incoming` lies at or before the offset of `this`.
pub fn compute_previous<T>(
    nodes: &[Node<T>],
    this: NodeId,
    incoming: SyntaxRange,
) -> Result<Fantom, TreeError> {
    use Intersection::*;
    let Some(parent) = nav::parent(nodes, this) else {
        return walk_left(nodes, this, incoming);
    };
    match intersection(nodes, parent, incoming) {
        Fragment | Start | End => walk_left(nodes, this, incoming),
        Before | Back => compute_previous(nodes, parent, incoming),
        Overflow | Underflow => Err(TreeError::clash(parent)),
        Same | Container | Ahead | Behind | Front | After => Err(TreeError::corrupted(
            "parent does not enclose its descendant",
            parent,
        )),
    }
}

/// Walks the sibling axis rightward from `from`; `incoming` is known to lie
/// strictly past `from`.
fn walk_right<T>(
    nodes: &[Node<T>],
    from: NodeId,
    incoming: SyntaxRange,
) -> Result<Fantom, TreeError> {
    use Intersection::*;
    let mut sibling = from;
    loop {
        let Some(next) = nodes[sibling as usize].right else {
            return Ok(Fantom {
                left: Some(sibling),
                ..Fantom::default()
            });
        };
        match intersection(nodes, next, incoming) {
            Same => return compute_equal(nodes, next, incoming),
            Fragment | Start | End => return compute_child(nodes, next, incoming),
            Front | After => sibling = next,
            Before | Back => {
                return Ok(Fantom {
                    left: Some(sibling),
                    right: Some(next),
                    ..Fantom::default()
                })
            }
            Container | Ahead | Behind => {
                let rest = contained_run_right(nodes, next, incoming)?;
                return Ok(Fantom {
                    left: Some(sibling),
                    right: rest,
                    bottom: Some(next),
                    ..Fantom::default()
                });
            }
            Overflow | Underflow => return Err(TreeError::clash(next)),
        }
    }
}

/// Walks the sibling axis leftward from `from`; `incoming` is known to lie
/// strictly before `from`.
fn walk_left<T>(
    nodes: &[Node<T>],
    from: NodeId,
    incoming: SyntaxRange,
) -> Result<Fantom, TreeError> {
    use Intersection::*;
    let mut sibling = from;
    loop {
        let Some(previous) = nodes[sibling as usize].left else {
            // `incoming` becomes the new head of this generation.
            return Ok(Fantom {
                top: nodes[sibling as usize].top,
                right: Some(sibling),
                ..Fantom::default()
            });
        };
        match intersection(nodes, previous, incoming) {
            Same => return compute_equal(nodes, previous, incoming),
            Fragment | Start | End => return compute_child(nodes, previous, incoming),
            Before | Back => sibling = previous,
            Front | After => {
                return Ok(Fantom {
                    left: Some(previous),
                    right: Some(sibling),
                    ..Fantom::default()
                })
            }
            Container | Ahead | Behind => {
                // `incoming` adopts the run of enclosed siblings ending at
                // `previous` and takes the run head's slot.
                let (start, left, top) = contained_run_left(nodes, previous, incoming)?;
                return Ok(Fantom {
                    top,
                    left,
                    right: Some(sibling),
                    bottom: Some(start),
                });
            }
            Overflow | Underflow => return Err(TreeError::clash(previous)),
        }
    }
}

/// Extends a run of enclosed siblings rightward from `first` (already known
/// to be enclosed by `incoming`) and returns the first sibling past the run,
/// which must lie strictly after `incoming`.
fn contained_run_right<T>(
    nodes: &[Node<T>],
    first: NodeId,
    incoming: SyntaxRange,
) -> Result<Option<NodeId>, TreeError> {
    use Intersection::*;
    let mut last = first;
    loop {
        let Some(next) = nodes[last as usize].right else {
            return Ok(None);
        };
        match intersection(nodes, next, incoming) {
            Container | Ahead | Behind => last = next,
            Before | Back => return Ok(Some(next)),
            Overflow | Underflow => return Err(TreeError::clash(next)),
            Same | Fragment | Start | End | Front | After => {
                return Err(TreeError::corrupted(
                    "sibling order broken beside an enclosed run",
                    next,
                ))
            }
        }
    }
}

/// Extends a run of enclosed siblings leftward from `last` (already known to
/// be enclosed by `incoming`). Returns the run head together with the
/// neighbors `incoming` inherits from it: the sibling to its left, or the
/// generation's `top` when the run head was the leftmost child.
fn contained_run_left<T>(
    nodes: &[Node<T>],
    last: NodeId,
    incoming: SyntaxRange,
) -> Result<(NodeId, Option<NodeId>, Option<NodeId>), TreeError> {
    use Intersection::*;
    let mut start = last;
    loop {
        let Some(previous) = nodes[start as usize].left else {
            return Ok((start, None, nodes[start as usize].top));
        };
        match intersection(nodes, previous, incoming) {
            Container | Ahead | Behind => start = previous,
            Front | After => return Ok((start, Some(previous), None)),
            Overflow | Underflow => return Err(TreeError::clash(previous)),
            Same | Fragment | Start | End | Before | Back => {
                return Err(TreeError::corrupted(
                    "sibling order broken beside an enclosed run",
                    previous,
                ))
            }
        }
    }
}
