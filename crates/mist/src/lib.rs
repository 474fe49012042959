//! mist: managed index syntax tree.
//!
//! A self-ordering two-dimensional tree over half-open byte ranges of an
//! external text buffer, built for compiler tooling that tracks nested
//! syntactic fragments. Every node carries a range and a weight; offering a
//! node to any member of a structure walks the range algebra and installs it
//! at the unique legal position, or rejects with a typed error and no
//! mutation.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`range`] | [`Range`] and [`SyntaxRange`] value types |
//! [`algebra`] | [`Intersection`], [`Dominance`], [`Relation`], [`Precedence`] |
//! [`node`] | [`Node`] and [`NodeId`], the arena-indexed node |
//! [`link`] | the four directional link mutators |
//! [`nav`] | derived navigation, `hierarchy`, `collect`, indexed access |
//! [`detach`] | `pop`, `remove`, `clear` |
//! [`compute`] | dry-run placement, [`Fantom`] and [`Side`] |
//! [`offer`] | range-aware insertion |
//! [`manual`] | explicit `push_child` / `push_next` / `push_previous` |
//! [`enclosure`] | balanced bracket-pair matching over delimiter streams |
//! [`print`] | box-drawing structure dumps |
//! [`fuzzer`] | seeded random input for the differential test suites |
//! [`error`] | [`TreeError`] |
//!
//! # Example
//!
//! ```
//! use mist::SyntaxTree;
//!
//! let mut tree = SyntaxTree::new();
//! let root = tree.push("root", 0, 10);
//! let inner = tree.push("inner", 2, 3);
//! let outer = tree.push("outer", 1, 6);
//!
//! tree.offer(root, inner).unwrap();
//! tree.offer(root, outer).unwrap();
//!
//! // `outer` slid between `root` and `inner`.
//! assert_eq!(tree.node(root).child(), Some(outer));
//! assert_eq!(tree.node(outer).child(), Some(inner));
//! ```

pub mod algebra;
pub mod compute;
pub mod detach;
pub mod enclosure;
pub mod error;
pub mod fuzzer;
pub mod link;
pub mod manual;
pub mod nav;
pub mod node;
pub mod offer;
pub mod print;
pub mod range;
pub mod tree;

pub use algebra::{Dominance, Intersection, Precedence, Relation};
pub use compute::{Fantom, Side};
pub use enclosure::{enclosures, enclosures_in, Enclosure, Role};
pub use error::TreeError;
pub use node::{Node, NodeId};
pub use range::{Range, SyntaxRange};
pub use tree::SyntaxTree;
