//! The range algebra: four closed enumerations describing how two ranges
//! relate.
//!
//! | Module | Contents |
//! |--------|----------|
//! [`intersection`] | [`Intersection`], the 13-way decision table |
//! [`dominance`] | [`Dominance`], the unoriented 5-way quotient |
//! [`relation`] | [`Relation`], the oriented 6-way quotient |
//! [`precedence`] | [`Precedence`], the weight tie-break |
//!
//! All computations are pure, constant-time, and total on ordered endpoints
//! (`i <= j`, `s <= e`). Swapping the two ranges maps every value to its
//! `opposite`.

pub mod dominance;
pub mod intersection;
pub mod precedence;
pub mod relation;

pub use dominance::Dominance;
pub use intersection::Intersection;
pub use precedence::Precedence;
pub use relation::Relation;
