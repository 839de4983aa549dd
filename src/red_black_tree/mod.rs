//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes are stored in a `TypedArena` and linked by handle. A single black sentinel slot stands in
//! for every absent child and for the parent of the root.

mod insert;
mod map;
mod node;
mod remove;
mod set;
mod tree;
mod verify;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
pub use self::verify::InvariantViolation;
