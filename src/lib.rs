//! An arena-backed red black tree exposed as an ordered map and an ordered set.
//!
//! # Examples
//!
//! ```
//! use rb_collections::red_black_tree::RedBlackSet;
//!
//! let mut set: RedBlackSet<u32> = (0..16).collect();
//! assert!(set.remove(&7).is_some());
//! assert_eq!(set.successor(&6), Some(&8));
//! assert!(set.verify());
//! ```

mod entry;
pub mod arena;
pub mod red_black_tree;

pub use crate::red_black_tree::{InvariantViolation, RedBlackMap, RedBlackSet};
