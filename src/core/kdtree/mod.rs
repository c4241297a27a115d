// src/core/kdtree/mod.rs

//! KD-Tree construction and exact nearest-neighbor search.
//!
//! A tree is built once from a fixed collection of equal-length vectors by
//! recursive median splits, rotating the split axis with depth. The built
//! [`KdTree`] is immutable and answers [`KdTree::find_nearest`] queries.

// Re-export key components for easier use.
pub use self::builder::build_kdtree;
pub use self::dataset::{DataSet, MedianSplit};
pub use self::error::KdTreeError;
pub use self::tree::{KdNode, KdTree};

// Modules within the kdtree module
mod builder;
mod dataset;
mod error;
mod search;
mod tree;
