// src/core/kdtree/builder.rs

//! Logic for building a KD-Tree from a set of vectors.

use std::mem;

use super::dataset::{DataSet, MedianSplit};
use super::error::KdTreeError;
use super::tree::{KdNode, KdTree};
use crate::core::vector::Vector;

/// Builds a KD-Tree from a list of vectors.
///
/// The dimensionality is taken from the first vector and the root splits on
/// axis 0. The vectors are moved into the tree's nodes; none is copied.
///
/// # Arguments
/// * `vectors`: The vectors to index. An empty list yields an empty tree.
///
/// # Returns
/// A `Result` containing the built `KdTree` or a `KdTreeError` if the vectors
/// do not all have the same, non-zero, length. Validation happens before any
/// node is built.
pub fn build_kdtree(mut vectors: Vec<Vector>) -> Result<KdTree, KdTreeError> {
    if vectors.is_empty() {
        return Ok(KdTree::empty());
    }

    let len = vectors.len();
    let dataset = DataSet::new(&mut vectors)?;
    let dimension = dataset.max_dim();
    let root = build_node(dataset)?;

    tracing::debug!(vectors = len, dimension, "built kd-tree");
    Ok(KdTree::from_root(root, dimension, len))
}

/// Recursively builds the node for `dataset`.
///
/// A single vector becomes a leaf. Otherwise the data set is sorted on its
/// split axis and split at the median; the left half always holds at least
/// one vector, the right half may be empty and then yields no child.
///
/// Medians are moved out of the backing storage. A split never hands the
/// median's slot to either half, so no later level observes the hole.
pub(super) fn build_node(mut dataset: DataSet<'_>) -> Result<KdNode, KdTreeError> {
    let dim = dataset.dim();

    if let [only] = dataset.items_mut() {
        return Ok(KdNode::leaf(dim, mem::take(only)));
    }

    dataset.sort_by_dimension();
    let MedianSplit { left, right, median } = dataset
        .split_by_median_and_dim()
        .ok_or_else(|| KdTreeError::InternalError("Attempted to build node from empty data set.".to_string()))?;

    let median = mem::take(median);
    let left_child = build_node(left)?;
    let right_child = if right.is_empty() { None } else { Some(Box::new(build_node(right)?)) };

    Ok(KdNode {
        dim,
        median,
        left: Some(Box::new(left_child)),
        right: right_child,
    })
}
