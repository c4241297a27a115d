// src/core/kdtree/search.rs

//! Logic for performing nearest-neighbor search in a KD-Tree.

use super::tree::KdNode;
use crate::core::vector::squared_euclidean_distance;

/// Finds the node whose median is closest to `query` in the subtree rooted
/// at `node`.
///
/// The search descends the side of each split that contains the query,
/// then backtracks: the other side is only visited when the query lies
/// closer to the splitting plane than to the best vector found so far.
/// Every comparison is strict, so among equidistant vectors the first one
/// found wins.
///
/// `query` must have the tree's dimensionality; `KdTree::find_nearest`
/// checks this before calling in.
pub(super) fn find_nearest<'a>(node: Option<&'a KdNode>, query: &[f64]) -> Option<&'a KdNode> {
    let node = node?;
    let axis = node.dim;
    let median = node.median.as_slice();

    // Ties on the split axis go left.
    let went_left = query[axis] <= median[axis];
    let candidate = if went_left {
        find_nearest(node.left(), query)
    } else {
        find_nearest(node.right(), query)
    };

    let mut best = match candidate {
        Some(candidate)
            if squared_euclidean_distance(median, query)
                < squared_euclidean_distance(&candidate.median, query) =>
        {
            node
        }
        Some(candidate) => candidate,
        None => node,
    };

    let best_distance = squared_euclidean_distance(&best.median, query);
    let plane_gap = squared_euclidean_distance(&[median[axis]], &[query[axis]]);
    if plane_gap < best_distance {
        let sibling = if went_left { node.right() } else { node.left() };
        if let Some(sibling) = find_nearest(sibling, query) {
            if squared_euclidean_distance(&sibling.median, query) < best_distance {
                best = sibling;
            }
        }
    }

    Some(best)
}
