// src/core/kdtree/tree.rs

//! Defines the core KD-Tree structures: `KdNode` and `KdTree`.

use std::fmt;

use super::builder;
use super::error::KdTreeError;
use super::search;
use crate::core::vector::Vector;

/// Represents a node in the KD-Tree.
///
/// Every node holds one vector, the median of its subtree along `dim`.
/// Vectors whose `dim` component is lesser or equal sit in the left subtree,
/// the remainder in the right one. A node without children is a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct KdNode {
    pub(super) dim: usize,
    pub(super) median: Vector,
    pub(super) left: Option<Box<KdNode>>,
    pub(super) right: Option<Box<KdNode>>,
}

impl KdNode {
    pub(super) const fn leaf(dim: usize, median: Vector) -> Self {
        Self { dim, median, left: None, right: None }
    }

    /// Split axis of this node.
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    #[must_use]
    pub const fn median(&self) -> &Vector {
        &self.median
    }

    #[must_use]
    pub fn left(&self) -> Option<&KdNode> {
        self.left.as_deref()
    }

    #[must_use]
    pub fn right(&self) -> Option<&KdNode> {
        self.right.as_deref()
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn depth(&self) -> usize {
        let left = self.left().map_or(0, KdNode::depth);
        let right = self.right().map_or(0, KdNode::depth);
        1 + left.max(right)
    }

    fn render_into(&self, out: &mut fmt::Formatter<'_>, prefix: &str, branch: &str) -> fmt::Result {
        let child_prefix = format!("{}     ", prefix);
        if let Some(left) = self.left() {
            left.render_into(out, &child_prefix, "    ┌────")?;
        }
        writeln!(out, "{}{} ({}, {})", prefix, branch, self.dim, self.median)?;
        if let Some(right) = self.right() {
            right.render_into(out, &child_prefix, "    └────")?;
        }
        Ok(())
    }
}

/// Represents a KD-Tree.
///
/// Immutable once built, so a shared reference can be queried from any
/// number of threads at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KdTree {
    root: Option<Box<KdNode>>,
    dimension: usize,
    len: usize,
}

impl KdTree {
    /// Creates a tree holding no vectors. Every query against it yields `None`.
    #[must_use]
    pub const fn empty() -> Self {
        Self { root: None, dimension: 0, len: 0 }
    }

    pub(super) fn from_root(root: KdNode, dimension: usize, len: usize) -> Self {
        Self { root: Some(Box::new(root)), dimension, len }
    }

    /// Builds a tree from `vectors`. See [`builder::build_kdtree`].
    ///
    /// # Errors
    ///
    /// Returns `KdTreeError::DimensionMismatch` or `KdTreeError::ZeroDimension`
    /// if the vectors cannot form one data set.
    pub fn build(vectors: Vec<Vector>) -> Result<Self, KdTreeError> {
        builder::build_kdtree(vectors)
    }

    #[must_use]
    pub fn root(&self) -> Option<&KdNode> {
        self.root.as_deref()
    }

    /// Dimensionality of the indexed vectors (0 for an empty tree).
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of indexed vectors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root().map_or(0, KdNode::depth)
    }

    /// Finds the indexed vector closest to `query` under squared Euclidean
    /// distance. An empty tree answers `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `KdTreeError::DimensionMismatch` if `query` does not have the
    /// tree's dimensionality, and `KdTreeError::NonFiniteComponent` if it
    /// holds a NaN or infinite value.
    pub fn find_nearest(&self, query: &[f64]) -> Result<Option<&Vector>, KdTreeError> {
        let Some(root) = self.root() else {
            return Ok(None);
        };
        if query.len() != self.dimension {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dimension,
                found: query.len(),
                position: 0,
            });
        }
        if let Some(axis) = query.iter().position(|c| !c.is_finite()) {
            return Err(KdTreeError::NonFiniteComponent { position: 0, axis });
        }
        Ok(search::find_nearest(Some(root), query).map(KdNode::median))
    }

    /// Renders the tree sideways, one node per line as `(dim, median)`,
    /// left subtrees above their parent and right subtrees below.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KdTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => root.render_into(f, "", "    "),
            None => Ok(()),
        }
    }
}
