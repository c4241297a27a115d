// src/core/kdtree/dataset.rs

//! Views over the vectors of one subtree, and the median split that produces
//! the views of its children.

use super::error::KdTreeError;
use crate::core::vector::Vector;

/// The vectors under consideration for one subtree.
///
/// `items` borrows a run of a larger backing collection. Sorting reorders
/// that backing storage in place, and splitting hands out disjoint halves of
/// it, so no vector is copied while the tree is being built.
#[derive(Debug)]
pub struct DataSet<'a> {
    items: &'a mut [Vector],
    max_dim: usize,
    dim: usize,
}

/// Result of [`DataSet::split_by_median_and_dim`].
#[derive(Debug)]
pub struct MedianSplit<'a> {
    pub left: DataSet<'a>,
    pub right: DataSet<'a>,
    pub median: &'a mut Vector,
}

impl<'a> DataSet<'a> {
    /// Creates the root data set: the dimensionality is taken from the first
    /// vector and splitting starts on axis 0.
    ///
    /// # Errors
    ///
    /// * `KdTreeError::EmptyInput` if `items` is empty.
    /// * `KdTreeError::ZeroDimension` if the vectors have no components.
    /// * `KdTreeError::DimensionMismatch` naming the first vector whose length
    ///   differs from the first one.
    /// * `KdTreeError::NonFiniteComponent` naming the first vector with a NaN
    ///   or infinite component.
    pub fn new(items: &'a mut [Vector]) -> Result<Self, KdTreeError> {
        let max_dim = items.first().map(Vector::dimension).ok_or(KdTreeError::EmptyInput)?;
        Self::with_axis(items, max_dim, 0)
    }

    /// Creates a data set with an explicit dimensionality and split axis.
    ///
    /// # Errors
    ///
    /// Same as [`DataSet::new`], plus `KdTreeError::AxisOutOfBounds` when
    /// `dim >= max_dim`.
    pub fn with_axis(items: &'a mut [Vector], max_dim: usize, dim: usize) -> Result<Self, KdTreeError> {
        if items.is_empty() {
            return Err(KdTreeError::EmptyInput);
        }
        if max_dim == 0 {
            return Err(KdTreeError::ZeroDimension);
        }
        if dim >= max_dim {
            return Err(KdTreeError::AxisOutOfBounds { axis: dim, dimension: max_dim });
        }
        if let Some((position, v)) = items.iter().enumerate().find(|(_, v)| v.dimension() != max_dim) {
            return Err(KdTreeError::DimensionMismatch {
                expected: max_dim,
                found: v.dimension(),
                position,
            });
        }
        for (position, v) in items.iter().enumerate() {
            if let Some(axis) = v.iter().position(|c| !c.is_finite()) {
                return Err(KdTreeError::NonFiniteComponent { position, axis });
            }
        }
        Ok(Self { items, max_dim, dim })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dimensionality shared by every vector.
    pub const fn max_dim(&self) -> usize {
        self.max_dim
    }

    /// Split axis of this level.
    pub const fn dim(&self) -> usize {
        self.dim
    }

    pub fn items(&self) -> &[Vector] {
        &*self.items
    }

    pub fn items_mut(&mut self) -> &mut [Vector] {
        &mut *self.items
    }

    /// Orders the items ascending by their component on the split axis.
    ///
    /// The sort is stable. Every component is finite once the data set exists.
    pub fn sort_by_dimension(&mut self) {
        let dim = self.dim;
        self.items.sort_by(|a, b| a[dim].total_cmp(&b[dim]));
    }

    /// Splits a sorted data set around its median.
    ///
    /// With `n` items the median is `items[n / 2]`; everything before it goes
    /// left and everything after it goes right. For two items this makes the
    /// larger one the median, with a single-item left half and an empty right
    /// half. Both halves split on the next axis.
    ///
    /// Returns `None` for an empty data set.
    pub fn split_by_median_and_dim(self) -> Option<MedianSplit<'a>> {
        let Self { items, max_dim, dim } = self;
        let next_dim = (dim + 1) % max_dim;
        let median_idx = items.len() / 2;

        let (left, rest) = items.split_at_mut(median_idx);
        let (median, right) = rest.split_first_mut()?;

        Some(MedianSplit {
            left: Self { items: left, max_dim, dim: next_dim },
            right: Self { items: right, max_dim, dim: next_dim },
            median,
        })
    }
}
