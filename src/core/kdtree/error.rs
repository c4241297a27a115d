// src/core/kdtree/error.rs

use std::fmt;

/// Custom error types for KD-Tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A data set needs at least one vector.
    EmptyInput,
    /// Vectors with zero components cannot be split on any axis.
    ZeroDimension,
    /// A vector's length differs from the data set's dimensionality.
    /// `position` is the index of the offending vector in the input.
    DimensionMismatch { expected: usize, found: usize, position: usize },
    /// The requested split axis does not exist.
    AxisOutOfBounds { axis: usize, dimension: usize },
    /// A component is NaN or infinite. `position` is the index of the
    /// offending vector in the input (0 for a query).
    NonFiniteComponent { position: usize, axis: usize },
    InternalError(String),
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "KD-Tree Empty Input: a data set needs at least one vector"),
            Self::ZeroDimension => write!(f, "KD-Tree Dimension Mismatch: dimension cannot be 0"),
            Self::DimensionMismatch { expected, found, position } => write!(
                f,
                "KD-Tree Dimension Mismatch: expected dimension {}, but vector {} has dimension {}",
                expected, position, found
            ),
            Self::AxisOutOfBounds { axis, dimension } => write!(
                f,
                "KD-Tree Axis Out Of Bounds: axis {} for dimension {}",
                axis, dimension
            ),
            Self::NonFiniteComponent { position, axis } => write!(
                f,
                "KD-Tree Non-Finite Component: vector {} has a NaN or infinite value on axis {}",
                position, axis
            ),
            Self::InternalError(msg) => write!(f, "KD-Tree Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for KdTreeError {}
