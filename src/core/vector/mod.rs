// src/core/vector/mod.rs

//! The `Vector` point type, its distance function and the flat-file loader.

pub mod distance;
pub mod loader;

pub use distance::squared_euclidean_distance;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// An ordered, fixed-length sequence of real numbers.
///
/// Serializes as a plain JSON array, e.g. `[1.0, 2.3, 9.87]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector(pub Vec<f64>);

impl Vector {
    #[must_use]
    pub const fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// Number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Vector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", component)?;
        }
        write!(f, "]")
    }
}
