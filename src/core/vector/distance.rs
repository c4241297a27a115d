// src/core/vector/distance.rs

/// Calculates the squared Euclidean distance between two vectors.
///
/// The square root is never taken: the squared value orders points the same
/// way as the true distance, and every comparison during search uses it.
///
/// # Arguments
///
/// * `a` - The first vector.
/// * `b` - The second vector, of the same length as `a`.
#[must_use]
pub fn squared_euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "distance between vectors of unequal length");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}
