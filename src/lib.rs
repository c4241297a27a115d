#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

//! # kdtree-search: exact nearest-neighbor search over a kd-tree
//!
//! `kdtree_search` builds a balanced kd-tree from equal-length vectors of
//! `f64` and answers exact nearest-neighbor queries under squared Euclidean
//! distance. It features:
//! - Median-split construction that cycles through the axes
//! - Branch-and-bound search with single-axis pruning
//! - A pipe-separated vector file loader
//! - An HTTP endpoint serving a preloaded or per-request tree
//!
//! ```
//! use kdtree_search::{KdTree, Vector};
//!
//! let tree = KdTree::build(vec![
//!     Vector::from([1.0, 2.3, 9.87]),
//!     Vector::from([0.8, 10.98, 10.09]),
//!     Vector::from([100.9, 0.1, 1.1]),
//! ])
//! .unwrap();
//! let nearest = tree.find_nearest(&[1.0, 0.9, 1.1]).unwrap();
//! assert_eq!(nearest, Some(&Vector::from([1.0, 2.3, 9.87])));
//! ```

pub mod api;
pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::api::KdTreeService;
pub use crate::core::common::KdSearchError;
pub use crate::core::config::Config;
pub use crate::core::kdtree::{build_kdtree, KdTree, KdTreeError};
pub use crate::core::vector::{squared_euclidean_distance, Vector};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, KdSearchError>;

#[cfg(test)]
mod tests {
    use crate::core::vector::loader;
    use crate::{Config, KdTree, KdTreeService, Vector};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn file_to_answer_end_to_end() {
        let mut data = NamedTempFile::new().unwrap();
        writeln!(data, "1.0|2.3|9.87").unwrap();
        writeln!(data, "0.8|10.98|10.09").unwrap();
        writeln!(data, "100.9|0.1|1.1").unwrap();

        let config = Config::builder().data_path(data.path()).build().unwrap();
        let path = config.data_path.as_deref().unwrap();
        let service = KdTreeService::from_path(path, config.field_separator).unwrap();

        let query = loader::parse_line("1.0|0.9|1.1", config.field_separator, 1).unwrap();
        let nearest = service.nearest(&query).unwrap().unwrap();
        assert_eq!(loader::format_line(&nearest, config.field_separator), "1|2.3|9.87");
    }

    #[test]
    fn tree_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KdTree>();
        assert_send_sync::<KdTreeService>();
    }

    #[test]
    fn rendered_tree_lists_every_vector() {
        let vectors: Vec<Vector> = (0..10_i32).map(|i| Vector::from([f64::from(i), f64::from(10 - i)])).collect();
        let tree = KdTree::build(vectors.clone()).unwrap();
        let rendered = tree.render();
        assert_eq!(rendered.lines().count(), vectors.len());
        for v in &vectors {
            assert!(rendered.contains(&v.to_string()), "{} missing from\n{}", v, rendered);
        }
    }
}
