// src/api/service.rs
//! The build-once-then-serve owner of a kd-tree.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use super::types::{NearestRequest, NearestResponse};
use crate::core::common::KdSearchError;
use crate::core::kdtree::KdTree;
use crate::core::vector::{loader, Vector};

/// Owns at most one built `KdTree` and answers queries against it.
///
/// The tree is built when the service is created and never changes after
/// that, so one service can be shared (e.g. behind an `Arc`) by any number
/// of concurrent request handlers.
#[derive(Debug, Default)]
pub struct KdTreeService {
    tree: Option<KdTree>,
}

impl KdTreeService {
    /// A service without a preloaded data set. Only requests that carry
    /// their own vectors can be answered.
    #[must_use]
    pub const fn empty() -> Self {
        Self { tree: None }
    }

    #[must_use]
    pub const fn with_tree(tree: KdTree) -> Self {
        Self { tree: Some(tree) }
    }

    /// Builds the service's tree from `vectors`.
    ///
    /// # Errors
    ///
    /// Returns `KdSearchError::KdTree` if the vectors differ in length.
    pub fn from_vectors(vectors: Vec<Vector>) -> Result<Self, KdSearchError> {
        let started = Instant::now();
        let tree = KdTree::build(vectors)?;
        info!(
            vectors = tree.len(),
            dimension = tree.dimension(),
            depth = tree.depth(),
            elapsed = ?started.elapsed(),
            "kd-tree ready"
        );
        Ok(Self::with_tree(tree))
    }

    /// Loads a vector file and builds the service's tree from it.
    ///
    /// # Errors
    ///
    /// Any loader error (`Io`, `MalformedInput`).
    pub fn from_path(path: &Path, separator: char) -> Result<Self, KdSearchError> {
        info!(path = %path.display(), "loading vectors");
        let vectors = loader::load_from_path(path, separator)?;
        Self::from_vectors(vectors)
    }

    #[must_use]
    pub const fn tree(&self) -> Option<&KdTree> {
        self.tree.as_ref()
    }

    /// Nearest vector to `query` in the preloaded tree.
    ///
    /// # Errors
    ///
    /// * `KdSearchError::InvalidInput` if no data set was loaded.
    /// * `KdSearchError::KdTree` if `query` has the wrong dimension.
    pub fn nearest(&self, query: &[f64]) -> Result<Option<Vector>, KdSearchError> {
        let tree = self.tree.as_ref().ok_or_else(|| KdSearchError::InvalidInput {
            message: "no data set is loaded and the request carries no vectors".to_string(),
        })?;
        Ok(tree.find_nearest(query)?.cloned())
    }

    /// Answers one request.
    ///
    /// A request with its own `vectors` is answered from a tree built for it
    /// alone; otherwise the preloaded tree is queried.
    ///
    /// # Errors
    ///
    /// See [`KdTreeService::nearest`] and [`KdTree::build`].
    pub fn answer(&self, request: NearestRequest) -> Result<NearestResponse, KdSearchError> {
        let NearestRequest { vectors, find_nearest_to } = request;
        match vectors {
            Some(vectors) => {
                debug!(vectors = vectors.len(), "building per-request kd-tree");
                let tree = KdTree::build(vectors)?;
                Ok(tree.find_nearest(&find_nearest_to)?.cloned())
            }
            None => self.nearest(&find_nearest_to),
        }
    }

    /// Decodes a JSON request, answers it and encodes the answer.
    ///
    /// The answer is a JSON array, or `null` when there was nothing to search.
    ///
    /// # Errors
    ///
    /// `KdSearchError::Json` for an undecodable body, otherwise see
    /// [`KdTreeService::answer`].
    pub fn handle_json(&self, body: &str) -> Result<String, KdSearchError> {
        let request: NearestRequest = serde_json::from_str(body)?;
        let response = self.answer(request)?;
        Ok(serde_json::to_string(&response)?)
    }
}
