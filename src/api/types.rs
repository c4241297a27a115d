// src/api/types.rs
//! Wire types of the nearest-neighbor endpoint.

use serde::{Deserialize, Serialize};

use crate::core::vector::Vector;

/// A nearest-neighbor request.
///
/// The field names follow the endpoint's established JSON shape
/// (`{"Vectors": [...], "FindNearestTo": [...]}`); snake_case keys are
/// accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestRequest {
    /// Vectors to search in. When absent, the service's preloaded tree is used.
    #[serde(rename = "Vectors", alias = "vectors", default, skip_serializing_if = "Option::is_none")]
    pub vectors: Option<Vec<Vector>>,
    #[serde(rename = "FindNearestTo", alias = "find_nearest_to")]
    pub find_nearest_to: Vector,
}

impl NearestRequest {
    /// A request answered from the preloaded tree.
    #[must_use]
    pub const fn against_loaded(query: Vector) -> Self {
        Self { vectors: None, find_nearest_to: query }
    }

    /// A request that carries its own data set.
    #[must_use]
    pub const fn with_vectors(vectors: Vec<Vector>, query: Vector) -> Self {
        Self { vectors: Some(vectors), find_nearest_to: query }
    }
}

/// The answer: the nearest vector, or `null` when there is nothing to search.
pub type NearestResponse = Option<Vector>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_capitalized_keys() {
        let req: NearestRequest =
            serde_json::from_str(r#"{"Vectors": [[1, 2], [3, 4]], "FindNearestTo": [0, 0]}"#).unwrap();
        assert_eq!(req.vectors.as_ref().map(Vec::len), Some(2));
        assert_eq!(req.find_nearest_to, Vector::from([0.0, 0.0]));
    }

    #[test]
    fn test_decode_snake_case_keys_without_vectors() {
        let req: NearestRequest = serde_json::from_str(r#"{"find_nearest_to": [1.5]}"#).unwrap();
        assert_eq!(req, NearestRequest::against_loaded(Vector::from([1.5])));
    }

    #[test]
    fn test_missing_query_is_rejected() {
        assert!(serde_json::from_str::<NearestRequest>(r#"{"Vectors": [[1]]}"#).is_err());
    }

    #[test]
    fn test_encode_round_trips_shape() {
        let req = NearestRequest::with_vectors(vec![Vector::from([1.0])], Vector::from([2.0]));
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"Vectors":[[1.0]],"FindNearestTo":[2.0]}"#);
    }
}
