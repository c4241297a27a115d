//! Public API of the search service.
//!
//! `KdTreeService` owns a built tree and answers requests; `server` exposes it
//! over HTTP with the JSON shapes defined in `types`.

pub mod server;
pub mod service;
pub mod types;

pub use server::{router, serve, ApiError};
pub use service::KdTreeService;
pub use types::{NearestRequest, NearestResponse};
