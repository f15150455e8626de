//! Core graph container implementation
//!
//! This module implements a weighted directed graph with:
//! - Named vertices stored in insertion order with stable indices
//! - Per-vertex outgoing edge lists (append order)
//! - Name-based edge insertion with linear first-match resolution
//! - In-memory storage released transitively on drop

pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use store::{Graph, GraphError, GraphResult, INITIAL_CAPACITY};
pub use types::{VertexId, Weight};
pub use vertex::Vertex;
