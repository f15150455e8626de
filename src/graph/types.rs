//! Core type definitions for the graph container

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge weight (e.g., a distance in kilometers). Sign is unrestricted.
pub type Weight = i64;

/// Stable index of a vertex in a graph's vertex sequence
///
/// Vertices are append-only, so an id stays valid for the lifetime of
/// the graph even when the backing storage reallocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        VertexId(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        VertexId(id)
    }
}
