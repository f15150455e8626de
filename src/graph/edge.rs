//! Edge implementation for the graph container

use super::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// A directed, weighted edge
///
/// The owning vertex is the source; the destination is held as a stable
/// index into the graph's vertex sequence, never as a reference into its
/// storage. The edge does not own its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Destination vertex (edge goes TO this vertex)
    pub dest: VertexId,

    /// Edge weight (may be negative)
    pub weight: Weight,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(dest: VertexId, weight: Weight) -> Self {
        Edge { dest, weight }
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, vertex: VertexId) -> bool {
        self.dest == vertex
    }
}
