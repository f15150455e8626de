//! Vertex implementation for the graph container

use super::edge::Edge;
use serde::{Deserialize, Serialize};

/// A named vertex owning its outgoing edges
///
/// The name is an independent owned copy of the caller's text; it is not
/// required to be unique across the graph (name lookups return the first
/// match). The edge list holds every directed edge whose source is this
/// vertex, in append order (oldest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Vertex name (e.g., a city)
    pub name: String,

    /// Outgoing edges, in insertion order
    pub edges: Vec<Edge>,
}

impl Vertex {
    /// Create a new vertex with an empty edge list
    pub fn new(name: impl Into<String>) -> Self {
        Vertex {
            name: name.into(),
            edges: Vec::new(),
        }
    }

    /// Get the vertex name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get number of outgoing edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
