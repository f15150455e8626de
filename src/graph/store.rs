//! In-memory graph storage implementation
//!
//! Vertices live in a single growable arena; every cross-reference is a
//! stable index into that arena, so reallocation on growth never
//! invalidates an edge. All memory reachable from a [`Graph`] is owned
//! transitively by it and released exactly once when it is dropped.

use super::edge::Edge;
use super::types::{VertexId, Weight};
use super::vertex::Vertex;
use thiserror::Error;
use tracing::{debug, trace};

/// Vertex slots preallocated by [`Graph::new`]
pub const INITIAL_CAPACITY: usize = 10;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex \"{0}\" not found")]
    VertexNotFound(String),

    #[error("failed to allocate storage for {0} additional vertices")]
    AllocationFailure(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory weighted directed graph
///
/// Vertices are append-only and keep their insertion index as a stable
/// [`VertexId`] for the lifetime of the graph (there is no removal API).
/// Edges are appended to their source vertex's edge list; parallel edges
/// between the same pair of vertices are allowed, and an edge A→B never
/// implies B→A.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Vertex arena, in insertion order
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Create an empty graph with [`INITIAL_CAPACITY`] vertex slots
    pub fn new() -> Self {
        Graph {
            vertices: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append a vertex and return its stable index
    ///
    /// The name is copied into vertex-owned storage. Duplicate names are
    /// permitted; name lookups resolve to the first match, so a caller
    /// relying on name-based lookup must keep names unique itself.
    ///
    /// When the arena is full its capacity is doubled. Growth failure is
    /// reported as [`GraphError::AllocationFailure`] and leaves the graph
    /// unchanged.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> GraphResult<VertexId> {
        if self.vertices.len() == self.vertices.capacity() {
            let additional = self.vertices.capacity().max(1);
            trace!(additional, "growing vertex storage");
            self.vertices
                .try_reserve_exact(additional)
                .map_err(|_| GraphError::AllocationFailure(additional))?;
        }

        let id = VertexId::new(self.vertices.len());
        let vertex = Vertex::new(name);
        debug!(%id, name = %vertex.name, "vertex added");
        self.vertices.push(vertex);
        Ok(id)
    }

    /// Add a directed edge between two vertices identified by name
    ///
    /// Both endpoints are resolved by a linear first-match scan before
    /// anything is mutated: if either name is missing the call fails with
    /// [`GraphError::VertexNotFound`] naming it, and no partial edge is
    /// created. The edge is appended to the source vertex's edge list; no
    /// duplicate detection is performed, so identical calls produce
    /// parallel edges.
    pub fn add_edge(&mut self, src_name: &str, dest_name: &str, weight: Weight) -> GraphResult<()> {
        let src = self
            .find_vertex(src_name)
            .ok_or_else(|| GraphError::VertexNotFound(src_name.to_string()))?;
        let dest = self
            .find_vertex(dest_name)
            .ok_or_else(|| GraphError::VertexNotFound(dest_name.to_string()))?;

        debug!(%src, %dest, weight, "edge added");
        self.vertices[src.as_usize()].edges.push(Edge::new(dest, weight));
        Ok(())
    }

    /// Find a vertex by name (first match in insertion order)
    pub fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.name == name)
            .map(VertexId::new)
    }

    /// Get a vertex by id
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.as_usize())
    }

    /// Get a vertex's outgoing edges, in insertion order
    pub fn edges(&self, id: VertexId) -> Option<&[Edge]> {
        self.vertices.get(id.as_usize()).map(|v| v.edges.as_slice())
    }

    /// Iterate over all vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Allocated vertex slots
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Total number of edges across all vertices
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}
