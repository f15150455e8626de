//! routegraph
//!
//! A minimal in-memory weighted directed graph container: named vertices
//! held in an append-only arena, each owning its list of outgoing weighted
//! edges. Edges reference their destination by stable index, so growing the
//! vertex storage never invalidates them.
//!
//! ## Example Usage
//!
//! ```rust
//! use routegraph::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex("Paris").unwrap();
//! graph.add_vertex("Lyon").unwrap();
//! graph.add_edge("Paris", "Lyon", 465).unwrap();
//!
//! let paris = graph.find_vertex("Paris").unwrap();
//! let edges = graph.edges(paris).unwrap();
//! assert_eq!(edges.len(), 1);
//! assert_eq!(edges[0].weight, 465);
//! ```

pub mod graph;

pub use graph::{Edge, Graph, GraphError, GraphResult, Vertex, VertexId, Weight};
