//! The coordinate-keyed graph store.

use std::collections::HashMap;
use std::fmt;

use floe_core::Point;

use crate::traits::Pather;

/// One graph vertex: a coordinate plus its outgoing neighbor list.
///
/// Neighbors are kept in insertion order and deduplicated by coordinate
/// equality. Vertices are created once per coordinate and only ever mutated
/// by appending edges during graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pos: Point,
    neighbors: Vec<Point>,
}

impl Vertex {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            neighbors: Vec::new(),
        }
    }

    /// The vertex's coordinate.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Outgoing neighbors, in insertion order.
    pub fn connections(&self) -> &[Point] {
        &self.neighbors
    }

    /// Append a neighbor unless it is already present.
    fn connect(&mut self, to: Point) {
        if !self.neighbors.contains(&to) {
            self.neighbors.push(to);
        }
    }
}

/// A directed graph keyed by coordinate.
///
/// Vertex iteration follows insertion order so that query output is
/// deterministic and matches the row-major order the builder scans in.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<Point, Vertex>,
    order: Vec<Point>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex for `p` if absent. Re-adding an existing coordinate
    /// is a no-op; its neighbor list is left untouched.
    pub fn add_vertex(&mut self, p: Point) -> &mut Vertex {
        let order = &mut self.order;
        self.vertices.entry(p).or_insert_with(|| {
            order.push(p);
            Vertex::new(p)
        })
    }

    /// Look up the vertex at `p`. Never fabricates a vertex.
    pub fn vertex(&self, p: Point) -> Option<&Vertex> {
        self.vertices.get(&p)
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// `from` must already exist ([`GraphError::UnknownVertex`] otherwise);
    /// `to` is created as a byproduct if absent. Appending an edge to an
    /// already-connected neighbor is a no-op.
    pub fn add_edge(&mut self, from: Point, to: Point) -> Result<(), GraphError> {
        if !self.vertices.contains_key(&from) {
            return Err(GraphError::UnknownVertex(from));
        }
        self.add_vertex(to);
        if let Some(v) = self.vertices.get_mut(&from) {
            v.connect(to);
        }
        Ok(())
    }

    /// Iterate over all vertex coordinates, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.order.iter().copied()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a vertex exists at `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.vertices.contains_key(&p)
    }
}

impl Pather for Graph {
    /// An absent vertex simply has no neighbors.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if let Some(v) = self.vertices.get(&p) {
            buf.extend_from_slice(&v.neighbors);
        }
    }
}

/// Errors from graph mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// `add_edge` was called with a source vertex that does not exist.
    UnknownVertex(Point),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex(p) => {
                write!(f, "edge source vertex {p} does not exist")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = Graph::new();
        let a = Point::new(1, 2);
        g.add_vertex(a);
        g.add_edge(a, Point::new(3, 2)).unwrap();
        // Re-adding must not clear the neighbor list.
        g.add_vertex(a);
        assert_eq!(g.len(), 2);
        assert_eq!(g.vertex(a).unwrap().connections(), &[Point::new(3, 2)]);
    }

    #[test]
    fn add_edge_requires_source() {
        let mut g = Graph::new();
        let err = g.add_edge(Point::new(0, 0), Point::new(1, 0)).unwrap_err();
        assert_eq!(err, GraphError::UnknownVertex(Point::new(0, 0)));
        assert!(g.is_empty());
    }

    #[test]
    fn add_edge_creates_target() {
        let mut g = Graph::new();
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        g.add_vertex(a);
        g.add_edge(a, b).unwrap();
        assert!(g.contains(b));
        assert!(g.vertex(b).unwrap().connections().is_empty());
    }

    #[test]
    fn duplicate_edges_are_dropped() {
        let mut g = Graph::new();
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        g.add_vertex(a);
        g.add_edge(a, b).unwrap();
        g.add_edge(a, b).unwrap();
        assert_eq!(g.vertex(a).unwrap().connections(), &[b]);
    }

    #[test]
    fn vertices_iterate_in_insertion_order() {
        let mut g = Graph::new();
        let pts = [Point::new(2, 0), Point::new(0, 1), Point::new(1, 0)];
        for p in pts {
            g.add_vertex(p);
        }
        let got: Vec<_> = g.vertices().collect();
        assert_eq!(got, pts);
    }

    #[test]
    fn pather_for_absent_vertex_is_empty() {
        let g = Graph::new();
        let mut buf = Vec::new();
        g.neighbors(Point::new(5, 5), &mut buf);
        assert!(buf.is_empty());
    }
}
