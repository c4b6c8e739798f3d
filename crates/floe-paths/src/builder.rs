//! Grid-to-graph construction with sliding adjacency.
//!
//! A piece on the pond slides in a straight line until it would enter a
//! stone or leave the grid, so a cell's neighbors are not the four adjacent
//! cells but the four stopping points of those slides. The builder scans
//! every cell, registers stones as isolated (blocking) vertices, and wires
//! open cells to their slide targets, funnelling the rightward slide on the
//! escape row into a synthetic sink vertex one column past the border.

use std::fmt;

use floe_core::{Marker, Point, Pond};

use crate::graph::{Graph, GraphError};

const LEFT: Point = Point::new(-1, 0);
const RIGHT: Point = Point::new(1, 0);
const UP: Point = Point::new(0, -1);
const DOWN: Point = Point::new(0, 1);

/// The exit cell: last real grid column on the escape row.
pub fn exit_cell(pond: &Pond, escape_row: i32) -> Point {
    Point::new(pond.width() - 1, escape_row)
}

/// The synthetic escape point: one column past the border on the escape row.
pub fn escape_point(pond: &Pond, escape_row: i32) -> Point {
    Point::new(pond.width(), escape_row)
}

/// Builds a sliding-move [`Graph`] from a [`Pond`].
///
/// The open and stone markers are configurable; all other markers are inert
/// (their cells become isolated vertices but do not block a slide).
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    open: Marker,
    stone: Marker,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            open: Marker::OPEN,
            stone: Marker::STONE,
        }
    }
}

impl GraphBuilder {
    /// Builder with the conventional `.` / `*` markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with custom open and stone markers.
    pub fn with_markers(open: Marker, stone: Marker) -> Self {
        Self { open, stone }
    }

    /// Build the sliding-move graph for `pond` with the given escape row.
    ///
    /// The escape vertex is always present as a pure sink, even when the
    /// exit cell is a stone. Edges are directed: a slide from `a` stopping
    /// at `b` does not imply the reverse slide stops at `a`.
    pub fn build(&self, pond: &Pond, escape_row: i32) -> Result<Graph, BuildError> {
        if escape_row < 0 || escape_row >= pond.height() {
            return Err(BuildError::EscapeRowOutOfBounds {
                row: escape_row,
                height: pond.height(),
            });
        }

        let exit = exit_cell(pond, escape_row);
        let escape = escape_point(pond, escape_row);

        let mut graph = Graph::new();
        graph.add_vertex(escape);

        let mut inert = 0usize;
        for p in pond.bounds().iter() {
            let Some(marker) = pond.at(p) else {
                continue;
            };
            if marker != self.open {
                // Stones (and inert markers) occupy a coordinate slot but
                // get no outgoing edges.
                graph.add_vertex(p);
                if marker != self.stone {
                    inert += 1;
                }
                continue;
            }

            graph.add_vertex(p);
            for dir in [LEFT, RIGHT, UP, DOWN] {
                let mut target = self.slide(pond, p, dir);
                if dir == RIGHT {
                    // Rightward slides into (or from) the exit cell are
                    // rewritten to the escape sink.
                    if target == Some(exit) || (target.is_none() && p == exit) {
                        target = Some(escape);
                    }
                }
                if let Some(t) = target {
                    graph.add_edge(p, t)?;
                }
            }
        }

        if inert > 0 {
            log::warn!("pond has {inert} markers that are neither open nor stone");
        }
        log::debug!(
            "built sliding graph: {} vertices, escape at {escape}",
            graph.len()
        );
        Ok(graph)
    }

    /// Slide from `origin` toward `dir` and return the stopping cell.
    ///
    /// Returns `None` when the very first step is off-grid or a stone, i.e.
    /// there is no move in that direction at all. Otherwise the piece stops
    /// on the last cell before a stone, or on the boundary cell when no
    /// stone intervenes. A stone is never a valid stopping cell.
    fn slide(&self, pond: &Pond, origin: Point, dir: Point) -> Option<Point> {
        let mut cur = origin + dir;
        if self.blocked(pond, cur) {
            return None;
        }
        loop {
            let next = cur + dir;
            if self.blocked(pond, next) {
                return Some(cur);
            }
            cur = next;
        }
    }

    fn blocked(&self, pond: &Pond, p: Point) -> bool {
        match pond.at(p) {
            Some(m) => m == self.stone,
            None => true,
        }
    }
}

/// Errors from graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The escape row lies outside the pond.
    EscapeRowOutOfBounds { row: i32, height: i32 },
    /// Internal graph mutation failure.
    Graph(GraphError),
}

impl From<GraphError> for BuildError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EscapeRowOutOfBounds { row, height } => {
                write!(f, "escape row {row} outside pond of height {height}")
            }
            BuildError::Graph(err) => write!(f, "graph construction failed: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Graph(err) => Some(err),
            _ => None,
        }
    }
}
