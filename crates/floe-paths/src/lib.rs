//! Sliding-move graph construction and search for the floe escape solver.
//!
//! This crate turns a [`Pond`](floe_core::Pond) into a directed graph whose
//! edges model a piece sliding in a straight line until blocked, then answers
//! shortest-route queries against a synthetic escape vertex:
//!
//! - **Graph store** keyed by coordinate ([`Graph`], [`Vertex`])
//! - **Grid-to-graph builder** with the sliding scan ([`GraphBuilder`])
//! - **BFS** shortest path and grouped distances ([`shortest_path`],
//!   [`shortest_path_map`])
//! - **DFS** reachability toolkit ([`can_reach`], [`find_path`])
//!
//! The search algorithms are generic over the [`Pather`] neighbor-source
//! trait, so they can be exercised independently of the pond builder.

mod bfs;
mod builder;
mod dfs;
mod graph;
mod traits;

pub use bfs::{DistanceMap, shortest_path, shortest_path_map};
pub use builder::{BuildError, GraphBuilder, escape_point, exit_cell};
pub use dfs::{can_reach, find_path};
pub use graph::{Graph, GraphError, Vertex};
pub use traits::Pather;
