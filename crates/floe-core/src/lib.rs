//! **floe-core** — pond grid and geometry types for the floe escape solver.
//!
//! This crate provides the foundational types shared across the *floe*
//! workspace: integer geometry primitives and the [`Pond`] grid of cell
//! markers parsed from puzzle input.

pub mod geom;
pub mod pond;

pub use geom::{Point, Range, RangeIter};
pub use pond::{Marker, Pond, PondError};
