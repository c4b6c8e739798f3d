//! Depth-first reachability and any-path search.
//!
//! Iterative (explicit-stack) traversals, so path length never translates
//! into recursion depth on large ponds.

use std::collections::{HashMap, HashSet};

use floe_core::Point;

use crate::bfs::backtrack;
use crate::traits::Pather;

/// Whether `goal` is reachable from `start`.
pub fn can_reach<P: Pather>(pather: &P, start: Point, goal: Point) -> bool {
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut stack = vec![start];

    let mut nbuf = Vec::new();
    while let Some(cur) = stack.pop() {
        if cur == goal {
            return true;
        }
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &n in &nbuf {
            if visited.insert(n) {
                stack.push(n);
            }
        }
    }
    false
}

/// Find any path from `start` to `goal`, not necessarily the shortest.
///
/// Returns the vertex sequence from `start` to `goal` inclusive, or `None`
/// if `goal` is unreachable. Neighbors are explored first-listed first,
/// matching the order a recursive traversal would take.
pub fn find_path<P: Pather>(pather: &P, start: Point, goal: Point) -> Option<Vec<Point>> {
    let mut before: HashMap<Point, Option<Point>> = HashMap::new();
    before.insert(start, None);
    let mut stack = vec![start];

    let mut nbuf = Vec::new();
    while let Some(cur) = stack.pop() {
        if cur == goal {
            return backtrack(&before, start, goal);
        }
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        // Reversed push so the first-listed neighbor is explored first.
        for &n in nbuf.iter().rev() {
            if !before.contains_key(&n) {
                before.insert(n, Some(cur));
                stack.push(n);
            }
        }
    }
    None
}
