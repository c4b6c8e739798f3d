//! Breadth-first shortest paths and grouped-distance reporting.

use std::collections::{BTreeMap, HashMap, VecDeque};

use floe_core::Point;

use crate::graph::Graph;
use crate::traits::Pather;

/// Distances to the escape vertex, bucketed by edge count.
///
/// Key `0` holds the cells for which no route exists (the escape vertex's
/// own trivial entry is skipped, so nothing else can genuinely have
/// distance zero). A `BTreeMap` keeps iteration in ascending distance
/// order; each bucket follows graph insertion order.
pub type DistanceMap = BTreeMap<usize, Vec<Point>>;

/// Breadth-first shortest path from `start` to `goal`.
///
/// Returns the ordered vertex sequence from `start` to `goal` inclusive, so
/// the distance in edges is `path.len() - 1`. Returns `None` when the queue
/// drains before `goal` is discovered. Each call is a fresh traversal; no
/// state persists.
pub fn shortest_path<P: Pather>(pather: &P, start: Point, goal: Point) -> Option<Vec<Point>> {
    let mut queue = VecDeque::new();
    // The predecessor map doubles as the visited set.
    let mut before: HashMap<Point, Option<Point>> = HashMap::new();
    before.insert(start, None);
    queue.push_back(start);

    let mut nbuf = Vec::new();
    while let Some(cur) = queue.pop_front() {
        if cur == goal {
            break;
        }
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &n in &nbuf {
            if !before.contains_key(&n) {
                before.insert(n, Some(cur));
                queue.push_back(n);
            }
        }
    }

    backtrack(&before, start, goal)
}

/// Walk the predecessor map backwards from `goal` to `start`.
pub(crate) fn backtrack(
    before: &HashMap<Point, Option<Point>>,
    start: Point,
    goal: Point,
) -> Option<Vec<Point>> {
    if !before.contains_key(&goal) {
        return None;
    }
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        match before.get(&cur) {
            Some(Some(prev)) => {
                cur = *prev;
                path.push(cur);
            }
            // A consistent predecessor map always leads back to the start;
            // bail out rather than loop if it does not.
            _ => return None,
        }
    }
    path.reverse();
    Some(path)
}

/// Shortest routes from every vertex to the escape vertex, grouped by
/// distance in edges.
///
/// The escape vertex itself is skipped. Vertices with no route land in
/// bucket `0`, reusing the key a zero-length path would occupy; this is
/// kept for output compatibility with the reporting format. Stones
/// are ordinary (isolated) vertices and therefore also land in bucket `0`.
pub fn shortest_path_map(graph: &Graph, escape: Point) -> DistanceMap {
    let mut map = DistanceMap::new();
    for v in graph.vertices() {
        if v == escape {
            continue;
        }
        let edges = shortest_path(graph, v, escape).map_or(0, |path| path.len() - 1);
        map.entry(edges).or_default().push(v);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{GraphBuilder, escape_point};
    use floe_core::Pond;

    fn chain(points: &[Point]) -> Graph {
        let mut g = Graph::new();
        for pair in points.windows(2) {
            g.add_vertex(pair[0]);
            g.add_edge(pair[0], pair[1]).unwrap();
        }
        g
    }

    #[test]
    fn path_over_a_chain() {
        let pts = [Point::new(0, 0), Point::new(3, 0), Point::new(3, 2)];
        let g = chain(&pts);
        let path = shortest_path(&g, pts[0], pts[2]).unwrap();
        assert_eq!(path, pts.to_vec());
        assert_eq!(path.len() - 1, 2);
    }

    #[test]
    fn start_equals_goal() {
        let p = Point::new(1, 1);
        let mut g = Graph::new();
        g.add_vertex(p);
        let path = shortest_path(&g, p, p).unwrap();
        assert_eq!(path, vec![p]);
    }

    #[test]
    fn prefers_fewer_edges() {
        // a -> b -> d and a -> c -> d plus a long detour a -> e -> f -> d.
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let d = Point::new(3, 0);
        let e = Point::new(0, 1);
        let f = Point::new(1, 1);
        let mut g = Graph::new();
        g.add_vertex(a);
        g.add_edge(a, e).unwrap();
        g.add_edge(a, b).unwrap();
        g.add_edge(e, f).unwrap();
        g.add_edge(f, d).unwrap();
        g.add_edge(b, d).unwrap();
        let path = shortest_path(&g, a, d).unwrap();
        assert_eq!(path.len() - 1, 2);
        assert_eq!(path, vec![a, b, d]);
    }

    #[test]
    fn no_path_is_none() {
        let a = Point::new(0, 0);
        let b = Point::new(5, 5);
        let mut g = Graph::new();
        g.add_vertex(a);
        g.add_vertex(b);
        assert_eq!(shortest_path(&g, a, b), None);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let mut g = Graph::new();
        g.add_vertex(a);
        g.add_edge(a, b).unwrap();
        assert!(shortest_path(&g, a, b).is_some());
        assert_eq!(shortest_path(&g, b, a), None);
    }

    // -----------------------------------------------------------------------
    // End-to-end: builder + search
    // -----------------------------------------------------------------------

    #[test]
    fn bucket_keys_match_individual_searches() {
        let pond = Pond::parse(". . . *\n. . . .\n* . . .").unwrap();
        let graph = GraphBuilder::new().build(&pond, 1).unwrap();
        let escape = escape_point(&pond, 1);
        let map = shortest_path_map(&graph, escape);
        for (&dist, cells) in &map {
            for &c in cells {
                match shortest_path(&graph, c, escape) {
                    Some(path) => assert_eq!(path.len() - 1, dist),
                    None => assert_eq!(dist, 0),
                }
            }
        }
    }

    #[test]
    fn pond_distance_map() {
        // 4 wide, 3 tall, escape row 1. Hand-checked distances.
        //   . . . *
        //   . . . .     exit = (3, 1), escape = (4, 1)
        //   * . . .
        let pond = Pond::parse(". . . *\n. . . .\n* . . .").unwrap();
        let graph = GraphBuilder::new().build(&pond, 1).unwrap();
        let escape = escape_point(&pond, 1);
        let map = shortest_path_map(&graph, escape);

        // Every escape-row cell slides straight into the sink.
        assert_eq!(
            map.get(&1).unwrap(),
            &vec![
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
            ]
        );
        // (0,0) stops above the bottom-left stone; (3,2) slides up under
        // the top-right stone.
        assert_eq!(
            map.get(&2).unwrap(),
            &vec![Point::new(0, 0), Point::new(3, 2)]
        );
        assert_eq!(
            map.get(&3).unwrap(),
            &vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert!(!map.contains_key(&4));
        // The two stones are isolated vertices: no route, bucket 0.
        assert_eq!(
            map.get(&0).unwrap(),
            &vec![Point::new(3, 0), Point::new(0, 2)]
        );
        // Nothing unaccounted for: 12 pond cells, escape skipped.
        let total: usize = map.values().map(Vec::len).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn open_pond_strands_cells_off_the_escape_row() {
        // With no stones, every slide runs the full length of its row or
        // column, so only escape-row cells can ever stop at the exit: the
        // six remaining cells share the no-path bucket with nothing else.
        let pond = Pond::parse(". . .\n. . .\n. . .").unwrap();
        let graph = GraphBuilder::new().build(&pond, 1).unwrap();
        let escape = escape_point(&pond, 1);
        let map = shortest_path_map(&graph, escape);

        assert_eq!(
            map.get(&1).unwrap(),
            &vec![Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)]
        );
        assert_eq!(map.get(&0).unwrap().len(), 6);
        assert_eq!(map.len(), 2);
        // The escape vertex's own entry is skipped, not bucketed.
        assert!(!map.values().any(|cells| cells.contains(&escape)));
    }

    #[test]
    fn unreachable_cells_share_bucket_zero() {
        // The exit cell is walled off: everything is unreachable, and the
        // no-path bucket deliberately reuses key 0.
        let pond = Pond::parse(". * .").unwrap();
        let graph = GraphBuilder::new().build(&pond, 0).unwrap();
        let escape = escape_point(&pond, 0);
        let map = shortest_path_map(&graph, escape);
        assert_eq!(map.get(&1).unwrap(), &vec![Point::new(2, 0)]);
        assert_eq!(
            map.get(&0).unwrap(),
            &vec![Point::new(0, 0), Point::new(1, 0)]
        );
    }
}
