//! Bounded depth-first route enumeration.
//!
//! Enumerates simple paths from the start station to the target, up to a
//! maximum hop depth and a maximum number of routes. Routes come back in
//! discovery order, which follows the graph's neighbour order; they are
//! not ranked by length.

use std::collections::HashSet;

use tracing::trace;

use crate::domain::{Route, StationKey};
use crate::network::Graph;

use super::search::{SearchError, resolve_endpoints};

/// One level of the explicit DFS stack.
struct Frame<'g> {
    station: &'g StationKey,
    /// Index of the next neighbour to try.
    next: usize,
}

/// Find up to `max_routes` simple paths of at most `max_depth` hops.
///
/// Fails with [`SearchError::StationNotFound`] if either station is
/// unknown. The route cap stops the whole search as soon as it is reached,
/// including any remaining start stations.
pub fn find_bounded_routes(
    graph: &Graph,
    from: &str,
    to: &str,
    max_depth: usize,
    max_routes: usize,
) -> Result<Vec<Route>, SearchError> {
    let endpoints = resolve_endpoints(graph, from, to)?;
    let mut routes = Vec::new();

    for start in endpoints.starts {
        if routes.len() >= max_routes {
            break;
        }
        walk(graph, start, endpoints.target, max_depth, max_routes, &mut routes);
    }

    Ok(routes)
}

/// Depth-first walk from a single start station.
///
/// `on_path` holds exactly the stations in `stack`, so a station may be
/// revisited on another branch but never twice within one route.
fn walk<'g>(
    graph: &'g Graph,
    start: &'g StationKey,
    target: &StationKey,
    max_depth: usize,
    max_routes: usize,
    routes: &mut Vec<Route>,
) {
    if routes.len() >= max_routes {
        return;
    }
    if start == target {
        routes.push(Route::new(vec![start.clone()]));
        return;
    }

    let mut stack = vec![Frame {
        station: start,
        next: 0,
    }];
    let mut on_path: HashSet<&StationKey> = HashSet::from([start]);

    while routes.len() < max_routes {
        // A stack of n stations is n - 1 hops; extending it adds one more.
        let can_extend = stack.len() <= max_depth;
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let neighbors = graph.neighbors(frame.station);

        if !can_extend || frame.next >= neighbors.len() {
            if let Some(done) = stack.pop() {
                on_path.remove(done.station);
            }
            continue;
        }

        let next = &neighbors[frame.next];
        frame.next += 1;

        if on_path.contains(next) {
            continue;
        }

        if next == target {
            let route: Route = stack.iter().map(|f| f.station).chain([next]).collect();
            trace!(route = %route, "Bounded search found route");
            routes.push(route);
            continue;
        }

        on_path.insert(next);
        stack.push(Frame {
            station: next,
            next: 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{RawLine, RawNetwork};

    fn graph(lines: &[&[&str]]) -> Graph {
        let lines = lines
            .iter()
            .map(|stops| RawLine::from_stops("L", stops))
            .collect();
        Graph::build(&RawNetwork::from_lines(lines))
    }

    fn names(routes: &[Route]) -> Vec<Vec<String>> {
        routes.iter().map(Route::names).collect()
    }

    fn cycle() -> Graph {
        graph(&[&["A", "B", "C"], &["C", "D", "A"]])
    }

    #[test]
    fn finds_both_ways_round_a_cycle() {
        let routes = find_bounded_routes(&cycle(), "A", "C", 10, 10).unwrap();

        assert_eq!(
            names(&routes),
            vec![vec!["A", "B", "C"], vec!["A", "D", "C"]]
        );
    }

    #[test]
    fn depth_one_cannot_reach_two_hops() {
        let routes = find_bounded_routes(&cycle(), "A", "C", 1, 10).unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn depth_is_counted_in_hops() {
        let g = graph(&[&["A", "B", "C", "D"]]);

        assert!(find_bounded_routes(&g, "A", "D", 2, 10).unwrap().is_empty());

        let routes = find_bounded_routes(&g, "A", "D", 3, 10).unwrap();
        assert_eq!(names(&routes), vec![vec!["A", "B", "C", "D"]]);
    }

    #[test]
    fn cap_stops_search() {
        let routes = find_bounded_routes(&cycle(), "A", "C", 10, 1).unwrap();
        assert_eq!(names(&routes), vec![vec!["A", "B", "C"]]);

        let routes = find_bounded_routes(&cycle(), "A", "C", 10, 0).unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn routes_are_simple_and_may_be_longer_than_shortest() {
        // A-B-C plus a detour B-X-Y-C
        let g = graph(&[&["A", "B", "C"], &["B", "X", "Y", "C"]]);
        let routes = find_bounded_routes(&g, "A", "C", 10, 10).unwrap();

        assert_eq!(
            names(&routes),
            vec![vec!["A", "B", "C"], vec!["A", "B", "X", "Y", "C"]]
        );
    }

    #[test]
    fn start_equals_target() {
        let routes = find_bounded_routes(&cycle(), "a", "A", 0, 10).unwrap();
        assert_eq!(names(&routes), vec![vec!["A"]]);
    }

    #[test]
    fn disconnected_stations_give_empty_result() {
        let g = graph(&[&["A", "B"], &["C", "D"]]);
        assert!(find_bounded_routes(&g, "A", "D", 10, 10).unwrap().is_empty());
    }

    #[test]
    fn unknown_station_is_not_found() {
        let err = find_bounded_routes(&cycle(), "Nowhere", "C", 10, 10).unwrap_err();
        assert_eq!(
            err,
            SearchError::StationNotFound {
                name: "Nowhere".to_string()
            }
        );

        let err = find_bounded_routes(&cycle(), "A", "Nowhere", 10, 10).unwrap_err();
        assert!(matches!(err, SearchError::StationNotFound { .. }));
    }

    #[test]
    fn station_names_are_case_insensitive() {
        let lower = find_bounded_routes(&cycle(), "a", "c", 10, 10).unwrap();
        let upper = find_bounded_routes(&cycle(), "A", "C", 10, 10).unwrap();
        assert_eq!(lower, upper);
    }
}
