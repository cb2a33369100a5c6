//! All-shortest-paths route search.
//!
//! A breadth-first search over whole paths rather than stations, so that
//! every distinct minimum-hop route survives, not just the first one found.
//! Paths leave the queue in non-decreasing length, which lets the search
//! stop as soon as the head of the queue is longer than the first route
//! to reach the target.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::domain::{Route, StationKey};
use crate::network::Graph;

use super::search::{SearchError, resolve_endpoints};

/// Find every minimum-hop simple path, up to `max_routes` of them.
///
/// Fails with [`SearchError::StationNotFound`] if either station is
/// unknown; returns an empty list if the stations are not connected.
pub fn find_shortest_routes(
    graph: &Graph,
    from: &str,
    to: &str,
    max_routes: usize,
) -> Result<Vec<Route>, SearchError> {
    let endpoints = resolve_endpoints(graph, from, to)?;
    let target = endpoints.target;

    let mut routes = Vec::new();
    // Fewest hops at which each station has been reached so far.
    let mut best_depth: HashMap<&StationKey, usize> = HashMap::new();
    let mut queue: VecDeque<Vec<&StationKey>> = VecDeque::new();
    // Station count of the first path to reach the target.
    let mut shortest: Option<usize> = None;

    for start in endpoints.starts {
        best_depth.insert(start, 0);
        queue.push_back(vec![start]);
    }

    // Invariant: every path still queued is at least as long as the head,
    // so once the head is longer than `shortest` no further route can be
    // minimal.
    while routes.len() < max_routes
        && queue
            .front()
            .is_some_and(|head| shortest.is_none_or(|len| head.len() <= len))
    {
        let Some(path) = queue.pop_front() else {
            break;
        };
        let Some(&current) = path.last() else {
            continue;
        };

        if current == target {
            shortest.get_or_insert(path.len());
            let route: Route = path.iter().copied().collect();
            trace!(route = %route, "Shortest search found route");
            routes.push(route);
            continue;
        }

        let depth = path.len();
        for neighbor in graph.neighbors(current) {
            if path.contains(&neighbor) {
                continue;
            }
            match best_depth.get(neighbor) {
                Some(&best) if best < depth => continue,
                Some(_) => {}
                None => {
                    best_depth.insert(neighbor, depth);
                }
            }

            let mut extended = path.clone();
            extended.push(neighbor);
            queue.push_back(extended);
        }
    }

    Ok(routes)
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
    fn both_shortest_routes_round_a_cycle() {
        let routes = find_shortest_routes(&cycle(), "A", "C", 10).unwrap();

        assert_eq!(
            names(&routes),
            vec![vec!["A", "B", "C"], vec!["A", "D", "C"]]
        );
    }

    #[test]
    fn longer_routes_are_excluded() {
        let g = graph(&[&["A", "B", "C"], &["B", "X", "Y", "C"], &["A", "Z", "C"]]);
        let routes = find_shortest_routes(&g, "A", "C", 10).unwrap();

        assert_eq!(
            names(&routes),
            vec![vec!["A", "B", "C"], vec!["A", "Z", "C"]]
        );
    }

    #[test]
    fn equally_short_paths_through_shared_station_are_kept() {
        // Two ways to reach M, then one way on to T: both routes survive.
        let g = graph(&[&["S", "P", "M", "T"], &["S", "Q", "M"]]);
        let routes = find_shortest_routes(&g, "S", "T", 10).unwrap();

        assert_eq!(
            names(&routes),
            vec![vec!["S", "P", "M", "T"], vec!["S", "Q", "M", "T"]]
        );
    }

    #[test]
    fn cap_limits_results() {
        let routes = find_shortest_routes(&cycle(), "A", "C", 1).unwrap();
        assert_eq!(names(&routes), vec![vec!["A", "B", "C"]]);

        assert!(find_shortest_routes(&cycle(), "A", "C", 0).unwrap().is_empty());
    }

    #[test]
    fn start_equals_target() {
        let routes = find_shortest_routes(&cycle(), "b", "B", 10).unwrap();
        assert_eq!(names(&routes), vec![vec!["B"]]);
    }

    #[test]
    fn disconnected_stations_give_empty_result() {
        let g = graph(&[&["A", "B"], &["C", "D"]]);
        assert!(find_shortest_routes(&g, "A", "D", 10).unwrap().is_empty());
    }

    #[test]
    fn unknown_station_is_not_found() {
        let err = find_shortest_routes(&cycle(), "A", "Kibera", 10).unwrap_err();
        assert_eq!(
            err,
            SearchError::StationNotFound {
                name: "Kibera".to_string()
            }
        );

        let err = find_shortest_routes(&cycle(), " Kibera ", "A", 10).unwrap_err();
        assert_eq!(
            err,
            SearchError::StationNotFound {
                name: "Kibera".to_string()
            }
        );
    }

    #[test]
    fn unnamed_gap_connects_directly() {
        use crate::network::RawNode;

        let line = RawLine::new(
            "Gap",
            vec![RawNode::named("A"), RawNode::named(""), RawNode::named("B")],
        );
        let g = Graph::build(&RawNetwork::from_lines(vec![line]));

        let routes = find_shortest_routes(&g, "A", "B", 10).unwrap();
        assert_eq!(names(&routes), vec![vec!["A", "B"]]);
    }
}
