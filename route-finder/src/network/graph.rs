//! Undirected station connectivity graph.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::domain::StationKey;

use super::error::NetworkError;
use super::raw::RawNetwork;

/// Undirected, unweighted connectivity between stations.
///
/// Built once from raw line data and read-only afterwards. Adjacency is
/// symmetric: if B is a neighbour of A, A is a neighbour of B. There are
/// no self-loops, and each neighbour list is de-duplicated in the order
/// edges were first seen. Stations iterate in sorted order, so every
/// traversal over the graph is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<StationKey, Vec<StationKey>>,
    lines: BTreeMap<StationKey, Vec<String>>,
}

impl Graph {
    /// Build the graph from raw line data.
    ///
    /// Unnamed nodes are skipped: consecutive *named* stops on a line are
    /// connected even when schematic waypoints sit between them.
    pub fn build(raw: &RawNetwork) -> Self {
        let mut graph = Self::default();

        for line in &raw.lines {
            let mut prev: Option<StationKey> = None;

            for node in &line.nodes {
                let Some(key) = node.name().and_then(StationKey::normalize) else {
                    continue;
                };

                graph.add_station(&key, &line.name);
                if let Some(prev) = &prev
                    && prev != &key
                {
                    graph.add_edge(prev, &key);
                }
                prev = Some(key);
            }
        }

        graph
    }

    /// Load network data from a file and build the graph.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let raw = RawNetwork::load(path)?;
        let graph = Self::build(&raw);

        info!(
            path = %path.display(),
            lines = raw.lines.len(),
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "Loaded transit network"
        );

        Ok(graph)
    }

    fn add_station(&mut self, key: &StationKey, line: &str) {
        self.adjacency.entry(key.clone()).or_default();

        let lines = self.lines.entry(key.clone()).or_default();
        if !line.is_empty() && !lines.iter().any(|l| l == line) {
            lines.push(line.to_string());
        }
    }

    fn add_edge(&mut self, a: &StationKey, b: &StationKey) {
        self.add_neighbor(a, b);
        self.add_neighbor(b, a);
    }

    fn add_neighbor(&mut self, from: &StationKey, to: &StationKey) {
        let neighbors = self.adjacency.entry(from.clone()).or_default();
        if !neighbors.contains(to) {
            neighbors.push(to.clone());
        }
    }

    /// Resolve a user-supplied station name to the matching graph keys.
    ///
    /// The name is normalized exactly as line data is, so matching is
    /// case-insensitive. An empty result means the station is unknown.
    pub fn resolve(&self, name: &str) -> Vec<&StationKey> {
        StationKey::normalize(name)
            .and_then(|key| self.adjacency.get_key_value(&key))
            .map(|(key, _)| key)
            .into_iter()
            .collect()
    }

    /// Find stations whose name contains `query`, ignoring case.
    ///
    /// Results are in sorted order, at most `limit` of them. A blank query
    /// matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&StationKey> {
        let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
        if query.is_empty() {
            return Vec::new();
        }

        self.adjacency
            .keys()
            .filter(|key| key.contains_ignore_case(&query))
            .take(limit)
            .collect()
    }

    /// Returns the neighbours of a station, or an empty slice if unknown.
    pub fn neighbors(&self, station: &StationKey) -> &[StationKey] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the names of the lines serving a station, in first-seen order.
    pub fn lines_serving(&self, station: &StationKey) -> &[String] {
        self.lines
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check whether a station is in the graph.
    pub fn contains(&self, station: &StationKey) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Iterate over all stations in sorted order.
    pub fn stations(&self) -> impl Iterator<Item = &StationKey> {
        self.adjacency.keys()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::network::{RawLine, RawNode};
    use proptest::prelude::*;

    /// Lines over a small alphabet of stops, with some unnamed waypoints.
    fn network() -> impl Strategy<Value = RawNetwork> {
        let node = prop_oneof![
            4 => "[a-fA-F]".prop_map(RawNode::named),
            1 => Just(RawNode::waypoint()),
        ];
        let line = proptest::collection::vec(node, 0..8)
            .prop_map(|nodes| RawLine::new("L", nodes));
        proptest::collection::vec(line, 0..6).prop_map(RawNetwork::from_lines)
    }

    proptest! {
        /// neighbour(A, B) iff neighbour(B, A)
        #[test]
        fn adjacency_is_symmetric(raw in network()) {
            let g = Graph::build(&raw);
            for a in g.stations() {
                for b in g.neighbors(a) {
                    prop_assert!(g.neighbors(b).contains(a));
                }
            }
        }

        /// No station is its own neighbour, and no neighbour appears twice
        #[test]
        fn no_self_loops_or_duplicates(raw in network()) {
            let g = Graph::build(&raw);
            for a in g.stations() {
                let ns = g.neighbors(a);
                prop_assert!(!ns.contains(a));
                let unique: std::collections::HashSet<_> = ns.iter().collect();
                prop_assert_eq!(unique.len(), ns.len());
            }
        }

        /// Building twice from identical input yields identical adjacency
        #[test]
        fn build_is_idempotent(raw in network()) {
            prop_assert_eq!(Graph::build(&raw), Graph::build(&raw));
        }

        /// Unnamed nodes never become stations
        #[test]
        fn only_named_stops_are_stations(raw in network()) {
            let g = Graph::build(&raw);
            let named: std::collections::BTreeSet<_> = raw
                .lines
                .iter()
                .flat_map(|l| &l.nodes)
                .filter_map(|n| n.name().and_then(StationKey::normalize))
                .collect();
            let stations: std::collections::BTreeSet<_> = g.stations().cloned().collect();
            prop_assert_eq!(stations, named);
        }
    }
}
