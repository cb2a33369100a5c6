//! Route search entry point.
//!
//! Resolves the user's station names against the graph and dispatches to
//! either the bounded depth-first search or the shortest-path search.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Route, StationKey};
use crate::network::Graph;

use super::bfs::find_shortest_routes;
use super::config::SearchConfig;
use super::dfs::find_bounded_routes;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A station name does not match any station in the network
    #[error("station not found: {name}")]
    StationNotFound { name: String },

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Which search policy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Every simple path up to a hop limit, in discovery order.
    Bounded,
    /// All minimum-hop paths.
    #[default]
    Shortest,
}

impl SearchMode {
    /// Returns the lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Bounded => "bounded",
            SearchMode::Shortest => "shortest",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounded" | "dfs" => Ok(SearchMode::Bounded),
            "shortest" | "bfs" => Ok(SearchMode::Shortest),
            other => Err(SearchError::InvalidRequest(format!(
                "unknown search mode: {other}"
            ))),
        }
    }
}

/// Request for a route search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Start station, as typed by the user.
    pub from: String,

    /// Target station, as typed by the user.
    pub to: String,

    /// Search policy.
    pub mode: SearchMode,

    /// Overrides the configured hop limit (bounded search only).
    pub max_depth: Option<usize>,

    /// Overrides the configured route cap.
    pub max_routes: Option<usize>,
}

impl SearchRequest {
    /// Create a new search request using configured bounds.
    pub fn new(from: impl Into<String>, to: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            mode,
            max_depth: None,
            max_routes: None,
        }
    }

    /// Override the hop limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Override the route cap.
    pub fn with_max_routes(mut self, max_routes: usize) -> Self {
        self.max_routes = Some(max_routes);
        self
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.from.trim().is_empty() {
            return Err(SearchError::InvalidRequest(
                "start station is required".to_string(),
            ));
        }
        if self.to.trim().is_empty() {
            return Err(SearchError::InvalidRequest(
                "target station is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Found routes, in discovery order.
    pub routes: Vec<Route>,

    /// The policy that produced them.
    pub mode: SearchMode,
}

/// Resolved start and target stations for a search.
pub(super) struct Endpoints<'g> {
    pub starts: Vec<&'g StationKey>,
    pub target: &'g StationKey,
}

/// Resolve both ends of a search, failing if either is unknown.
pub(super) fn resolve_endpoints<'g>(
    graph: &'g Graph,
    from: &str,
    to: &str,
) -> Result<Endpoints<'g>, SearchError> {
    let starts = graph.resolve(from);
    if starts.is_empty() {
        return Err(SearchError::StationNotFound {
            name: from.trim().to_string(),
        });
    }

    let target = graph
        .resolve(to)
        .into_iter()
        .next()
        .ok_or_else(|| SearchError::StationNotFound {
            name: to.trim().to_string(),
        })?;

    Ok(Endpoints { starts, target })
}

/// Route planner over a built network graph.
pub struct Planner<'a> {
    graph: &'a Graph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a Graph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search for routes between the request's stations.
    ///
    /// An unknown station is an error; stations that exist but have no
    /// connecting route within the bounds give an empty result.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;

        let max_routes = request.max_routes.unwrap_or(self.config.max_routes);
        let routes = match request.mode {
            SearchMode::Bounded => {
                let max_depth = request.max_depth.unwrap_or(self.config.max_depth);
                find_bounded_routes(self.graph, &request.from, &request.to, max_depth, max_routes)?
            }
            SearchMode::Shortest => {
                find_shortest_routes(self.graph, &request.from, &request.to, max_routes)?
            }
        };

        debug!(
            from = %request.from,
            to = %request.to,
            mode = %request.mode,
            routes = routes.len(),
            "Route search complete"
        );

        Ok(SearchResult {
            routes,
            mode: request.mode,
        })
    }
}
