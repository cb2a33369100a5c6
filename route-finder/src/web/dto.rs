//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Route;
use crate::planner::{SearchMode, SearchResult};

/// Query for a route search.
///
/// Numeric bounds are taken as strings so that a malformed value falls
/// back to the configured default rather than rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct RoutesQuery {
    /// Start station name
    pub from: Option<String>,

    /// Target station name
    pub to: Option<String>,

    /// Maximum hops for bounded search
    pub maxdepth: Option<String>,

    /// Maximum number of routes
    pub maxroutes: Option<String>,

    /// Search mode: "bounded" (default) or "shortest"
    pub mode: Option<String>,
}

/// Routes between two stations.
///
/// Shared by the HTTP endpoint and the CLI's JSON output.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Start station as requested
    pub from: String,

    /// Target station as requested
    pub to: String,

    /// Search mode used
    pub mode: SearchMode,

    /// Number of routes found
    pub count: usize,

    /// Routes, each a list of station names
    pub routes: Vec<Route>,
}

impl RoutesResponse {
    /// Build a response from a search result.
    pub fn new(from: impl Into<String>, to: impl Into<String>, result: SearchResult) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            mode: result.mode,
            count: result.routes.len(),
            routes: result.routes,
        }
    }
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (case-insensitive substring)
    #[serde(default)]
    pub q: String,

    /// Maximum number of results (default 10, max 50)
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResult {
    /// Normalized station name
    pub name: String,

    /// Lines serving the station
    pub lines: Vec<String>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching stations
    pub stations: Vec<StationSearchResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationKey;

    #[test]
    fn routes_response_shape() {
        let route = Route::new(vec![
            StationKey::normalize("a").unwrap(),
            StationKey::normalize("b").unwrap(),
        ]);
        let result = SearchResult {
            routes: vec![route],
            mode: SearchMode::Bounded,
        };

        let json = serde_json::to_value(RoutesResponse::new("a", "b", result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": "a",
                "to": "b",
                "mode": "bounded",
                "count": 1,
                "routes": [["A", "B"]]
            })
        );
    }
}
