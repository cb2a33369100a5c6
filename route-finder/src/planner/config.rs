//! Search configuration for the route planner.

/// Bounds applied to route searches when a request does not override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of hops for bounded searches.
    /// Routes have at most `max_depth + 1` stations.
    pub max_depth: usize,

    /// Maximum number of routes to return.
    pub max_routes: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given bounds.
    pub fn new(max_depth: usize, max_routes: usize) -> Self {
        Self {
            max_depth,
            max_routes,
        }
    }

    /// Set the maximum hop depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum number of routes.
    pub fn with_max_routes(mut self, max_routes: usize) -> Self {
        self.max_routes = max_routes;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 30,
            max_routes: 10,
        }
    }
}
