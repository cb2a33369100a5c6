//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Graph;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The graph is built once before serving and never mutated, so handlers
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Station connectivity graph
    pub graph: Arc<Graph>,

    /// Default search bounds
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: Graph, config: SearchConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
        }
    }
}
