//! Route planner over the station graph.
//!
//! Two search policies are offered: a bounded depth-first enumeration of
//! simple paths, and a breadth-first search returning every minimum-hop
//! path. Both are pure functions of the graph and their bounds, so they can
//! run concurrently against a shared graph without locking.

mod bfs;
mod config;
mod dfs;
mod search;


pub use bfs::find_shortest_routes;
pub use config::SearchConfig;
pub use dfs::find_bounded_routes;
pub use search::{Planner, SearchError, SearchMode, SearchRequest, SearchResult};
