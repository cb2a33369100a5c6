//! Transit network data and the station connectivity graph.
//!
//! Raw line data is loaded from JSON, then folded into an undirected,
//! immutable [`Graph`] keyed by normalized station names.

mod error;
mod graph;
mod raw;

pub use error::NetworkError;
pub use graph::Graph;
pub use raw::{RawLine, RawNetwork, RawNode, RawPosition, RawStation};
