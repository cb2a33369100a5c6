//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Default location of the network data file.
pub const DEFAULT_DATA_PATH: &str = "data/NCR+BRT_v1.json";

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has a value that cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Configuration for the route server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Network data file.
    pub data_path: PathBuf,

    /// Address to listen on.
    pub addr: SocketAddr,

    /// Default search bounds.
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Read configuration from `ROUTE_FINDER_*` environment variables.
    ///
    /// - `ROUTE_FINDER_DATA`: network data file
    /// - `ROUTE_FINDER_ADDR`: listen address
    /// - `ROUTE_FINDER_MAX_DEPTH`: default hop limit for bounded searches
    /// - `ROUTE_FINDER_MAX_ROUTES`: default route cap
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup("ROUTE_FINDER_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let addr = parse_var(&lookup, "ROUTE_FINDER_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080)));

        let mut search = SearchConfig::default();
        if let Some(max_depth) = parse_var(&lookup, "ROUTE_FINDER_MAX_DEPTH")? {
            search = search.with_max_depth(max_depth);
        }
        if let Some(max_routes) = parse_var(&lookup, "ROUTE_FINDER_MAX_ROUTES")? {
            search = search.with_max_routes(max_routes);
        }

        Ok(Self {
            data_path,
            addr,
            search,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value }),
    }
}
