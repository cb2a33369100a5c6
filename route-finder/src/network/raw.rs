//! Raw network data as stored on disk.
//!
//! The data file is a schematic map export: a table of labelled stations
//! with positions, and a list of lines whose nodes either name a stop or
//! are unnamed waypoints that only shape the drawing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::NetworkError;

/// Geographic position of a station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    pub lat: f64,
    pub lon: f64,
}

/// A labelled station from the station table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStation {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub position: RawPosition,
}

/// A node on a line.
///
/// Nodes without a name (or with a blank one) are schematic-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coords: Vec<f64>,
}

impl RawNode {
    /// Create a named stop.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            coords: Vec::new(),
        }
    }

    /// Create an unnamed schematic waypoint.
    pub fn waypoint() -> Self {
        Self::default()
    }

    /// Returns the node's name, treating absent and blank names alike.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// A transit line: an ordered sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

impl RawLine {
    /// Create a line from its name and nodes.
    pub fn new(name: impl Into<String>, nodes: Vec<RawNode>) -> Self {
        Self {
            name: name.into(),
            color: String::new(),
            nodes,
        }
    }

    /// Create a line in which every node is a named stop.
    pub fn from_stops(name: impl Into<String>, stops: &[&str]) -> Self {
        Self::new(name, stops.iter().map(|s| RawNode::named(*s)).collect())
    }
}

/// The full network document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNetwork {
    #[serde(default)]
    pub stations: BTreeMap<String, RawStation>,
    /// A missing or `null` line list is an empty network.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lines: Vec<RawLine>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawNetwork {
    /// Create a network from its lines, with an empty station table.
    pub fn from_lines(lines: Vec<RawLine>) -> Self {
        Self {
            stations: BTreeMap::new(),
            lines,
        }
    }

    /// Parse a network document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a network document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}
