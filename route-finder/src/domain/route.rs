//! Route type.

use std::fmt;

use serde::Serialize;

use super::StationKey;

/// An ordered sequence of stations with no repeats (a simple path).
///
/// Serializes as a plain array of station names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Route {
    stations: Vec<StationKey>,
}

impl Route {
    /// Creates a route from its stations, in travel order.
    pub fn new(stations: Vec<StationKey>) -> Self {
        Self { stations }
    }

    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[StationKey] {
        &self.stations
    }

    /// Returns the first station, if any.
    pub fn origin(&self) -> Option<&StationKey> {
        self.stations.first()
    }

    /// Returns the last station, if any.
    pub fn destination(&self) -> Option<&StationKey> {
        self.stations.last()
    }

    /// Number of stations on the route.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the route has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of hops (edges) travelled.
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Returns the station names as owned strings.
    pub fn names(&self) -> Vec<String> {
        self.stations.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl<'a> FromIterator<&'a StationKey> for Route {
    fn from_iter<I: IntoIterator<Item = &'a StationKey>>(iter: I) -> Self {
        Self::new(iter.into_iter().cloned().collect())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(station.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(names: &[&str]) -> Route {
        Route::new(
            names
                .iter()
                .map(|n| StationKey::normalize(n).unwrap())
                .collect(),
        )
    }

    #[test]
    fn endpoints_and_hops() {
        let r = route(&["a", "b", "c"]);
        assert_eq!(r.origin().unwrap().as_str(), "A");
        assert_eq!(r.destination().unwrap().as_str(), "C");
        assert_eq!(r.len(), 3);
        assert_eq!(r.hops(), 2);
    }

    #[test]
    fn single_station_route_has_no_hops() {
        let r = route(&["a"]);
        assert_eq!(r.hops(), 0);
        assert!(!r.is_empty());
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(route(&["ruaka", "westlands"]).to_string(), "Ruaka -> Westlands");
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&route(&["a", "b"])).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
    }
}
