//! Route and stop statistics.

use std::collections::HashSet;

use crate::models::{traits::*, types::*};
use crate::spatial::queries::great_circle_distance;

/// Totals accumulated over a route's canonical sequence
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStatistics {
    pub route: String,
    /// Stops visited, counting every visit of the canonical sequence
    pub stop_count: usize,
    /// Distinct stop names in the canonical sequence
    pub unique_stop_count: usize,
    /// Road distance in meters
    pub route_length: u64,
    /// Great-circle distance in meters
    pub geo_length: f64,
}

impl RouteStatistics {
    /// Ratio of road distance to great-circle distance
    ///
    /// Fails with [`CatalogueError::IndeterminateCurvature`] when every stop of
    /// the route sits at the same place.
    pub fn curvature(&self) -> Result<f64> {
        if self.geo_length.abs() < f64::EPSILON {
            return Err(CatalogueError::IndeterminateCurvature(self.route.clone()));
        }
        Ok(self.route_length as f64 / self.geo_length)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopStatistics {
    pub stop: String,
    /// Serving route names, sorted
    pub routes: Vec<String>,
}

/// Compute statistics for the named route
pub fn route_statistics<C: CatalogueReader + ?Sized>(catalogue: &C, name: &str) -> Result<RouteStatistics> {
    let id = catalogue
        .find_route(name)
        .ok_or_else(|| CatalogueError::RouteNotFound(name.to_string()))?;
    let stops = &catalogue.route(id).stops;
    if stops.is_empty() {
        return Err(CatalogueError::EmptyRoute(name.to_string()));
    }

    let mut route_length = 0u64;
    let mut geo_length = 0.0;
    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        route_length += u64::from(catalogue.distance(from, to));
        geo_length += great_circle_distance(
            catalogue.stop(from).coordinates,
            catalogue.stop(to).coordinates,
        );
    }

    let unique_stop_count = stops
        .iter()
        .map(|&id| catalogue.stop(id).name.as_ref())
        .collect::<HashSet<&str>>()
        .len();

    Ok(RouteStatistics {
        route: name.to_string(),
        stop_count: stops.len(),
        unique_stop_count,
        route_length,
        geo_length,
    })
}

/// List the routes serving the named stop
pub fn stop_statistics<C: CatalogueReader + ?Sized>(catalogue: &C, name: &str) -> Result<StopStatistics> {
    let routes = catalogue
        .routes_through(name)
        .ok_or_else(|| CatalogueError::StopNotFound(name.to_string()))?;

    Ok(StopStatistics {
        stop: name.to_string(),
        routes: routes.into_iter().map(str::to_string).collect(),
    })
}
