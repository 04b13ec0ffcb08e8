//! Read-only access to catalogue data.
//!
//! Statistics and rendering only ever read the catalogue, so they are written
//! against this trait rather than the concrete store.

use std::collections::BTreeSet;

use crate::identifiers::*;
use crate::models::types::*;

/// Lookups and queries over an ingested catalogue
pub trait CatalogueReader: Send + Sync {
    // ---- Lookups ----
    fn find_stop(&self, name: &str) -> Option<StopId>;
    fn find_route(&self, name: &str) -> Option<RouteId>;

    /// Resolve a handle issued by this catalogue
    fn stop(&self, id: StopId) -> &Stop;

    /// Resolve a handle issued by this catalogue
    fn route(&self, id: RouteId) -> &Route;

    /// Road distance in meters, falling back to the reverse direction and then 0
    fn distance(&self, from: StopId, to: StopId) -> u32;

    // ---- Collections ----

    /// Names of live routes in insertion order
    fn route_names(&self) -> Vec<&str>;

    /// Stops that appear in at least one live route
    fn stops_used_by_routes(&self) -> BTreeSet<StopId>;

    /// Names of routes serving a stop
    ///
    /// `None` when the stop name is unknown, an empty set when the stop exists
    /// but no route serves it.
    fn routes_through(&self, stop_name: &str) -> Option<BTreeSet<&str>>;
}
