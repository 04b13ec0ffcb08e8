//! In-memory transport catalogue.
//!
//! Stops and routes are held by value in append-only arenas and referenced
//! everywhere by handle. Name indices, road distances and stop membership are
//! built incrementally as entities are added.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::provider::distances::DistanceTable;
use crate::provider::expander;
use crate::provider::ingest::{IngestBatch, IngestSummary};
use crate::provider::membership::StopRouteIndex;

// ============================================================================
// Transport Catalogue
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct TransportCatalogue {
    // Arenas
    stops: Vec<Stop>,
    routes: Vec<Route>,

    // Name indices
    stop_index: HashMap<Arc<str>, StopId>,
    route_index: HashMap<Arc<str>, RouteId>,

    // Cross indices
    distances: DistanceTable,
    membership: StopRouteIndex,
}

impl TransportCatalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue from one decoded batch
    pub fn from_batch(batch: IngestBatch) -> Self {
        let mut catalogue = Self::new();
        catalogue.ingest(batch);
        catalogue
    }

    /// Ingest a decoded batch: stops first, then distances, then routes
    ///
    /// Names that do not resolve to a registered stop are dropped and counted
    /// in the returned summary.
    pub fn ingest(&mut self, batch: IngestBatch) -> IngestSummary {
        let mut summary = IngestSummary::default();

        for stop in batch.stops {
            self.add_stop(&stop.name, stop.coordinates);
            summary.stops += 1;
        }

        for distance in &batch.distances {
            if self.add_distance(&distance.from, &distance.to, distance.meters) {
                summary.distances += 1;
            } else {
                summary.dropped_distances += 1;
            }
        }

        for route in &batch.routes {
            let (_, dropped) = self.insert_route(&route.name, &route.stops, route.circular);
            summary.routes += 1;
            summary.dropped_route_stops += dropped;
        }

        tracing::info!(
            stops = summary.stops,
            routes = summary.routes,
            distances = summary.distances,
            "ingested catalogue batch"
        );
        if summary.dropped_route_stops > 0 || summary.dropped_distances > 0 {
            tracing::warn!(
                route_stops = summary.dropped_route_stops,
                distances = summary.dropped_distances,
                "dropped references to unknown stops"
            );
        }

        summary
    }

    /// Register a stop
    ///
    /// Registering a name again appends a new record and points the name at
    /// it. Handles issued for the earlier record stay valid.
    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> StopId {
        let id = StopId::from_index(self.stops.len());
        let name: Arc<str> = name.into();

        self.stops.push(Stop {
            name: name.clone(),
            coordinates,
        });
        if let Some(previous) = self.stop_index.insert(name, id) {
            tracing::warn!(stop = %self.stops[id.index()].name, %previous, "stop registered again");
        }

        id
    }

    /// Record a directed road distance between two registered stops
    ///
    /// Returns `false` (and records nothing) if either name is unknown.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u32) -> bool {
        match (self.find_stop(from), self.find_stop(to)) {
            (Some(from_id), Some(to_id)) => {
                self.distances.record(from_id, to_id, meters);
                true
            }
            _ => {
                tracing::debug!(from, to, "dropping distance between unknown stops");
                false
            }
        }
    }

    /// Register a route from raw stop names
    ///
    /// Unknown stop names are skipped; the stored sequence is the canonical
    /// traversal of the stops that resolved.
    pub fn add_route<S: AsRef<str>>(&mut self, name: &str, stop_names: &[S], circular: bool) -> RouteId {
        self.insert_route(name, stop_names, circular).0
    }

    fn insert_route<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        circular: bool,
    ) -> (RouteId, usize) {
        let mut resolved = Vec::with_capacity(stop_names.len());
        for stop_name in stop_names {
            let stop_name = stop_name.as_ref();
            match self.find_stop(stop_name) {
                Some(id) => resolved.push(id),
                None => tracing::debug!(route = name, stop = stop_name, "dropping unknown stop"),
            }
        }
        let dropped = stop_names.len() - resolved.len();

        let id = RouteId::from_index(self.routes.len());
        let name: Arc<str> = name.into();
        let stops = expander::expand(resolved, circular);

        if let Some(previous) = self.route_index.insert(name.clone(), id) {
            let replaced = &self.routes[previous.index()];
            self.membership.withdraw(&replaced.name, &replaced.stops);
        }
        self.membership.record(&name, &stops);
        self.routes.push(Route {
            name,
            stops,
            circular,
        });

        (id, dropped)
    }

    /// Number of stop records, including ones whose name was re-registered
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of route records, including ones whose name was re-registered
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    fn is_live_route(&self, id: RouteId) -> bool {
        self.route_index.get(&self.routes[id.index()].name) == Some(&id)
    }
}

impl CatalogueReader for TransportCatalogue {
    fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    fn find_route(&self, name: &str) -> Option<RouteId> {
        self.route_index.get(name).copied()
    }

    fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.index()]
    }

    fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances.lookup(from, to)
    }

    fn route_names(&self) -> Vec<&str> {
        (0..self.routes.len())
            .map(RouteId::from_index)
            .filter(|&id| self.is_live_route(id))
            .map(|id| self.routes[id.index()].name.as_ref())
            .collect()
    }

    fn stops_used_by_routes(&self) -> BTreeSet<StopId> {
        self.route_index
            .values()
            .flat_map(|id| self.routes[id.index()].stops.iter().copied())
            .collect()
    }

    fn routes_through(&self, stop_name: &str) -> Option<BTreeSet<&str>> {
        self.find_stop(stop_name)
            .map(|id| self.membership.routes_at(id))
    }
}
