//! Stop to route membership index.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::identifiers::StopId;

/// Which routes serve each stop
///
/// Fed from canonical sequences, so a stop visited twice by one route (the
/// mirrored return leg) still records that route once.
#[derive(Clone, Debug, Default)]
pub struct StopRouteIndex {
    routes_by_stop: HashMap<StopId, BTreeSet<Arc<str>>>,
}

impl StopRouteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every stop of a canonical sequence as served by `route_name`
    pub fn record(&mut self, route_name: &Arc<str>, stops: &[StopId]) {
        for &stop in stops {
            self.routes_by_stop
                .entry(stop)
                .or_default()
                .insert(route_name.clone());
        }
    }

    /// Remove `route_name` from every stop of a canonical sequence
    pub fn withdraw(&mut self, route_name: &str, stops: &[StopId]) {
        for stop in stops {
            if let Some(routes) = self.routes_by_stop.get_mut(stop) {
                routes.remove(route_name);
            }
        }
    }

    /// Route names serving `stop`, sorted
    pub fn routes_at(&self, stop: StopId) -> BTreeSet<&str> {
        self.routes_by_stop
            .get(&stop)
            .map(|routes| routes.iter().map(|name| name.as_ref()).collect())
            .unwrap_or_default()
    }
}
