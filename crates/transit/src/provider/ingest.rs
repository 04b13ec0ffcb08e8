//! Decoded input records and batch ingestion.

use crate::models::types::Coordinates;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopRecord {
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRecord {
    pub name: String,
    pub stops: Vec<String>,
    pub circular: bool,
}

/// A directed road distance between two named stops
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceRecord {
    pub from: String,
    pub to: String,
    pub meters: u32,
}

/// Everything a decoder hands over in one pass
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IngestBatch {
    pub stops: Vec<StopRecord>,
    pub routes: Vec<RouteRecord>,
    pub distances: Vec<DistanceRecord>,
}

impl IngestBatch {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty() && self.routes.is_empty() && self.distances.is_empty()
    }
}

/// What happened during ingestion
///
/// Unresolved names are dropped, never fatal; they are only counted here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub stops: usize,
    pub routes: usize,
    pub distances: usize,
    pub dropped_route_stops: usize,
    pub dropped_distances: usize,
}
