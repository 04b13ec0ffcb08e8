//! Catalogue storage and its indices.

pub mod catalogue;
pub mod distances;
pub mod expander;
pub mod ingest;
pub mod membership;

pub use catalogue::TransportCatalogue;
pub use distances::DistanceTable;
pub use ingest::{DistanceRecord, IngestBatch, IngestSummary, RouteRecord, StopRecord};
pub use membership::StopRouteIndex;
