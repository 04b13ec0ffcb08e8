//! # transit-catalogue
//!
//! In-memory index of a bus network: named stops, routes over them, and
//! measured road distances between stops.
//!
//! ## Features
//!
//! - **Stable handles**: stops and routes live in append-only arenas
//! - **Route statistics**: stop counts, road length and curvature
//! - **Stop membership**: which routes serve a stop
//! - **Map rendering**: an ordered list of vector primitives for any serializer
//!
//! ## Example
//!
//! ```
//! use transit_catalogue::prelude::*;
//!
//! let mut catalogue = TransportCatalogue::new();
//! catalogue.add_stop("A", Coordinates::new(0.0, 0.0));
//! catalogue.add_stop("B", Coordinates::new(0.0, 10.0));
//! catalogue.add_stop("C", Coordinates::new(0.0, 20.0));
//! catalogue.add_distance("A", "B", 100);
//! catalogue.add_distance("B", "C", 200);
//! catalogue.add_route("1", &["A", "B", "C"], false);
//!
//! // Linear routes are driven out and back: A B C B A
//! let stats = route_statistics(&catalogue, "1").unwrap();
//! assert_eq!(stats.stop_count, 5);
//! assert_eq!(stats.unique_stop_count, 3);
//! assert_eq!(stats.route_length, 600);
//!
//! let stop = stop_statistics(&catalogue, "B").unwrap();
//! assert_eq!(stop.routes, vec!["1".to_string()]);
//!
//! let map = MapRenderer::new(RenderSettings::default()).render(&catalogue).unwrap();
//! assert!(matches!(map[0], Primitive::Polyline(_)));
//! ```

pub mod identifiers;
pub mod models;
pub mod provider;
pub mod render;
pub mod spatial;
pub mod stats;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::{
        DistanceRecord, IngestBatch, IngestSummary, RouteRecord, StopRecord, TransportCatalogue,
    };
    pub use crate::render::{Color, MapRenderer, Primitive, RenderSettings};
    pub use crate::spatial::{GeoProjector, ScreenPoint};
    pub use crate::stats::{route_statistics, stop_statistics, RouteStatistics, StopStatistics};
}

pub use prelude::*;
