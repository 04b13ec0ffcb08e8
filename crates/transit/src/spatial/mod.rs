//! Geographic distance and projection utilities.

pub mod projector;
pub mod queries;

pub use projector::{GeoProjector, ScreenPoint};
pub use queries::great_circle_distance;
