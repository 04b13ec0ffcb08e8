//! Core data types and errors for the catalogue.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// Geographic position in decimal degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for Point {
    fn from(coords: Coordinates) -> Self {
        Point::new(coords.lng, coords.lat)
    }
}

/// A named stop
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub name: Arc<str>,
    pub coordinates: Coordinates,
}

/// A bus route
///
/// `stops` holds the canonical traversal: for a linear route the return leg
/// is already mirrored in, so consumers never expand it again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub name: Arc<str>,
    pub stops: Vec<StopId>,
    pub circular: bool,
}

impl Route {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Stop not found: {0}")]
    StopNotFound(String),

    #[error("Route has no stops: {0}")]
    EmptyRoute(String),

    #[error("Curvature of route {0} is indeterminate: its stops have zero geographic length")]
    IndeterminateCurvature(String),

    #[error("Invalid palette index {index} for a palette of {len} colors")]
    InvalidPaletteIndex { index: usize, len: usize },
}

impl CatalogueError {
    /// Outcomes a caller reports as "not found"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RouteNotFound(_) | Self::StopNotFound(_) | Self::EmptyRoute(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
