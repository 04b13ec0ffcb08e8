//! Projection of geographic coordinates onto the drawing plane.
//!
//! The bounding box of the input points is scaled uniformly to fit inside a
//! `width` x `height` plane with `padding` on every side. The vertical axis
//! of the plane grows downward, so latitude is inverted.

use crate::models::types::Coordinates;

const EPSILON: f64 = 1e-6;

/// A point on the drawing plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl GeoProjector {
    /// Fit `points` into a `width` x `height` plane
    ///
    /// An empty input, or one whose extent is zero in both directions, yields
    /// a zoom of 0: every point lands on `(padding, padding)`.
    pub fn new<I>(points: I, width: f64, height: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            return Self {
                padding,
                min_lng: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        }

        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for point in points {
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
        }

        let width_zoom = (!is_zero(max_lng - min_lng))
            .then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom = (!is_zero(max_lat - min_lat))
            .then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        tracing::debug!(min_lng, max_lng, min_lat, max_lat, zoom, "fitted projector");

        Self {
            padding,
            min_lng,
            max_lat,
            zoom,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn project(&self, coords: Coordinates) -> ScreenPoint {
        ScreenPoint {
            x: (coords.lng - self.min_lng) * self.zoom + self.padding,
            y: (self.max_lat - coords.lat) * self.zoom + self.padding,
        }
    }
}
