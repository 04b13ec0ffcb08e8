//! Distance calculations on the Earth's surface.
//!
//! Uses the Haversine formula for great-circle distances.

use geo::{HaversineDistance, Point};

use crate::models::types::Coordinates;

/// Great-circle distance between two coordinates in meters
pub fn great_circle_distance(from: Coordinates, to: Coordinates) -> f64 {
    Point::from(from).haversine_distance(&Point::from(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neighbouring_stops() {
        // Tolstopaltsevo to Marushkino, roughly 1.7 km apart
        let a = Coordinates::new(55.611087, 37.20829);
        let b = Coordinates::new(55.595884, 37.209755);

        let dist = great_circle_distance(a, b);
        assert!((1_650.0..1_750.0).contains(&dist), "got {dist}");
    }

    #[test]
    fn test_ten_degrees_along_equator() {
        let dist = great_circle_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 10.0));
        assert_relative_eq!(dist, 1_111_950.0, max_relative = 1e-3);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinates::new(55.611087, 37.20829);
        let b = Coordinates::new(55.595884, 37.209755);
        assert_relative_eq!(great_circle_distance(a, b), great_circle_distance(b, a));
    }

    #[test]
    fn test_same_point_is_zero() {
        let a = Coordinates::new(43.587795, 39.716901);
        assert_eq!(great_circle_distance(a, a), 0.0);
    }
}
