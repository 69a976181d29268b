use geo_types::Point;

use crate::entities::Coordinates;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// Great-circle (haversine) distance between two coordinates in kilometres.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let a: Point<f64> = a.into();
    let b: Point<f64> = b.into();

    let d_lat = (b.y() - a.y()).to_radians();
    let d_lon = (b.x() - a.x()).to_radians();
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Inclusive of the boundary.
pub fn within(center: Coordinates, point: Coordinates, max_km: f64) -> bool {
    distance_km(center, point) <= max_km
}
