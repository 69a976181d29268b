use geo_types::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}
