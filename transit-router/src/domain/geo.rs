//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// Uses the spherical law of cosines. Identical points are exactly
    /// zero apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::Coordinates;
    ///
    /// let a = Coordinates::new(55.611, 37.20);
    /// assert_eq!(a.distance_to(&a), 0.0);
    ///
    /// let b = Coordinates::new(55.595, 37.21);
    /// assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-6);
    /// ```
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }

        let dr = std::f64::consts::PI / 180.0;
        let cos_angle = (self.lat * dr).sin() * (other.lat * dr).sin()
            + (self.lat * dr).cos() * (other.lat * dr).cos() * ((self.lng - other.lng).abs() * dr).cos();

        // Rounding can push the cosine just outside acos' domain
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}
