//! Great-circle distance between stops.
//!
//! Used both for reporting journey distances and for finding stops close
//! enough to the origin and destination to be worth trying as transfers.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Haversine distance in kilometres, rounded to two decimals.
///
/// # Examples
///
/// ```
/// use transit_server::geo::{Coordinate, haversine_km};
///
/// let sol = Coordinate::new(40.4168, -3.7038);
/// assert_eq!(haversine_km(sol, sol), 0.0);
///
/// let bcn = Coordinate::new(41.3874, 2.1686);
/// let d = haversine_km(sol, bcn);
/// assert!((d - 505.0).abs() < 2.0);
/// ```
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_km(EARTH_RADIUS_KM * c)
}

/// Round a distance to two decimals.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
