//! Stop records.

use serde::{Deserialize, Deserializer, Serialize};

use super::StopId;
use crate::geo::Coordinate;

/// GTFS `location_type` of a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum LocationType {
    /// A regular boarding point (0).
    #[default]
    Stop,
    /// A station or interchange hub (1).
    Station,
    /// Any other GTFS location type (entrances, nodes, boarding areas).
    Other(u8),
}

impl LocationType {
    /// Returns true if this location is an interchange.
    pub fn is_interchange(&self) -> bool {
        matches!(self, LocationType::Station)
    }
}

impl From<u8> for LocationType {
    fn from(value: u8) -> Self {
        match value {
            0 => LocationType::Stop,
            1 => LocationType::Station,
            n => LocationType::Other(n),
        }
    }
}

impl From<LocationType> for u8 {
    fn from(value: LocationType) -> Self {
        match value {
            LocationType::Stop => 0,
            LocationType::Station => 1,
            LocationType::Other(n) => n,
        }
    }
}

/// A stop from the `stops` table.
///
/// Immutable reference data, loaded once per schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "stop_id")]
    pub id: StopId,

    #[serde(rename = "stop_code", default)]
    pub code: Option<String>,

    #[serde(rename = "stop_name")]
    pub name: String,

    #[serde(rename = "stop_lat")]
    pub lat: f64,

    #[serde(rename = "stop_lon")]
    pub lon: f64,

    #[serde(default)]
    pub zone_id: Option<String>,

    #[serde(default)]
    pub location_type: LocationType,

    /// Whether wheelchair boarding is possible.
    #[serde(default, deserialize_with = "boarding_flag")]
    pub wheelchair_boarding: bool,
}

impl Stop {
    /// Create a regular stop with the required fields.
    pub fn new(id: impl Into<StopId>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            code: None,
            name: name.into(),
            lat,
            lon,
            zone_id: None,
            location_type: LocationType::Stop,
            wheelchair_boarding: false,
        }
    }

    /// Returns the stop's position.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    /// Returns true if the stop is flagged as an interchange.
    pub fn is_interchange(&self) -> bool {
        self.location_type.is_interchange()
    }
}

/// Accepts either a JSON boolean or the GTFS integer encoding (1 = yes).
fn boarding_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n == 1,
        None => false,
    })
}
