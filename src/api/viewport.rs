use crate::util::error::HexCoverError;
use serde::{Deserialize, Serialize};

/// One corner of a viewport, in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    pub lat: f64,
    pub lng: f64,
}

/// The visible rectangular lat/lng extent of a map display.
///
/// Mirrors the JSON shape map widgets produce for their bounding-box query:
/// `{"_southWest":{"lat":..,"lng":..},"_northEast":{"lat":..,"lng":..}}`.
/// The rectangle is axis-aligned in lon/lat; the antimeridian is not
/// handled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(rename = "_southWest")]
    pub south_west: Corner,
    #[serde(rename = "_northEast")]
    pub north_east: Corner,
}

impl Viewport {
    /// Builds a viewport from `(lat, lng)` corner pairs.
    pub fn new(south_west: (f64, f64), north_east: (f64, f64)) -> Self {
        Self {
            south_west: Corner {
                lat: south_west.0,
                lng: south_west.1,
            },
            north_east: Corner {
                lat: north_east.0,
                lng: north_east.1,
            },
        }
    }

    /// Parses the JSON emitted by the map widget's bounding-box query.
    pub fn from_json(s: &str) -> Result<Self, HexCoverError> {
        serde_json::from_str(s)
            .map_err(|e| HexCoverError::ClippingError(format!("Invalid viewport: {}", e)))
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NE: {}, {} SW: {}, {}",
            self.north_east.lat, self.north_east.lng, self.south_west.lat, self.south_west.lng
        )
    }
}
