use crate::util::error::HexCoverError;
use geo_types::Geometry;
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, HexCoverError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
///
/// Accepts either a bare geometry or a single feature wrapping one, which
/// is the shape map widgets hand back for drawn layers. Feature collections
/// are rejected.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, HexCoverError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| HexCoverError::ParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| HexCoverError::ParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| HexCoverError::ParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| HexCoverError::ParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(HexCoverError::ParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, HexCoverError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| HexCoverError::ParseError(e.to_string()))?;

    wkt.try_into()
        .map_err(|_| HexCoverError::ParseError("Failed to convert WKT to geometry".to_string()))
}

/// Converts a WKT string into its equivalent GeoJSON geometry string.
///
/// This is the canonicalization step: downstream code only ever sees
/// GeoJSON text.
pub fn wkt_to_geojson(s: &str) -> Result<String, HexCoverError> {
    let geometry = parse_wkt(s)?;
    Ok(geojson::Geometry::new(geojson::Value::from(&geometry)).to_string())
}
