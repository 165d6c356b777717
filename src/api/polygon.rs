use crate::geom::parse;
use crate::util::error::HexCoverError;

/// Format of the raw text a polygon request was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonFormat {
    /// Well-Known Text (e.g., "POLYGON((...))")
    #[default]
    Wkt,
    /// GeoJSON, either a bare geometry or a single feature
    GeoJson,
    /// GeoJSON feature captured from a shape drawn on the map
    DrawnOnMap,
}

/// A user-supplied polygon tracked by the surrounding application.
///
/// [`prepare`](Self::prepare) normalizes the raw text into canonical
/// GeoJSON exactly once; the canonical text is read-only afterwards and
/// re-preparing is a no-op.
///
/// # Example
///
/// ```
/// use hexcover_rs::{PolygonFormat, PolygonRequest};
///
/// # fn main() -> Result<(), hexcover_rs::HexCoverError> {
/// let mut polygon = PolygonRequest::new(
///     "atlanta",
///     "POLYGON((-84.4 33.7, -84.3 33.7, -84.3 33.8, -84.4 33.8, -84.4 33.7))",
///     PolygonFormat::Wkt,
/// )
/// .color("#ff7800");
///
/// polygon.prepare()?;
/// assert!(polygon.geojson().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRequest {
    /// Display name, echoed back in size-limit errors.
    pub name: String,
    /// The text exactly as the user supplied it.
    pub raw_input: String,
    /// Format the raw text is declared to be in.
    pub format: PolygonFormat,
    /// Display color used by the rendering collaborator.
    pub color: String,
    canonical_geojson: Option<String>,
}

impl PolygonRequest {
    pub fn new(
        name: impl Into<String>,
        raw_input: impl Into<String>,
        format: PolygonFormat,
    ) -> Self {
        Self {
            name: name.into(),
            raw_input: raw_input.into(),
            format,
            color: "#3388ff".to_string(),
            canonical_geojson: None,
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// The canonical GeoJSON text, available once `prepare` has succeeded.
    pub fn geojson(&self) -> Option<&str> {
        self.canonical_geojson.as_deref()
    }

    /// Normalizes the raw input into canonical GeoJSON.
    ///
    /// WKT input is converted to its GeoJSON equivalent; GeoJSON input
    /// (typed or drawn) is validated and stored as-is, so preparing
    /// already-canonical text is idempotent. Parse-level failures come back
    /// as a parse error with a short user-facing message; anything
    /// unclassified is normalized so no internal fault leaks to the caller.
    pub fn prepare(&mut self) -> Result<(), HexCoverError> {
        if self.canonical_geojson.is_some() {
            return Ok(());
        }

        if self.raw_input.trim().is_empty() {
            return Err(HexCoverError::ParseError(
                "Please input a polygon.".to_string(),
            ));
        }

        let canonical = match self.format {
            PolygonFormat::Wkt => {
                parse::wkt_to_geojson(self.raw_input.trim()).map_err(normalize)?
            }
            PolygonFormat::GeoJson | PolygonFormat::DrawnOnMap => {
                parse::parse_geojson(self.raw_input.trim()).map_err(normalize)?;
                self.raw_input.trim().to_string()
            }
        };

        self.canonical_geojson = Some(canonical);
        Ok(())
    }
}

fn normalize(err: HexCoverError) -> HexCoverError {
    match err {
        HexCoverError::ParseError(_) => {
            HexCoverError::ParseError("Failed to parse geometry.".to_string())
        }
        _ => HexCoverError::Unexpected(
            "An unexpected error occurred. Please check your settings.".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::parse::parse_geojson;

    const SQUARE_WKT: &str = "POLYGON((-84.4 33.7, -84.3 33.7, -84.3 33.8, -84.4 33.8, -84.4 33.7))";

    #[test]
    fn test_empty_input_rejected() {
        let mut polygon = PolygonRequest::new("empty", "   ", PolygonFormat::Wkt);

        match polygon.prepare() {
            Err(HexCoverError::ParseError(msg)) => {
                assert_eq!(msg, "Please input a polygon.");
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_wkt_canonicalizes_to_geojson() -> Result<(), HexCoverError> {
        let mut polygon = PolygonRequest::new("atlanta", SQUARE_WKT, PolygonFormat::Wkt);
        polygon.prepare()?;

        let canonical = polygon.geojson().expect("prepared");
        assert!(parse_geojson(canonical).is_ok());
        Ok(())
    }

    #[test]
    fn test_prepare_geojson_is_stored_verbatim() -> Result<(), HexCoverError> {
        let json = r#"{"type":"Polygon","coordinates":[[[-84.4,33.7],[-84.3,33.7],[-84.3,33.8],[-84.4,33.7]]]}"#;
        let mut polygon = PolygonRequest::new("atlanta", json, PolygonFormat::GeoJson);
        polygon.prepare()?;

        assert_eq!(polygon.geojson(), Some(json));
        Ok(())
    }

    #[test]
    fn test_prepare_drawn_feature() -> Result<(), HexCoverError> {
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[[[-84.4,33.7],[-84.3,33.7],[-84.3,33.8],[-84.4,33.7]]]}}"#;
        let mut polygon = PolygonRequest::new("drawn", json, PolygonFormat::DrawnOnMap);
        polygon.prepare()?;

        assert_eq!(polygon.geojson(), Some(json));
        Ok(())
    }

    #[test]
    fn test_prepare_is_idempotent() -> Result<(), HexCoverError> {
        let mut polygon = PolygonRequest::new("atlanta", SQUARE_WKT, PolygonFormat::Wkt);
        polygon.prepare()?;
        let first = polygon.geojson().map(str::to_string);

        polygon.prepare()?;
        assert_eq!(polygon.geojson().map(str::to_string), first);
        Ok(())
    }

    #[test]
    fn test_bad_wkt_normalized_message() {
        let mut polygon =
            PolygonRequest::new("bad", "POLYGON((not a polygon))", PolygonFormat::Wkt);

        match polygon.prepare() {
            Err(HexCoverError::ParseError(msg)) => {
                assert_eq!(msg, "Failed to parse geometry.");
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_geojson_normalized_message() {
        let mut polygon =
            PolygonRequest::new("bad", r#"{"type":"Nonsense"}"#, PolygonFormat::GeoJson);

        match polygon.prepare() {
            Err(HexCoverError::ParseError(msg)) => {
                assert_eq!(msg, "Failed to parse geometry.");
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }
}
