use crate::api::polygon::PolygonRequest;
use crate::api::viewport::Viewport;
use crate::core::bound::enforce_cell_limit;
use crate::core::clip::clip;
use crate::core::constants::HEX_LIMIT;
use crate::core::encode::encode_cells;
use crate::core::tile;
use crate::geom::parse::parse_geojson;
use crate::util::error::HexCoverError;
use rayon::prelude::*;
use std::collections::HashMap;

/// Computes the hex cells covering a prepared polygon.
///
/// The polygon's canonical GeoJSON is parsed, optionally clipped to the
/// viewport, tiled at the requested resolution, capped at
/// [`HEX_LIMIT`](crate::HEX_LIMIT) cells, and returned as a mapping from
/// cell identifier to the cell's boundary ring serialized as GeoJSON.
///
/// Passing a viewport keeps high resolutions usable over large shapes:
/// only the visible part of the polygon is tiled. Callers that know the
/// whole shape is visible can skip it.
///
/// # Example
///
/// ```
/// use hexcover_rs::{PolygonFormat, PolygonRequest, hexes_for_polygon};
///
/// # fn main() -> Result<(), hexcover_rs::HexCoverError> {
/// let mut polygon = PolygonRequest::new(
///     "atlanta",
///     "POLYGON((-84.4 33.7, -84.3 33.7, -84.3 33.8, -84.4 33.8, -84.4 33.7))",
///     PolygonFormat::Wkt,
/// );
/// polygon.prepare()?;
///
/// let hexes = hexes_for_polygon(&polygon, 7, None)?;
/// assert!(!hexes.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn hexes_for_polygon(
    polygon: &PolygonRequest,
    resolution: u8,
    viewport: Option<&Viewport>,
) -> Result<HashMap<String, String>, HexCoverError> {
    let resolution = tile::resolution(resolution)?;

    let canonical = polygon.geojson().ok_or_else(|| {
        HexCoverError::ParseError(format!("Polygon {} has not been prepared.", polygon.name))
    })?;
    let geometry = parse_geojson(canonical)?;

    let geometry = match viewport {
        Some(viewport) => clip(&geometry, viewport)?,
        None => geometry,
    };

    let cells = tile::tile_geometry(&geometry, resolution)?;
    tracing::debug!(
        "{} covered by {} cells at resolution {}",
        polygon.name,
        cells.len(),
        resolution
    );

    let cells = enforce_cell_limit(cells, HEX_LIMIT, &polygon.name, resolution)?;

    encode_cells(cells)
}

/// Computes hex cells for several prepared polygons in parallel.
///
/// Each polygon is an independent invocation; an oversized or malformed
/// polygon fails its own slot without affecting the others. Results come
/// back in input order.
pub fn hexes_for_polygons(
    polygons: &[PolygonRequest],
    resolution: u8,
    viewport: Option<&Viewport>,
) -> Vec<Result<HashMap<String, String>, HexCoverError>> {
    polygons
        .par_iter()
        .map(|polygon| hexes_for_polygon(polygon, resolution, viewport))
        .collect()
}
