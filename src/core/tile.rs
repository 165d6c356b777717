use crate::util::error::HexCoverError;
use geo_types::{Geometry, Polygon};
use h3o::geom::{ContainmentMode, PolyfillConfig, ToCells};
use h3o::{CellIndex, Resolution};
use std::collections::HashSet;

/// Validates a caller-supplied resolution against the supported range (0-15).
pub fn resolution(value: u8) -> Result<Resolution, HexCoverError> {
    Resolution::try_from(value).map_err(|_| HexCoverError::InvalidResolution(value))
}

/// Tiles a geometry with the hex cells whose area overlaps it.
///
/// Composite geometries (collections, multi-polygons) are walked member by
/// member and every leaf polygon is filled at the given resolution. Cells
/// from all members land in one flat set, so cells shared by touching
/// members appear once. Members that carry no area (points, lines) are
/// skipped, since clipping can legitimately leave mixed-type collections
/// behind. A member with an empty ring signals upstream corruption and
/// fails hard instead.
pub fn tile_geometry(
    geometry: &Geometry<f64>,
    resolution: Resolution,
) -> Result<HashSet<CellIndex>, HexCoverError> {
    let mut cells = HashSet::new();
    walk(geometry, resolution, &mut cells, None)?;
    Ok(cells)
}

/// Variant of [`tile_geometry`] that aborts as soon as the accumulated cell
/// count passes `max_cells`, for callers feeding it pathologically large
/// shapes. The abort surfaces as the same error the post-hoc limit check
/// produces, carrying `name` and the resolution.
pub fn tile_geometry_bounded(
    geometry: &Geometry<f64>,
    resolution: Resolution,
    max_cells: usize,
    name: &str,
) -> Result<HashSet<CellIndex>, HexCoverError> {
    let mut cells = HashSet::new();
    walk(geometry, resolution, &mut cells, Some((max_cells, name)))?;
    Ok(cells)
}

fn walk(
    geometry: &Geometry<f64>,
    resolution: Resolution,
    cells: &mut HashSet<CellIndex>,
    limit: Option<(usize, &str)>,
) -> Result<(), HexCoverError> {
    match geometry {
        Geometry::GeometryCollection(collection) => {
            for member in collection.0.iter() {
                walk(member, resolution, cells, limit)?;
            }
            Ok(())
        }
        Geometry::MultiPolygon(polygons) => {
            for polygon in polygons.0.iter() {
                fill_polygon(polygon, resolution, cells, limit)?;
            }
            Ok(())
        }
        Geometry::Polygon(polygon) => fill_polygon(polygon, resolution, cells, limit),
        Geometry::Rect(rect) => fill_polygon(&rect.to_polygon(), resolution, cells, limit),
        Geometry::Triangle(triangle) => {
            fill_polygon(&triangle.to_polygon(), resolution, cells, limit)
        }
        // No area, nothing to fill.
        Geometry::Point(_)
        | Geometry::MultiPoint(_)
        | Geometry::Line(_)
        | Geometry::LineString(_)
        | Geometry::MultiLineString(_) => Ok(()),
    }
}

fn fill_polygon(
    polygon: &Polygon<f64>,
    resolution: Resolution,
    cells: &mut HashSet<CellIndex>,
    limit: Option<(usize, &str)>,
) -> Result<(), HexCoverError> {
    if polygon.exterior().0.is_empty() {
        return Err(HexCoverError::MalformedGeometry(
            "Found empty geometry when attempting to get hexes.".to_string(),
        ));
    }

    let shape = h3o::geom::Polygon::from_degrees(polygon.clone())
        .map_err(|e| HexCoverError::MalformedGeometry(e.to_string()))?;

    let config =
        PolyfillConfig::new(resolution).containment_mode(ContainmentMode::IntersectsBoundary);

    match limit {
        Some((max_cells, name)) => {
            for cell in shape.to_cells(config) {
                cells.insert(cell);
                if cells.len() > max_cells {
                    return Err(HexCoverError::ResultTooLarge {
                        name: name.to_string(),
                        resolution: u8::from(resolution),
                    });
                }
            }
        }
        None => cells.extend(shape.to_cells(config)),
    }

    Ok(())
}
