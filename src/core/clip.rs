use crate::api::viewport::Viewport;
use crate::util::error::HexCoverError;
use geo::BooleanOps;
use geo_types::{Coord, Geometry, GeometryCollection, LineString, Polygon};

/// Builds the closed rectangular ring covering a viewport.
///
/// Ring order is SW, SE, NE, NW, back to SW. Fails with a clipping error
/// when the corners cannot form a non-degenerate rectangle.
pub fn viewport_polygon(viewport: &Viewport) -> Result<Polygon<f64>, HexCoverError> {
    let sw = viewport.south_west;
    let ne = viewport.north_east;

    if sw.lat >= ne.lat || sw.lng >= ne.lng {
        return Err(HexCoverError::ClippingError(format!(
            "Could not create bounding box for bounds {}",
            viewport
        )));
    }

    let ring = LineString::from(vec![
        Coord { x: sw.lng, y: sw.lat },
        Coord { x: ne.lng, y: sw.lat },
        Coord { x: ne.lng, y: ne.lat },
        Coord { x: sw.lng, y: ne.lat },
        Coord { x: sw.lng, y: sw.lat },
    ]);

    Ok(Polygon::new(ring, vec![]))
}

/// Intersects a geometry with the viewport rectangle.
///
/// Areal members are clipped; the intersection may be empty or split into
/// several disjoint polygons. Collections are clipped member by member and
/// stay collections. Non-areal members pass through unchanged, since tiling
/// ignores them anyway.
pub fn clip(geometry: &Geometry<f64>, viewport: &Viewport) -> Result<Geometry<f64>, HexCoverError> {
    let bounds = viewport_polygon(viewport)?;
    Ok(clip_member(geometry, &bounds))
}

fn clip_member(geometry: &Geometry<f64>, bounds: &Polygon<f64>) -> Geometry<f64> {
    match geometry {
        Geometry::Polygon(polygon) => Geometry::MultiPolygon(bounds.intersection(polygon)),
        Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(bounds.intersection(polygons)),
        Geometry::Rect(rect) => Geometry::MultiPolygon(bounds.intersection(&rect.to_polygon())),
        Geometry::Triangle(triangle) => {
            Geometry::MultiPolygon(bounds.intersection(&triangle.to_polygon()))
        }
        Geometry::GeometryCollection(collection) => Geometry::GeometryCollection(
            GeometryCollection::from(
                collection
                    .0
                    .iter()
                    .map(|member| clip_member(member, bounds))
                    .collect::<Vec<_>>(),
            ),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;
    use geo_types::polygon;

    fn small_square() -> Polygon<f64> {
        polygon![
            (x: -84.40, y: 33.70),
            (x: -84.30, y: 33.70),
            (x: -84.30, y: 33.80),
            (x: -84.40, y: 33.80),
            (x: -84.40, y: 33.70),
        ]
    }

    #[test]
    fn test_viewport_polygon_ring_is_closed() -> Result<(), HexCoverError> {
        let viewport = Viewport::new((33.0, -85.0), (34.0, -84.0));
        let polygon = viewport_polygon(&viewport)?;
        let exterior = polygon.exterior();

        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);
        assert_eq!(exterior.0[0], Coord { x: -85.0, y: 33.0 });
        assert_eq!(exterior.0[2], Coord { x: -84.0, y: 34.0 });
        Ok(())
    }

    #[test]
    fn test_degenerate_viewport_rejected() {
        let viewport = Viewport::new((33.7, -84.4), (33.7, -84.4));
        assert!(matches!(
            viewport_polygon(&viewport),
            Err(HexCoverError::ClippingError(_))
        ));
    }

    #[test]
    fn test_zero_width_viewport_rejected() {
        let viewport = Viewport::new((33.0, -84.4), (34.0, -84.4));
        assert!(matches!(
            viewport_polygon(&viewport),
            Err(HexCoverError::ClippingError(_))
        ));
    }

    #[test]
    fn test_clip_contained_polygon_keeps_area() -> Result<(), HexCoverError> {
        let geometry = Geometry::Polygon(small_square());
        let viewport = Viewport::new((33.0, -85.0), (34.5, -83.5));

        let clipped = clip(&geometry, &viewport)?;
        match clipped {
            Geometry::MultiPolygon(mp) => {
                assert!((mp.unsigned_area() - small_square().unsigned_area()).abs() < 1e-6);
            }
            _ => panic!("Expected MultiPolygon"),
        }
        Ok(())
    }

    #[test]
    fn test_clip_disjoint_viewport_is_empty() -> Result<(), HexCoverError> {
        let geometry = Geometry::Polygon(small_square());
        let viewport = Viewport::new((10.0, 10.0), (11.0, 11.0));

        let clipped = clip(&geometry, &viewport)?;
        match clipped {
            Geometry::MultiPolygon(mp) => assert!(mp.0.is_empty()),
            _ => panic!("Expected MultiPolygon"),
        }
        Ok(())
    }

    #[test]
    fn test_clip_partial_overlap_shrinks_area() -> Result<(), HexCoverError> {
        let geometry = Geometry::Polygon(small_square());
        // Covers only the western half of the square.
        let viewport = Viewport::new((33.0, -85.0), (34.0, -84.35));

        let clipped = clip(&geometry, &viewport)?;
        match clipped {
            Geometry::MultiPolygon(mp) => {
                let half = small_square().unsigned_area() / 2.0;
                assert!((mp.unsigned_area() - half).abs() < 1e-6);
            }
            _ => panic!("Expected MultiPolygon"),
        }
        Ok(())
    }

    #[test]
    fn test_clip_collection_clips_members() -> Result<(), HexCoverError> {
        let geometry = Geometry::GeometryCollection(GeometryCollection::from(vec![
            Geometry::Polygon(small_square()),
            Geometry::Point(geo_types::point! { x: -84.35, y: 33.75 }),
        ]));
        let viewport = Viewport::new((33.0, -85.0), (34.5, -83.5));

        let clipped = clip(&geometry, &viewport)?;
        match clipped {
            Geometry::GeometryCollection(collection) => {
                assert_eq!(collection.0.len(), 2);
                assert!(matches!(collection.0[0], Geometry::MultiPolygon(_)));
                assert!(matches!(collection.0[1], Geometry::Point(_)));
            }
            _ => panic!("Expected GeometryCollection"),
        }
        Ok(())
    }
}
