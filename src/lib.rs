//! # hexcover-rs
//!
//! Converts a polygon, supplied as WKT or GeoJSON text (or as a GeoJSON
//! feature captured from a map drawing tool), into the set of H3 hex cells
//! covering it at a chosen resolution, optionally restricted to a visible
//! map viewport. There are two entry points.
//!
//! ### 1. `PolygonRequest::prepare` - Normalize Raw Input
//!
//! ```
//! use hexcover_rs::{PolygonFormat, PolygonRequest};
//!
//! # fn main() -> Result<(), hexcover_rs::HexCoverError> {
//! let mut polygon = PolygonRequest::new(
//!     "atlanta",
//!     "POLYGON((-84.4 33.7, -84.3 33.7, -84.3 33.8, -84.4 33.8, -84.4 33.7))",
//!     PolygonFormat::Wkt,
//! );
//! polygon.prepare()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `hexes_for_polygon` - Cells for a Prepared Polygon
//!
//! ```
//! use hexcover_rs::{PolygonFormat, PolygonRequest, Viewport, hexes_for_polygon};
//!
//! # fn main() -> Result<(), hexcover_rs::HexCoverError> {
//! let mut polygon = PolygonRequest::new(
//!     "atlanta",
//!     "POLYGON((-84.4 33.7, -84.3 33.7, -84.3 33.8, -84.4 33.8, -84.4 33.7))",
//!     PolygonFormat::Wkt,
//! );
//! polygon.prepare()?;
//!
//! let hexes = hexes_for_polygon(&polygon, 7, None)?;
//! for (id, boundary) in &hexes {
//!     println!("{}: {}", id, boundary);
//! }
//!
//! // Restrict to the visible part of the map.
//! let viewport = Viewport::new((33.70, -84.40), (33.75, -84.35));
//! let visible = hexes_for_polygon(&polygon, 8, Some(&viewport))?;
//! assert!(!visible.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod geom;
pub mod util;

pub use api::{
    Corner, PolygonFormat, PolygonRequest, Viewport, hexes_for_polygon, hexes_for_polygons,
};
pub use core::{
    HEX_LIMIT, MAX_RESOLUTION, clip, encode_cells, enforce_cell_limit, tile_geometry,
    tile_geometry_bounded, viewport_polygon,
};
pub use geom::{parse_geojson, parse_geometry, parse_wkt, wkt_to_geojson};
pub use util::HexCoverError;

pub use geo_types;
pub use h3o;
