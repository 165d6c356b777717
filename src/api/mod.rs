pub mod hexes;
pub mod polygon;
pub mod viewport;

pub use hexes::{hexes_for_polygon, hexes_for_polygons};
pub use polygon::{PolygonFormat, PolygonRequest};
pub use viewport::{Corner, Viewport};
