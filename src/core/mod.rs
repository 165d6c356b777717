pub mod bound;
pub mod clip;
pub mod constants;
pub mod encode;
pub mod tile;

pub use bound::enforce_cell_limit;
pub use clip::{clip, viewport_polygon};
pub use constants::{HEX_LIMIT, MAX_RESOLUTION};
pub use encode::encode_cells;
pub use tile::{tile_geometry, tile_geometry_bounded};
