/// Maximum number of cells a single tiling call may return.
///
/// Results past this size are rejected so the display layer is never asked
/// to render an unusable amount of geometry.
pub const HEX_LIMIT: usize = 100_000;

/// Maximum grid resolution supported by the tiling scheme.
pub const MAX_RESOLUTION: u8 = 15;
