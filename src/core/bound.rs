use crate::util::error::HexCoverError;
use h3o::{CellIndex, Resolution};
use std::collections::HashSet;

/// Rejects a cell set that exceeds the ceiling.
///
/// The check runs after the full set is assembled; the error carries the
/// shape name and resolution so the caller can tell the user which request
/// to shrink.
pub fn enforce_cell_limit(
    cells: HashSet<CellIndex>,
    max_count: usize,
    name: &str,
    resolution: Resolution,
) -> Result<HashSet<CellIndex>, HexCoverError> {
    if cells.len() > max_count {
        tracing::warn!(
            "{} produced {} cells at resolution {}, limit is {}",
            name,
            cells.len(),
            resolution,
            max_count
        );
        return Err(HexCoverError::ResultTooLarge {
            name: name.to_string(),
            resolution: u8::from(resolution),
        });
    }

    Ok(cells)
}
