use crate::util::error::HexCoverError;
use h3o::CellIndex;
use h3o::geom::ToGeo;
use std::collections::HashMap;

/// Serializes each cell's boundary ring as a GeoJSON polygon string, keyed
/// by the cell identifier.
///
/// A cell produced by the tiler is always encodable; if the grid library
/// still rejects one, the failure surfaces as an encoding error rather
/// than a raw library fault.
pub fn encode_cells<I>(cells: I) -> Result<HashMap<String, String>, HexCoverError>
where
    I: IntoIterator<Item = CellIndex>,
{
    cells
        .into_iter()
        .map(|cell| {
            let boundary = cell
                .to_geom(true)
                .map_err(|e| HexCoverError::EncodingError(e.to_string()))?;
            let geometry = geojson::Geometry::new(geojson::Value::from(&boundary));

            Ok((cell.to_string(), geometry.to_string()))
        })
        .collect()
}
