use hexcover_rs::{HexCoverError, PolygonFormat, PolygonRequest, Viewport, hexes_for_polygon};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), HexCoverError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut polygon = PolygonRequest::new(
        "atlanta",
        "POLYGON((-84.4 33.7, -84.3 33.7, -84.3 33.8, -84.4 33.8, -84.4 33.7))",
        PolygonFormat::Wkt,
    );
    polygon.prepare()?;

    let hexes = hexes_for_polygon(&polygon, 7, None)?;
    println!("{} hexes at resolution 7", hexes.len());

    let viewport = Viewport::new((33.70, -84.40), (33.75, -84.35));
    let visible = hexes_for_polygon(&polygon, 8, Some(&viewport))?;
    println!("{} hexes at resolution 8 inside the viewport", visible.len());

    for (id, boundary) in visible.iter().take(3) {
        println!("{}: {}", id, boundary);
    }

    Ok(())
}
