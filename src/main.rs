use adjacency3d::{
    AdjacencyConfig, Point, Polygon, Session, Surface, SurfaceType, Vector, Zone,
};
use anyhow::Result;

fn wall(name: &str, y: f64, outward: f64) -> Result<Surface> {
    let pts = vec![
        Point::new(0., y, 0.),
        Point::new(4., y, 0.),
        Point::new(4., y, 3.),
        Point::new(0., y, 3.),
    ];
    let polygon = Polygon::new(pts, Some(Vector::new(0., outward, 0.)))?;
    Ok(Surface::new(name, SurfaceType::Wall, polygon))
}

fn main() -> Result<()> {
    env_logger::init();

    // Two rooms sharing a party wall with a small construction gap
    let room_a = Zone::new("room_a", vec![wall("room_a_east", 0., 1.)?])?;
    let room_b = Zone::new("room_b", vec![wall("room_b_west", 0.0004, -1.)?])?;

    let mut session = Session::new();
    let h1 = session.store.insert(room_a);
    let h2 = session.store.insert(room_b);

    let (_, report) = session.solve(&[h1, h2], &AdjacencyConfig::new())?;
    print!("{report}");
    Ok(())
}
