//! Coarse zone-versus-surface proximity filter.

use crate::Zone;
use crate::adjacency::samples::SampleRay;

/// Checks whether any probe ray hits the zone's aggregate geometry within
/// `hit_tol`.
///
/// Only the first intersection of each ray is considered, and the first
/// qualifying hit short-circuits. This is an accept/reject gate: it does
/// not identify which surface of the zone is adjacent, only whether the
/// zone is worth the per-surface work.
pub fn is_zone_proximate(samples: &[SampleRay], zone: &Zone, hit_tol: f64) -> bool {
    let polygons = zone.polygons();
    for sample in samples {
        if let Some((_, hit, _)) = sample.ray.intersect_polygons(&polygons) {
            if sample.ray.origin.distance(&hit) <= hit_tol {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::samples::sample_rays;
    use crate::model::surface::{Surface, SurfaceType};
    use crate::{Point, Polygon, Vector};
    use anyhow::Result;

    fn wall_at_y(name: &str, y: f64, outward: f64) -> Result<Surface> {
        let pts = vec![
            Point::new(0., y, 0.),
            Point::new(4., y, 0.),
            Point::new(4., y, 3.),
            Point::new(0., y, 3.),
        ];
        let polygon = Polygon::new(pts, Some(Vector::new(0., outward, 0.)))?;
        Ok(Surface::new(name, SurfaceType::Wall, polygon))
    }

    #[test]
    fn test_nearby_zone_is_proximate() -> Result<()> {
        let tested = wall_at_y("a", 0., 1.)?;
        let other = Zone::new("z", vec![wall_at_y("b", 0.004, -1.)?])?;

        let tol = 0.01;
        let samples = sample_rays(tested.geometry(), tol);
        assert!(is_zone_proximate(&samples, &other, tol + 1e-3));
        Ok(())
    }

    #[test]
    fn test_distant_zone_is_not_proximate() -> Result<()> {
        let tested = wall_at_y("a", 0., 1.)?;
        let other = Zone::new("z", vec![wall_at_y("b", 5., -1.)?])?;

        let tol = 0.01;
        let samples = sample_rays(tested.geometry(), tol);
        assert!(!is_zone_proximate(&samples, &other, tol + 1e-3));
        Ok(())
    }

    #[test]
    fn test_zone_behind_rays_is_not_proximate() -> Result<()> {
        // Wall behind the tested surface: rays point the other way
        let tested = wall_at_y("a", 0., 1.)?;
        let other = Zone::new("z", vec![wall_at_y("b", -1., 1.)?])?;

        let tol = 0.01;
        let samples = sample_rays(tested.geometry(), tol);
        assert!(!is_zone_proximate(&samples, &other, tol + 1e-3));
        Ok(())
    }
}
