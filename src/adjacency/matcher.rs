//! Fine surface-versus-surface matching within a proximate zone.

use crate::adjacency::samples::SampleRay;
use crate::model::surface::Surface;
use crate::model::zone::Zone;
use crate::name::sorted_indices;

/// Relative orientation of the matched pair's outward normals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalOrientation {
    /// Normals point away from each other (the expected case).
    Opposing,
    /// Normals point the same way. Still accepted, but one of the two
    /// surfaces likely has an inverted normal; callers report this.
    Coincident,
}

/// A confirmed match within a candidate zone.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceMatch {
    /// Index of the matched surface within the candidate zone.
    pub surface: usize,
    pub orientation: NormalOrientation,
}

/// Finds the first surface of `zone` (in name order) adjacent to `surface`.
///
/// A candidate must pass three gates in order:
/// 1. elevation: centroid z within `tol` of the tested surface,
/// 2. spatial: at least one sample point within `tol` of the candidate,
/// 3. orientation: normals coincident, or opposing within `angle_tol`.
///
/// First match wins; ties are not broken by closeness.
pub fn find_adjacent_surface(
    surface: &Surface,
    samples: &[SampleRay],
    zone: &Zone,
    tol: f64,
    angle_tol: f64,
) -> Option<SurfaceMatch> {
    for idx in sorted_indices(zone.surfaces()) {
        let candidate = &zone.surfaces()[idx];

        // Elevation gate: stacked building surfaces are level, so candidates
        // at a different height are rejected outright.
        if (candidate.elevation() - surface.elevation()).abs() >= tol {
            continue;
        }

        // Spatial gate: some sample point must land on the candidate.
        let coincident = samples.iter().any(|s| {
            let closest = candidate.geometry().closest_point(s.point);
            closest.distance(&s.point) <= tol
        });
        if !coincident {
            continue;
        }

        // Orientation gate
        let orientation = if candidate.normal().is_close(&surface.normal()) {
            Some(NormalOrientation::Coincident)
        } else {
            match candidate.normal().angle(&-surface.normal()) {
                Some(angle) if angle <= angle_tol => Some(NormalOrientation::Opposing),
                _ => None,
            }
        };

        if let Some(orientation) = orientation {
            return Some(SurfaceMatch {
                surface: idx,
                orientation,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::samples::sample_rays;
    use crate::model::surface::SurfaceType;
    use crate::{Point, Polygon, Vector};
    use anyhow::Result;

    const TOL: f64 = 0.01;
    const ANGLE_TOL: f64 = 0.017453292519943295; // 1 degree

    /// Vertical 4x3 wall in the plane y=const with the given outward normal.
    fn wall(name: &str, y: f64, z0: f64, outward: f64) -> Result<Surface> {
        let pts = vec![
            Point::new(0., y, z0),
            Point::new(4., y, z0),
            Point::new(4., y, z0 + 3.),
            Point::new(0., y, z0 + 3.),
        ];
        let polygon = Polygon::new(pts, Some(Vector::new(0., outward, 0.)))?;
        Ok(Surface::new(name, SurfaceType::Wall, polygon))
    }

    #[test]
    fn test_opposing_walls_match() -> Result<()> {
        let tested = wall("a", 0., 0., 1.)?;
        let zone = Zone::new("z", vec![wall("b", 0.004, 0., -1.)?])?;
        let samples = sample_rays(tested.geometry(), TOL);

        let m = find_adjacent_surface(&tested, &samples, &zone, TOL, ANGLE_TOL);
        assert!(m.is_some());
        let m = m.unwrap();
        assert_eq!(m.surface, 0);
        assert_eq!(m.orientation, NormalOrientation::Opposing);
        Ok(())
    }

    #[test]
    fn test_coincident_normals_still_match() -> Result<()> {
        let tested = wall("a", 0., 0., 1.)?;
        let zone = Zone::new("z", vec![wall("b", 0.004, 0., 1.)?])?;
        let samples = sample_rays(tested.geometry(), TOL);

        let m = find_adjacent_surface(&tested, &samples, &zone, TOL, ANGLE_TOL).unwrap();
        assert_eq!(m.orientation, NormalOrientation::Coincident);
        Ok(())
    }

    #[test]
    fn test_elevation_gate_rejects() -> Result<()> {
        // Same plane but shifted one storey up
        let tested = wall("a", 0., 0., 1.)?;
        let zone = Zone::new("z", vec![wall("b", 0.004, 3., -1.)?])?;
        let samples = sample_rays(tested.geometry(), TOL);

        assert!(find_adjacent_surface(&tested, &samples, &zone, TOL, ANGLE_TOL).is_none());
        Ok(())
    }

    #[test]
    fn test_spatial_gate_rejects_distant_surface() -> Result<()> {
        let tested = wall("a", 0., 0., 1.)?;
        let zone = Zone::new("z", vec![wall("b", 5., 0., -1.)?])?;
        let samples = sample_rays(tested.geometry(), TOL);

        assert!(find_adjacent_surface(&tested, &samples, &zone, TOL, ANGLE_TOL).is_none());
        Ok(())
    }

    /// Short 4x0.1 wall in the plane y=const with an explicit normal.
    fn short_wall(name: &str, y: f64, vn: Vector) -> Result<Surface> {
        let pts = vec![
            Point::new(0., y, 0.),
            Point::new(4., y, 0.),
            Point::new(4., y, 0.1),
            Point::new(0., y, 0.1),
        ];
        let polygon = Polygon::new(pts, Some(vn))?;
        Ok(Surface::new(name, SurfaceType::Wall, polygon))
    }

    #[test]
    fn test_orientation_gate_rejects_skewed_normal() -> Result<()> {
        let tested = short_wall("a", 0., Vector::new(0., 1., 0.))?;
        let samples = sample_rays(tested.geometry(), TOL);

        // Candidate normal tilted by 2 degrees: elevation and spatial gates
        // pass, the 1-degree orientation gate does not.
        let tilt = 2.0_f64.to_radians();
        let skewed = Vector::new(0., -tilt.cos(), tilt.sin());
        let zone = Zone::new("z", vec![short_wall("b", 0.001, skewed)?])?;
        assert!(find_adjacent_surface(&tested, &samples, &zone, TOL, ANGLE_TOL).is_none());

        // Control: the same geometry with an exactly reversed normal matches
        let zone = Zone::new("z", vec![short_wall("b", 0.001, Vector::new(0., -1., 0.))?])?;
        assert!(find_adjacent_surface(&tested, &samples, &zone, TOL, ANGLE_TOL).is_some());
        Ok(())
    }

    #[test]
    fn test_first_match_in_name_order() -> Result<()> {
        let tested = wall("a", 0., 0., 1.)?;
        // Two identical candidates; the one earlier in name order wins
        let zone = Zone::new(
            "z",
            vec![wall("b_second", 0.004, 0., -1.)?, wall("b_first", 0.004, 0., -1.)?],
        )?;
        let samples = sample_rays(tested.geometry(), TOL);

        let m = find_adjacent_surface(&tested, &samples, &zone, TOL, ANGLE_TOL).unwrap();
        assert_eq!(zone.surfaces()[m.surface].name, "b_first");
        Ok(())
    }
}
