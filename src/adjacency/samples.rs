//! Sample generation for surface probing.

use crate::geom::triangles::triangle_centroid;
use crate::{Polygon, Ray};
use crate::Point;

/// A probe: an interior sample point of a surface together with the ray
/// shot outward from it.
#[derive(Debug, Clone, Copy)]
pub struct SampleRay {
    /// Sample point, offset slightly inward from the surface.
    pub point: Point,
    /// Outward probe ray starting at `point`.
    pub ray: Ray,
}

/// Builds one probe per face of the surface's tessellation.
///
/// Each sample point is the face center pulled back along the negated
/// normal by `tol / 2`, so the ray origin never lies exactly on the
/// surface (which would produce spurious self-hits). Ray direction is the
/// surface's outward normal.
pub fn sample_rays(polygon: &Polygon, tol: f64) -> Vec<SampleRay> {
    let vn = polygon.vn;
    let pts = polygon.vertices();
    let mut samples = Vec::with_capacity(polygon.triangles().len());

    for t in polygon.triangles() {
        let center = triangle_centroid(pts[t.0], pts[t.1], pts[t.2]);
        let point = center + vn * (-tol / 2.0);
        let Some(ray) = Ray::new(point, vn) else {
            continue; // Degenerate normal, nothing to probe with
        };
        samples.push(SampleRay { point, ray });
    }

    samples
}
