use crate::Point;
use crate::Vector;
use crate::geom::EPS;
use crate::geom::segment::closest_point_on_segment;
use crate::geom::triangles::{
    TriangleIndex, is_point_inside_triangle, triangle_area, triangle_centroid, triangulate,
};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// A planar polygon defined by an ordered loop of vertices.
///
/// The unit normal is derived from the vertex winding (Newell's method)
/// unless supplied explicitly. The polygon is triangulated on construction;
/// the triangulation doubles as the sampling tessellation for adjacency
/// probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pts: Vec<Point>,
    /// Unit outward normal
    pub vn: Vector,
    tri: Vec<TriangleIndex>,
}

impl Polygon {
    /// Creates a new polygon from at least 3 vertices.
    ///
    /// If `vn` is given it overrides the winding-derived normal. Imported
    /// geometry may carry a normal flipped against its winding, so the
    /// override is not required to agree with the vertex order; the
    /// triangulation always follows the winding.
    pub fn new(pts: Vec<Point>, vn: Option<Vector>) -> Result<Self> {
        if pts.len() < 3 {
            return Err(anyhow!("Polygon needs at least 3 vertices, got {}", pts.len()));
        }
        let winding = newell_normal(&pts)
            .ok_or_else(|| anyhow!("Polygon vertices do not define a plane"))?;
        let vn = match vn {
            Some(v) => v
                .normalize()
                .ok_or_else(|| anyhow!("Polygon normal cannot have zero length"))?,
            None => winding,
        };
        let tri = triangulate(&pts, &winding)?;
        Ok(Self { pts, vn, tri })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.pts
    }

    pub fn triangles(&self) -> &[TriangleIndex] {
        &self.tri
    }

    /// Returns the edges as vertex pairs, including the closing edge.
    pub fn edges(&self) -> Vec<(Point, Point)> {
        let n = self.pts.len();
        (0..n).map(|i| (self.pts[i], self.pts[(i + 1) % n])).collect()
    }

    /// Area-weighted centroid over the triangulation.
    pub fn centroid(&self) -> Point {
        let mut cx = 0.;
        let mut cy = 0.;
        let mut cz = 0.;
        let mut total = 0.;
        for t in &self.tri {
            let (a, b, c) = (self.pts[t.0], self.pts[t.1], self.pts[t.2]);
            let area = triangle_area(a, b, c);
            let ctr = triangle_centroid(a, b, c);
            cx += ctr.x * area;
            cy += ctr.y * area;
            cz += ctr.z * area;
            total += area;
        }
        if total < EPS {
            return self.pts[0]; // Degenerate (zero-area) polygon
        }
        Point::new(cx / total, cy / total, cz / total)
    }

    /// Total area of the polygon.
    pub fn area(&self) -> f64 {
        self.tri
            .iter()
            .map(|t| triangle_area(self.pts[t.0], self.pts[t.1], self.pts[t.2]))
            .sum()
    }

    /// Coefficients `(a, b, c, d)` of the plane equation
    /// `a*x + b*y + c*z + d = 0`, with `(a, b, c)` being the unit normal.
    pub fn plane_coefficients(&self) -> (f64, f64, f64, f64) {
        let p0 = self.pts[0];
        let d = -(self.vn.dx * p0.x + self.vn.dy * p0.y + self.vn.dz * p0.z);
        (self.vn.dx, self.vn.dy, self.vn.dz, d)
    }

    /// Checks if a point lies on the polygon (boundary-inclusive).
    ///
    /// The point must be in the polygon's plane and inside one of its
    /// triangles.
    pub fn is_point_inside(&self, pt: Point) -> bool {
        let (a, b, c, d) = self.plane_coefficients();
        let dist = a * pt.x + b * pt.y + c * pt.z + d;
        if dist.abs() > 1e-10 {
            return false;
        }
        self.tri
            .iter()
            .any(|t| is_point_inside_triangle(pt, self.pts[t.0], self.pts[t.1], self.pts[t.2]))
    }

    /// Returns the point of the polygon closest to `pt`.
    ///
    /// If the plane projection of `pt` falls within the polygon, the
    /// projection is returned, otherwise the nearest point on the edges.
    pub fn closest_point(&self, pt: Point) -> Point {
        let (a, b, c, d) = self.plane_coefficients();
        let dist = a * pt.x + b * pt.y + c * pt.z + d;
        let proj = pt + self.vn * (-dist);
        if self.is_point_inside(proj) {
            return proj;
        }
        let mut best = self.pts[0];
        let mut best_dist = f64::MAX;
        for (e1, e2) in self.edges() {
            let candidate = closest_point_on_segment(pt, e1, e2);
            let d = pt.distance(&candidate);
            if d < best_dist {
                best_dist = d;
                best = candidate;
            }
        }
        best
    }
}

/// Newell's method: robust normal for a planar vertex loop.
fn newell_normal(pts: &[Point]) -> Option<Vector> {
    let mut n = Vector::new(0., 0., 0.);
    for i in 0..pts.len() {
        let p = pts[i];
        let q = pts[(i + 1) % pts.len()];
        n.dx += (p.y - q.y) * (p.z + q.z);
        n.dy += (p.z - q.z) * (p.x + q.x);
        n.dz += (p.x - q.x) * (p.y + q.y);
    }
    n.normalize()
}
