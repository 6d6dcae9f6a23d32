use crate::Point;
use crate::geom::EPS;
use crate::geom::IsClose;
use crate::geom::vector::Vector;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Type for holding vertex indices for a triangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleIndex(pub usize, pub usize, pub usize);

/// Centroid of the triangle `(a, b, c)`.
pub fn triangle_centroid(a: Point, b: Point, c: Point) -> Point {
    Point::new(
        (a.x + b.x + c.x) / 3.,
        (a.y + b.y + c.y) / 3.,
        (a.z + b.z + c.z) / 3.,
    )
}

/// Area of the triangle `(a, b, c)`.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(&(c - a)).length() / 2.
}

/// Triangulates the polygon defined by points `pts` and normal `vn`
/// using ear clipping.
///
/// The points must form a simple (non-self-intersecting) loop and `vn`
/// must be the loop's outward normal.
pub fn triangulate(pts: &[Point], vn: &Vector) -> Result<Vec<TriangleIndex>> {
    if pts.len() < 3 {
        return Err(anyhow!("Cannot triangulate fewer than 3 points"));
    }
    if vn.length().is_close(0.) {
        return Err(anyhow!("Normal vector cannot have zero length"));
    }

    let mut vertices: Vec<usize> = (0..pts.len()).collect();
    let mut triangles: Vec<TriangleIndex> = Vec::new();
    let mut pos: usize = 0;
    let mut num_fail: usize = 0;

    while vertices.len() > 2 {
        if num_fail > vertices.len() {
            return Err(anyhow!(
                "Ear-clipping failed for a polygon with {} vertices",
                pts.len()
            ));
        }

        // If last vertex, start from the beginning
        if pos > vertices.len() - 1 {
            pos = 0;
        }

        let prev_pos = if pos > 0 { pos - 1 } else { vertices.len() - 1 };
        let next_pos = if pos < vertices.len() - 1 { pos + 1 } else { 0 };

        let (ia, ib, ic) = (vertices[prev_pos], vertices[pos], vertices[next_pos]);

        if is_corner_convex(&pts[ia], &pts[ib], &pts[ic], vn) {
            // Check if no other vertex is within this candidate ear
            // (needed for non-convex polygons)
            let mut any_point_inside = false;
            for &iv in vertices.iter() {
                if iv != ia
                    && iv != ib
                    && iv != ic
                    && is_point_inside_triangle(pts[iv], pts[ia], pts[ib], pts[ic])
                {
                    any_point_inside = true;
                    break;
                }
            }
            if !any_point_inside {
                triangles.push(TriangleIndex(ia, ib, ic));
                vertices.remove(pos);
                num_fail = 0;
                continue;
            }
        }

        pos += 1;
        num_fail += 1;
    }

    Ok(triangles)
}

/// Checks if the corner `prev -> curr -> next` is convex with respect to `vn`.
fn is_corner_convex(prev: &Point, curr: &Point, next: &Point, vn: &Vector) -> bool {
    let v1 = *curr - *prev;
    let v2 = *next - *curr;
    v1.cross(&v2).dot(vn) > EPS
}

/// Checks if `pt` lies inside (or on the boundary of) triangle `(a, b, c)`.
///
/// Uses barycentric coordinates. The point is assumed to lie in the
/// triangle's plane.
pub fn is_point_inside_triangle(pt: Point, a: Point, b: Point, c: Point) -> bool {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = pt - a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < EPS {
        return false; // Degenerate triangle
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    let u = 1.0 - v - w;

    // Boundary-inclusive with a small slack for rounding
    let slack = 1e-10;
    u >= -slack && v >= -slack && w >= -slack
}
