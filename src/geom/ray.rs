//! Ray casting infrastructure.
//!
//! Rays are shot from surface sample points to detect whether another
//! zone's geometry sits within tolerance of a surface.

use crate::{Point, Polygon, Vector};

/// A ray defined by an origin point and a unit direction vector.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    pub origin: Point,
    /// Direction vector (normalized, so `t` parameters are distances)
    pub direction: Vector,
}

impl Ray {
    /// Creates a new ray from origin point and direction vector.
    ///
    /// The direction vector is automatically normalized. Returns `None`
    /// for a zero-length direction.
    pub fn new(origin: Point, direction: Vector) -> Option<Self> {
        let direction = direction.normalize()?;
        Some(Self { origin, direction })
    }

    /// Returns the point along the ray at parameter t.
    ///
    /// point = origin + t * direction
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Calculates the intersection of this ray with a polygon.
    ///
    /// Returns `Some((t, point))` if the ray intersects the polygon,
    /// where `t` is the distance from the origin and `point` is the
    /// intersection point. Returns `None` if no intersection exists.
    ///
    /// Only returns intersections where t > 0 (in front of ray origin).
    pub fn intersect_polygon(&self, polygon: &Polygon) -> Option<(f64, Point)> {
        let (a, b, c, d) = polygon.plane_coefficients();
        let plane_normal = Vector::new(a, b, c);

        // Check if ray is parallel to plane
        let denom = plane_normal.dot(&self.direction);
        if denom.abs() < 1e-10 {
            return None;
        }

        // Plane equation: a*x + b*y + c*z + d = 0
        // Ray: P = origin + t * direction
        let origin_dot = a * self.origin.x + b * self.origin.y + c * self.origin.z + d;
        let t = -origin_dot / denom;

        // Only consider intersections in front of the origin.
        // Small epsilon avoids self-intersection at the origin.
        if t < 1e-10 {
            return None;
        }

        let intersection_point = self.point_at(t);
        if polygon.is_point_inside(intersection_point) {
            Some((t, intersection_point))
        } else {
            None
        }
    }

    /// Calculates the intersection of this ray with multiple polygons.
    ///
    /// Returns the closest intersection (smallest positive t) if any exists.
    pub fn intersect_polygons(&self, polygons: &[&Polygon]) -> Option<(f64, Point, usize)> {
        let mut closest: Option<(f64, Point, usize)> = None;

        for (idx, polygon) in polygons.iter().enumerate() {
            if let Some((t, point)) = self.intersect_polygon(polygon) {
                match &closest {
                    None => closest = Some((t, point, idx)),
                    Some((closest_t, _, _)) if t < *closest_t => {
                        closest = Some((t, point, idx));
                    }
                    _ => {}
                }
            }
        }

        closest
    }
}
