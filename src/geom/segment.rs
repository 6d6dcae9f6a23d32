//! Line segment helpers supporting polygon closest-point queries.

use crate::Point;
use crate::geom::EPS;

/// Returns the point on segment `p1 -> p2` closest to `pt`.
pub fn closest_point_on_segment(pt: Point, p1: Point, p2: Point) -> Point {
    let dir = p2 - p1;
    let len_sq = dir.dot(&dir);
    if len_sq < EPS {
        // Degenerate segment (a point)
        return p1;
    }
    let t = ((pt - p1).dot(&dir) / len_sq).clamp(0.0, 1.0);
    p1 + dir * t
}

/// Returns the distance from `pt` to segment `p1 -> p2`.
pub fn distance_point_to_segment(pt: Point, p1: Point, p2: Point) -> f64 {
    pt.distance(&closest_point_on_segment(pt, p1, p2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_point_interior() {
        let p1 = Point::new(0., 0., 0.);
        let p2 = Point::new(2., 0., 0.);
        let pt = Point::new(1., 1., 0.);
        let closest = closest_point_on_segment(pt, p1, p2);
        assert!(closest.is_close(&Point::new(1., 0., 0.)));
    }

    #[test]
    fn test_closest_point_clamped_to_ends() {
        let p1 = Point::new(0., 0., 0.);
        let p2 = Point::new(2., 0., 0.);
        let before = Point::new(-1., 1., 0.);
        let after = Point::new(3., 1., 0.);
        assert!(closest_point_on_segment(before, p1, p2).is_close(&p1));
        assert!(closest_point_on_segment(after, p1, p2).is_close(&p2));
    }

    #[test]
    fn test_distance_degenerate_segment() {
        let p = Point::new(1., 1., 1.);
        let d = distance_point_to_segment(Point::new(1., 1., 0.), p, p);
        assert!((d - 1.).abs() < 1e-10);
    }

    #[test]
    fn test_distance_perpendicular() {
        let p1 = Point::new(0., 0., 0.);
        let p2 = Point::new(4., 0., 0.);
        let d = distance_point_to_segment(Point::new(2., 3., 0.), p1, p2);
        assert!((d - 3.).abs() < 1e-10);
    }
}
