//! Möller–Trumbore ray–triangle intersection.

use crate::geom::Triangle;
use crate::vector::{InnerSpace, Vector3};

/// Used both for the ray-parallel-to-triangle-plane rejection and for the
/// "behind the origin" rejection on the final `t`.
pub const EPSILON: f32 = 1e-7;

/// Returns the signed distance along the ray to the triangle, or `None` if
/// the ray misses it (including the case where it intersects the triangle's
/// plane behind the ray's origin).
pub fn intersect(triangle: &Triangle, origin: Vector3<f32>, direction: Vector3<f32>) -> Option<f32> {
    let e1 = triangle.b - triangle.a;
    let e2 = triangle.c - triangle.a;
    let h = direction.cross(e2);
    let alpha = e1.dot(h);
    if alpha.abs() < EPSILON {
        return None;
    }
    let f = 1.0 / alpha;
    let s = origin - triangle.a;
    let u = f * s.dot(h);
    if u < 0.0 || u > 1.0 {
        return None;
    }
    let q = s.cross(e1);
    let v = f * direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = f * e2.dot(q);
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Triangle {
        Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
        )
    }

    #[test]
    fn hits_through_interior() {
        let t = intersect(&tri(), Vector3::new(1.0, 0.5, -10.0), Vector3::new(0.0, 0.0, 1.0));
        assert!((t.unwrap() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn misses_outside_triangle() {
        assert!(intersect(&tri(), Vector3::new(10.0, 10.0, -10.0), Vector3::new(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn parallel_ray_in_plane_is_rejected() {
        assert!(intersect(&tri(), Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn hit_behind_origin_is_rejected() {
        assert!(intersect(&tri(), Vector3::new(0.1, 0.1, 1.0), Vector3::new(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn boundary_hits_are_inclusive() {
        // u == 0: ray through corner `a`.
        assert!(intersect(&tri(), Vector3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0)).is_some());
        // u + v == 1: ray through edge b-c's midpoint.
        let midpoint = Vector3::new(1.5, 1.0, -10.0);
        assert!(intersect(&tri(), midpoint, Vector3::new(0.0, 0.0, 1.0)).is_some());
    }

    #[test]
    fn degenerate_triangle_never_hits() {
        let degenerate = Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
        );
        assert!(intersect(&degenerate, Vector3::new(0.5, 1.0, -1.0), Vector3::new(0.0, 0.0, 1.0)).is_none());
    }
}
