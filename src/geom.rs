//! Geometry primitives: triangles, rays, and hit records.
//!
//! `Triangle`/`Ray`/`RayHit` are plain value types with no interior
//! mutability: traversal state is threaded through the recursion explicitly
//! rather than living in a `Cell` on `Ray`.

use crate::vector::Vector3;

/// Index into `Tree::triangles`. Stable for the lifetime of the tree.
pub type TriangleId = u32;

/// A triangle given by its three corners. Degenerate (colinear) triangles
/// are legal; they simply never produce a hit (see `crate::intersect`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector3<f32>,
    pub b: Vector3<f32>,
    pub c: Vector3<f32>,
}

impl Triangle {
    pub fn new(a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) -> Self {
        Triangle { a, b, c }
    }

    pub fn corners(&self) -> [Vector3<f32>; 3] {
        [self.a, self.b, self.c]
    }
}

/// A ray. `direction` need not be unit length; `max_distance` bounds how far
/// along the ray a hit may be reported.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Vector3<f32>,
    pub direction: Vector3<f32>,
    pub max_distance: f32,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>, max_distance: f32) -> Self {
        debug_assert!(max_distance >= 0.0);
        Ray {
            origin,
            direction,
            max_distance,
        }
    }
}

/// The nearest-hit result of a successful `raycast`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub triangle: TriangleId,
    pub position: Vector3<f32>,
    pub distance: f32,
}
