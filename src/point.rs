//! Point catalog construction.
//!
//! Builds the `(Triangle, Point)` pair the tree builder consumes, either by
//! deduplicating shared vertices (`catalog_indexed`) or by treating every
//! triangle corner as its own point (`catalog_soup`). Dedup is a linear
//! equal-within-`EPSILON` scan; this crate is not large enough to need a
//! spatial hash for it.

use cast::u32;

use crate::error::Error;
use crate::geom::{Triangle, TriangleId};
use crate::vector::Vector3;

/// Coordinate-equality tolerance used when deduplicating vertices.
pub const EPSILON: f32 = 1e-4;

/// A unique mesh position together with the triangles it is a corner of.
#[derive(Clone, Debug)]
pub struct Point {
    pub position: Vector3<f32>,
    pub triangles: Vec<TriangleId>,
}

impl Point {
    fn new(position: Vector3<f32>, triangle: TriangleId) -> Self {
        Point {
            position,
            triangles: vec![triangle],
        }
    }
}

fn positions_equal(a: Vector3<f32>, b: Vector3<f32>) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
}

fn find_point(points: &[Point], position: Vector3<f32>) -> Option<usize> {
    points.iter().position(|p| positions_equal(p.position, position))
}

fn insert(points: &mut Vec<Point>, position: Vector3<f32>, triangle: TriangleId) {
    match find_point(points, position) {
        Some(i) => points[i].triangles.push(triangle),
        None => points.push(Point::new(position, triangle)),
    }
}

fn vertex_at(vertices: &[f32], index: usize) -> Vector3<f32> {
    Vector3::new(vertices[index], vertices[index + 1], vertices[index + 2])
}

fn check_vertex_buffer(vertices: &[f32], multiple_of: usize) -> Result<(), Error> {
    if vertices.len() % multiple_of != 0 {
        return Err(Error::VertexBufferNotTriple {
            len: vertices.len(),
            multiple_of,
        });
    }
    Ok(())
}

/// Deduplicating mode: `vertices` holds `3 * V` reals, `indices` holds
/// `3 * T` unsigned triangle-corner indices.
pub fn catalog_indexed(
    vertices: &[f32],
    indices: &[u32],
) -> Result<(Vec<Triangle>, Vec<Point>), Error> {
    check_vertex_buffer(vertices, 3)?;
    if indices.len() % 3 != 0 {
        return Err(Error::IndexBufferNotTriple { len: indices.len() });
    }
    let vertex_count = vertices.len() / 3;
    let mut triangles = Vec::with_capacity(indices.len() / 3);
    let mut points = Vec::new();

    for corners in indices.chunks(3) {
        let mut position = [Vector3::new(0.0, 0.0, 0.0); 3];
        for (slot, &index) in corners.iter().enumerate() {
            let i = index as usize;
            if i >= vertex_count {
                return Err(Error::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
            position[slot] = vertex_at(vertices, i * 3);
        }
        let triangle_id: TriangleId = u32(triangles.len()).unwrap();
        triangles.push(Triangle::new(position[0], position[1], position[2]));
        for p in position.iter() {
            insert(&mut points, *p, triangle_id);
        }
    }

    Ok((triangles, points))
}

/// Non-deduplicating mode: `vertices` holds `9 * T` reals, nine consecutive
/// reals per triangle. Every corner becomes its own `Point`.
pub fn catalog_soup(vertices: &[f32]) -> Result<(Vec<Triangle>, Vec<Point>), Error> {
    check_vertex_buffer(vertices, 9)?;
    let triangle_count = vertices.len() / 9;
    let mut triangles = Vec::with_capacity(triangle_count);
    let mut points = Vec::with_capacity(triangle_count * 3);

    for chunk in vertices.chunks(9) {
        let a = vertex_at(chunk, 0);
        let b = vertex_at(chunk, 3);
        let c = vertex_at(chunk, 6);
        let triangle_id: TriangleId = u32(triangles.len()).unwrap();
        triangles.push(Triangle::new(a, b, c));
        points.push(Point::new(a, triangle_id));
        points.push(Point::new(b, triangle_id));
        points.push(Point::new(c, triangle_id));
    }

    Ok((triangles, points))
}
