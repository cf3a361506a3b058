//! A k-d tree acceleration structure over a triangle mesh, answering
//! ray/mesh nearest-hit queries.
//!
//! The crate is a pure in-memory index: building a [`Tree`] allocates once
//! from caller-supplied vertex/index buffers, and [`Tree::raycast`] is a
//! blocking, allocation-free query that returns the globally nearest hit (or
//! `None`). There is no I/O, no global state, and no interior mutability --
//! a built tree is safe to query from multiple threads at once.
//!
//! Loading meshes from disk, generating test geometry, and formatting
//! results for a terminal are all the job of the `cli` feature's driver
//! binary, not of this library.

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod error;
pub mod geom;
pub mod intersect;
pub mod point;
pub mod tree;
pub mod vector;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;
pub use geom::{Ray, RayHit, Triangle, TriangleId};
pub use point::Point;
pub use tree::{NodeDescriptor, PointId, Statistics, Tree};
pub use vector::Vector3;

/// Builds a tree from an indexed mesh: `vertices` holds `3 * V` reals,
/// `indices` holds `3 * T` unsigned corner indices. Vertices within
/// [`point::EPSILON`] of each other are merged into a single `Point`.
pub fn build_from_indexed_mesh(vertices: &[f32], indices: &[u32]) -> Result<Tree, Error> {
    let (triangles, points) = point::catalog_indexed(vertices, indices)?;
    Ok(Tree::from_catalog(triangles, points))
}

/// Builds a tree from triangle soup: `vertices` holds `9 * T` reals, nine
/// consecutive reals per triangle. No vertex deduplication is performed, so
/// shared edges cost duplicate points and duplicate intersection work.
pub fn build_from_triangle_soup(vertices: &[f32]) -> Result<Tree, Error> {
    let (triangles, points) = point::catalog_soup(vertices)?;
    Ok(Tree::from_catalog(triangles, points))
}
