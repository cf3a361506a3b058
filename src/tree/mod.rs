//! The k-d tree itself: arena storage plus the public query surface.
//!
//! The tree owns triangles and points directly in two parallel arenas, and
//! `Point`/`Node` reference each other by index (`TriangleId`, `PointId`,
//! `NodeId`) rather than by pointer, so there's no `Triangle <-> Point`
//! reference cycle to manage.

mod build;
mod dump;
mod stats;
mod traverse;

pub use stats::Statistics;

use crate::geom::{Ray, RayHit, Triangle};
use crate::point::Point;
use crate::vector::Vector3;

/// Index into `Tree::points`. Stable for the lifetime of the tree.
pub type PointId = u32;
/// Index into `Tree::nodes`. Stable for the lifetime of the tree.
pub type NodeId = u32;

/// One node of the k-d tree: a splitting point, the axis it splits on, the
/// bounding region this subtree was built over, and its children.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub point: PointId,
    pub axis: u8,
    pub max: Vector3<f32>,
    pub min: Vector3<f32>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A `NodeDescriptor` is the read-only view of a node returned by
/// `Tree::nodes`, carrying the splitter's position rather than a `PointId`
/// so callers don't need a `&Tree` to make sense of it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeDescriptor {
    pub position: Vector3<f32>,
    pub axis: u8,
    pub max: Vector3<f32>,
    pub min: Vector3<f32>,
}

/// The k-d tree over a triangle mesh. Immutable after construction; queries
/// take `&self` and allocate nothing.
#[derive(Clone, Debug)]
pub struct Tree {
    pub(crate) triangles: Vec<Triangle>,
    pub(crate) points: Vec<Point>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: Option<NodeId>,
}

impl Tree {
    pub(crate) fn from_catalog(triangles: Vec<Triangle>, mut points: Vec<Point>) -> Self {
        let mut tree = Tree {
            triangles,
            points: Vec::with_capacity(points.len()),
            nodes: Vec::with_capacity(points.len()),
            root: None,
        };
        if !points.is_empty() {
            let bounds = build::initial_bounds(&points);
            let mut out_points = Vec::with_capacity(points.len());
            let mut out_nodes = Vec::with_capacity(points.len());
            tree.root = build::build(&mut points, bounds, &mut out_points, &mut out_nodes);
            tree.points = out_points;
            tree.nodes = out_nodes;
        }
        tree
    }

    /// Returns the nearest hit along `ray` with distance within
    /// `ray.max_distance`, or `None` if nothing is hit.
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        traverse::raycast(self, ray)
    }

    /// Pre-order list of node descriptors.
    pub fn nodes(&self) -> Vec<NodeDescriptor> {
        stats::nodes(self)
    }

    /// Tree depth statistics and per-point triangle-count statistics.
    pub fn statistics(&self) -> Statistics {
        stats::statistics(self)
    }

    /// Pre-order textual dump, one line per node, in the format
    /// `{x,y,z} | <axis> | Max: {x,y,z} Min: {x,y,z}` with `Left:`/`Right:`
    /// sentinels before descending into children.
    pub fn dump(&self) -> String {
        dump::dump(self)
    }
}
