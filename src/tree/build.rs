//! Recursive tree construction: axis selection by coordinate extent,
//! median-splitter selection, and bounding-box propagation into children.

use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;
use order_stat::kth_by;

use super::{Node, NodeId, PointId};
use crate::point::Point;
use crate::vector::{component_max, component_min, with_axis, Vector3};

/// The (max, min) bounding pair a subtree is built over.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Bounds {
    pub max: Vector3<f32>,
    pub min: Vector3<f32>,
}

pub(crate) fn initial_bounds(points: &[Point]) -> Bounds {
    let mut max = points[0].position;
    let mut min = points[0].position;
    for p in &points[1..] {
        max = component_max(max, p.position);
        min = component_min(min, p.position);
    }
    Bounds { max, min }
}

/// Axis with the greatest coordinate extent across `points`. Ties go to the
/// lowest axis index.
fn select_axis(points: &[Point]) -> usize {
    let mut best_axis = 0;
    let mut best_extent = -1.0_f32;
    for axis in 0..3 {
        let extent = match points.iter().minmax_by_key(|p| OrderedFloat(p.position[axis])) {
            MinMaxResult::NoElements | MinMaxResult::OneElement(_) => 0.0,
            MinMaxResult::MinMax(min_p, max_p) => max_p.position[axis] - min_p.position[axis],
        };
        if extent > best_extent {
            best_extent = extent;
            best_axis = axis;
        }
    }
    best_axis
}

/// Builds the subtree over `points` (which is freely reordered in place),
/// recording it into the shared `out_points`/`out_nodes` arenas. Returns the
/// id of the subtree's root, or `None` for an empty point set.
pub(crate) fn build(
    points: &mut [Point],
    bounds: Bounds,
    out_points: &mut Vec<Point>,
    out_nodes: &mut Vec<Node>,
) -> Option<NodeId> {
    if points.is_empty() {
        return None;
    }
    if points.len() == 1 {
        return Some(push_leaf(points[0].clone(), bounds, out_points, out_nodes));
    }

    let axis = select_axis(points);
    let mid = points.len() / 2;
    kth_by(points, mid, |a, b| {
        a.position[axis].partial_cmp(&b.position[axis]).unwrap()
    });
    let splitter = points[mid].clone();
    let splitter_coord = splitter.position[axis];

    let left_bounds = Bounds {
        max: with_axis(bounds.max, axis, splitter_coord),
        min: bounds.min,
    };
    let right_bounds = Bounds {
        max: bounds.max,
        min: with_axis(bounds.min, axis, splitter_coord),
    };

    let (left_points, rest) = points.split_at_mut(mid);
    let right_points = &mut rest[1..];

    let left = build(left_points, left_bounds, out_points, out_nodes);
    let right = build(right_points, right_bounds, out_points, out_nodes);

    let point_id = out_points.len() as PointId;
    out_points.push(splitter);
    let node_id = out_nodes.len() as NodeId;
    out_nodes.push(Node {
        point: point_id,
        axis: axis as u8,
        max: bounds.max,
        min: bounds.min,
        left,
        right,
    });
    Some(node_id)
}

fn push_leaf(
    point: Point,
    bounds: Bounds,
    out_points: &mut Vec<Point>,
    out_nodes: &mut Vec<Node>,
) -> NodeId {
    let point_id = out_points.len() as PointId;
    out_points.push(point);
    let node_id = out_nodes.len() as NodeId;
    out_nodes.push(Node {
        point: point_id,
        axis: 0,
        max: bounds.max,
        min: bounds.min,
        left: None,
        right: None,
    });
    node_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::catalog_soup;
    use quickcheck::TestResult;

    fn tree_from_coords(coords: &[(f32, f32, f32)]) -> Option<crate::tree::Tree> {
        if coords.len() < 3 || coords.len() % 3 != 0 {
            return None;
        }
        if coords
            .iter()
            .any(|(x, y, z)| !x.is_finite() || !y.is_finite() || !z.is_finite())
        {
            return None;
        }
        let vertices: Vec<f32> = coords.iter().flat_map(|&(x, y, z)| [x, y, z]).collect();
        let (triangles, points) = catalog_soup(&vertices).ok()?;
        Some(crate::tree::Tree::from_catalog(triangles, points))
    }

    fn descendants_satisfy(
        tree: &crate::tree::Tree,
        id: u32,
        axis: usize,
        bound: f32,
        le: bool,
    ) -> bool {
        let node = &tree.nodes[id as usize];
        let p = tree.points[node.point as usize].position[axis];
        let ok = if le { p <= bound + 1e-3 } else { p >= bound - 1e-3 };
        if !ok {
            return false;
        }
        let left_ok = node
            .left
            .map_or(true, |l| descendants_satisfy(tree, l, axis, bound, le));
        let right_ok = node
            .right
            .map_or(true, |r| descendants_satisfy(tree, r, axis, bound, le));
        left_ok && right_ok
    }

    fn check_invariants(tree: &crate::tree::Tree, id: Option<u32>) -> bool {
        let id = match id {
            Some(id) => id,
            None => return true,
        };
        let node = &tree.nodes[id as usize];
        let axis = node.axis as usize;
        let p = tree.points[node.point as usize].position;
        for a in 0..3 {
            if !(node.min[a] <= p[a] + 1e-3 && p[a] <= node.max[a] + 1e-3) {
                return false;
            }
        }
        if let Some(left) = node.left {
            if !descendants_satisfy(tree, left, axis, p[axis], true) {
                return false;
            }
        }
        if let Some(right) = node.right {
            if !descendants_satisfy(tree, right, axis, p[axis], false) {
                return false;
            }
        }
        check_invariants(tree, node.left) && check_invariants(tree, node.right)
    }

    /// Axis-partitioning and bounds-containment invariants, checked over
    /// arbitrary point sets instead of the fixed examples above.
    #[quickcheck]
    fn quickcheck_axis_and_bounds_invariants(coords: Vec<(f32, f32, f32)>) -> TestResult {
        let tree = match tree_from_coords(&coords) {
            Some(tree) => tree,
            None => return TestResult::discard(),
        };
        TestResult::from_bool(check_invariants(&tree, tree.root))
    }

    fn build_tree(vertices: &[f32]) -> crate::tree::Tree {
        let (triangles, points) = catalog_soup(vertices).unwrap();
        crate::tree::Tree::from_catalog(triangles, points)
    }

    #[test]
    fn node_count_equals_splitter_count() {
        let vertices = [
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 2.0, 0.0, //
            1.5, 1.0, 0.0, 3.5, 1.0, 0.0, 2.5, 3.0, 0.0,
        ];
        let tree = build_tree(&vertices);
        // 6 points (no dedup in soup mode) => 6 splitters => 6 nodes.
        assert_eq!(tree.nodes.len(), 6);
    }

    #[test]
    fn bounds_contain_every_splitter() {
        let vertices = [
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 2.0, 0.0, //
            1.5, 1.0, 0.5, 3.5, 1.0, -0.5, 2.5, 3.0, 2.0,
        ];
        let tree = build_tree(&vertices);
        for node in &tree.nodes {
            let p = tree.points[node.point as usize].position;
            for axis in 0..3 {
                assert!(node.min[axis] <= p[axis] + 1e-6);
                assert!(p[axis] <= node.max[axis] + 1e-6);
            }
        }
    }

    #[test]
    fn left_subtree_is_on_or_below_splitter_axis() {
        let vertices = [
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 2.0, 0.0, //
            1.5, 1.0, 0.5, 3.5, 1.0, -0.5, 2.5, 3.0, 2.0, //
            -1.0, 4.0, 1.0, 0.5, 5.0, 1.0, 1.0, 6.0, 1.0,
        ];
        let tree = build_tree(&vertices);

        fn check(tree: &crate::tree::Tree, id: Option<u32>) {
            let Some(id) = id else { return };
            let node = &tree.nodes[id as usize];
            let axis = node.axis as usize;
            let splitter = tree.points[node.point as usize].position[axis];
            if let Some(left) = node.left {
                assert_descendants_le(tree, left, axis, splitter);
            }
            if let Some(right) = node.right {
                assert_descendants_ge(tree, right, axis, splitter);
            }
            check(tree, node.left);
            check(tree, node.right);
        }

        fn assert_descendants_le(tree: &crate::tree::Tree, id: u32, axis: usize, bound: f32) {
            let node = &tree.nodes[id as usize];
            let p = tree.points[node.point as usize].position[axis];
            assert!(p <= bound + 1e-6);
            if let Some(left) = node.left {
                assert_descendants_le(tree, left, axis, bound);
            }
            if let Some(right) = node.right {
                assert_descendants_le(tree, right, axis, bound);
            }
        }

        fn assert_descendants_ge(tree: &crate::tree::Tree, id: u32, axis: usize, bound: f32) {
            let node = &tree.nodes[id as usize];
            let p = tree.points[node.point as usize].position[axis];
            assert!(p >= bound - 1e-6);
            if let Some(left) = node.left {
                assert_descendants_ge(tree, left, axis, bound);
            }
            if let Some(right) = node.right {
                assert_descendants_ge(tree, right, axis, bound);
            }
        }

        check(&tree, tree.root);
    }
}
