//! Ray traversal: near-then-far descent with plane-crossing pruning,
//! producing the globally nearest hit.

use super::{NodeId, Tree};
use crate::geom::{Ray, RayHit};
use crate::intersect::intersect;
use crate::vector::Vector3;

pub(crate) fn raycast(tree: &Tree, ray: &Ray) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;
    visit(
        tree,
        tree.root,
        ray.origin,
        ray.direction,
        ray.max_distance,
        &mut best,
    );
    best
}

/// `cap` is the ray's currently relevant max-distance: it starts at
/// `ray.max_distance` and is tightened to `best.distance` whenever a hit is
/// known. Because `cap` only ever shrinks, gating both the triangle-update
/// and the far-subtree decision on it is equivalent to gating on
/// `ray.max_distance` directly and never admits a hit past the caller's
/// requested distance.
fn visit(
    tree: &Tree,
    node_id: Option<NodeId>,
    origin: Vector3<f32>,
    direction: Vector3<f32>,
    cap: f32,
    best: &mut Option<RayHit>,
) {
    let node_id = match node_id {
        Some(id) => id,
        None => return,
    };
    let node = &tree.nodes[node_id as usize];
    let point = &tree.points[node.point as usize];

    for &tri_id in &point.triangles {
        let triangle = &tree.triangles[tri_id as usize];
        if let Some(t) = intersect(triangle, origin, direction) {
            let better = match best {
                Some(hit) => t <= hit.distance,
                None => true,
            };
            if t <= cap && better {
                *best = Some(RayHit {
                    triangle: tri_id,
                    position: origin + direction * t,
                    distance: t,
                });
            }
        }
    }

    let axis = node.axis as usize;
    let splitter_coord = point.position[axis];
    let (near, far) = if origin[axis] > splitter_coord {
        (node.right, node.left)
    } else {
        (node.left, node.right)
    };

    if direction[axis] == 0.0 {
        // Ray parallel to the splitting plane: it never crosses to the far
        // side, so only the near side can contain a hit.
        let near_cap = current_cap(best, cap);
        visit(tree, near, origin, direction, near_cap, best);
        return;
    }

    let t = (splitter_coord - origin[axis]) / direction[axis];

    let near_cap = current_cap(best, cap);
    visit(tree, near, origin, direction, near_cap, best);

    let cap_after_near = current_cap(best, cap);
    if t >= 0.0 && t < cap_after_near {
        visit(tree, far, origin, direction, cap_after_near, best);
    }
}

fn current_cap(best: &Option<RayHit>, cap: f32) -> f32 {
    match best {
        Some(hit) => hit.distance.min(cap),
        None => cap,
    }
}
