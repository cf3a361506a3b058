//! Introspection utilities: node enumeration and depth/fanout statistics.
//! None of these mutate the tree.

use super::{NodeDescriptor, NodeId, Tree};

/// Tree depth statistics and the per-point triangle-count high-water mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Statistics {
    pub max_depth: usize,
    pub min_leaf_depth: usize,
    pub node_count: usize,
    pub max_triangles_per_point: usize,
}

pub(crate) fn nodes(tree: &Tree) -> Vec<NodeDescriptor> {
    let mut out = Vec::with_capacity(tree.nodes.len());
    visit_pre_order(tree, tree.root, &mut |node| {
        out.push(NodeDescriptor {
            position: tree.points[node.point as usize].position,
            axis: node.axis,
            max: node.max,
            min: node.min,
        });
    });
    out
}

pub(crate) fn statistics(tree: &Tree) -> Statistics {
    let mut max_depth = 0;
    let mut min_leaf_depth = usize::MAX;
    let max_triangles_per_point = tree
        .points
        .iter()
        .map(|p| p.triangles.len())
        .max()
        .unwrap_or(0);

    walk_depths(tree, tree.root, 0, &mut max_depth, &mut min_leaf_depth);

    if tree.nodes.is_empty() {
        min_leaf_depth = 0;
    }

    Statistics {
        max_depth,
        min_leaf_depth,
        node_count: tree.nodes.len(),
        max_triangles_per_point,
    }
}

fn walk_depths(
    tree: &Tree,
    node_id: Option<NodeId>,
    depth: usize,
    max_depth: &mut usize,
    min_leaf_depth: &mut usize,
) {
    let node_id = match node_id {
        Some(id) => id,
        None => return,
    };
    let node = &tree.nodes[node_id as usize];
    *max_depth = (*max_depth).max(depth);
    if node.is_leaf() {
        *min_leaf_depth = (*min_leaf_depth).min(depth);
    }
    walk_depths(tree, node.left, depth + 1, max_depth, min_leaf_depth);
    walk_depths(tree, node.right, depth + 1, max_depth, min_leaf_depth);
}

fn visit_pre_order<'a, F>(tree: &'a Tree, node_id: Option<NodeId>, f: &mut F)
where
    F: FnMut(&'a super::Node),
{
    let node_id = match node_id {
        Some(id) => id,
        None => return,
    };
    let node = &tree.nodes[node_id as usize];
    f(node);
    visit_pre_order(tree, node.left, f);
    visit_pre_order(tree, node.right, f);
}
