//! Textual tree dump: one line per node, `{x,y,z} | <axis> | Max: {x,y,z}
//! Min: {x,y,z}`, with `Left:`/`Right:` sentinels before descending into
//! children.

use std::fmt::Write;

use super::{Node, NodeId, Tree};
use crate::vector::Vector3;

fn format_vector(v: Vector3<f32>) -> String {
    format!("{{{}, {}, {}}}", v.x, v.y, v.z)
}

pub(crate) fn dump(tree: &Tree) -> String {
    let mut out = String::new();
    write_node(tree, tree.root, &mut out);
    out
}

fn write_node(tree: &Tree, node_id: Option<NodeId>, out: &mut String) {
    let node_id = match node_id {
        Some(id) => id,
        None => return,
    };
    let node: &Node = &tree.nodes[node_id as usize];
    let position = tree.points[node.point as usize].position;
    let _ = writeln!(
        out,
        "{} | {} | Max: {} Min: {}",
        format_vector(position),
        node.axis,
        format_vector(node.max),
        format_vector(node.min),
    );
    if let Some(left) = node.left {
        let _ = writeln!(out, "Left:");
        write_node(tree, Some(left), out);
    }
    if let Some(right) = node.right {
        let _ = writeln!(out, "Right:");
        write_node(tree, Some(right), out);
    }
}

#[cfg(test)]
mod tests {
    use crate::point::catalog_soup;
    use crate::tree::Tree;

    #[test]
    fn dump_contains_one_line_per_node() {
        let vertices = [
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 2.0, 0.0, //
            1.5, 1.0, 0.0, 3.5, 1.0, 0.0, 2.5, 3.0, 0.0,
        ];
        let (triangles, points) = catalog_soup(&vertices).unwrap();
        let tree = Tree::from_catalog(triangles, points);
        let dump = tree.dump();
        let node_lines = dump.lines().filter(|l| l.contains("Max:")).count();
        assert_eq!(node_lines, tree.nodes().len());
    }

    #[test]
    fn empty_tree_dumps_empty_string() {
        let tree = Tree::from_catalog(Vec::new(), Vec::new());
        assert_eq!(tree.dump(), "");
    }
}
