use model::hierarchy::tree::GroupNode;

/// Apply a row predicate over a grouped tree, depth first and order
/// preserving. A group survives when any of its children survive filtering;
/// with no surviving children it is kept (childless) only when its own
/// summary row matches. Leaves are kept iff they match. Output nodes are
/// freshly built; the input tree is never mutated.
pub fn filter_tree<R: Clone>(
    tree: &[GroupNode<R>],
    predicate: &dyn Fn(&R) -> bool,
) -> Vec<GroupNode<R>> {
    let mut kept = Vec::new();

    for node in tree {
        match node {
            GroupNode::Group { root, children } => {
                let filtered = filter_tree(children, predicate);
                if !filtered.is_empty() {
                    kept.push(GroupNode::Group {
                        root: root.clone(),
                        children: filtered,
                    });
                } else if predicate(root) {
                    kept.push(GroupNode::Group {
                        root: root.clone(),
                        children: Vec::new(),
                    });
                }
            }
            GroupNode::Leaf(row) => {
                if predicate(row) {
                    kept.push(GroupNode::Leaf(row.clone()));
                }
            }
        }
    }

    kept
}
