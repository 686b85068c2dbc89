use serde::{Deserialize, Serialize};

/// Node in a grouped-row tree. A group carries the summary row that
/// represents it plus the subtree it was derived from; ownership is strictly
/// tree-shaped, with no sharing between nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GroupNode<R> {
    Leaf(R),
    Group { root: R, children: Vec<GroupNode<R>> },
}

impl<R> GroupNode<R> {
    pub fn leaf(row: R) -> Self {
        GroupNode::Leaf(row)
    }

    pub fn group(root: R, children: Vec<GroupNode<R>>) -> Self {
        GroupNode::Group { root, children }
    }

    /// The row this node presents: the leaf row itself, or a group's summary row.
    pub fn row(&self) -> &R {
        match self {
            GroupNode::Leaf(row) => row,
            GroupNode::Group { root, .. } => root,
        }
    }
}

struct OpenGroup<R> {
    depth: usize,
    root: R,
    children: Vec<GroupNode<R>>,
}

/// Build a grouped tree from a flat row sequence. A row with `Some(depth)`
/// opens a group at that depth, closing any open group at the same or deeper
/// depth first; rows with `None` attach as leaves to the innermost open
/// group. Input rows are cloned, never moved or mutated.
pub fn rows_to_tree<R, F>(rows: &[R], level_of: F) -> Vec<GroupNode<R>>
where
    R: Clone,
    F: Fn(&R) -> Option<usize>,
{
    let mut top: Vec<GroupNode<R>> = Vec::new();
    let mut stack: Vec<OpenGroup<R>> = Vec::new();

    for row in rows {
        match level_of(row) {
            Some(depth) => {
                while stack.last().is_some_and(|open| open.depth >= depth) {
                    close_innermost(&mut stack, &mut top);
                }
                stack.push(OpenGroup {
                    depth,
                    root: row.clone(),
                    children: Vec::new(),
                });
            }
            None => attach(&mut stack, &mut top, GroupNode::Leaf(row.clone())),
        }
    }

    while !stack.is_empty() {
        close_innermost(&mut stack, &mut top);
    }

    top
}

fn close_innermost<R>(stack: &mut Vec<OpenGroup<R>>, top: &mut Vec<GroupNode<R>>) {
    if let Some(open) = stack.pop() {
        let node = GroupNode::Group {
            root: open.root,
            children: open.children,
        };
        attach(stack, top, node);
    }
}

fn attach<R>(stack: &mut [OpenGroup<R>], top: &mut Vec<GroupNode<R>>, node: GroupNode<R>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => top.push(node),
    }
}

/// Flatten a grouped tree back to rows: pre-order, group root first, then its
/// children. Inverse of [`rows_to_tree`] for any tree it produced.
pub fn tree_to_rows<R>(tree: Vec<GroupNode<R>>) -> Vec<R> {
    let mut rows = Vec::new();
    flatten_into(tree, &mut rows);
    rows
}

fn flatten_into<R>(nodes: Vec<GroupNode<R>>, out: &mut Vec<R>) {
    for node in nodes {
        match node {
            GroupNode::Leaf(row) => out.push(row),
            GroupNode::Group { root, children } => {
                out.push(root);
                flatten_into(children, out);
            }
        }
    }
}
