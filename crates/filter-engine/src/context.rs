use model::{
    core::value::Value,
    hierarchy::tree::{self, GroupNode},
    records::row::RowData,
};
use std::marker::PhantomData;

/// Resolves a named cell from a row. The engine never reads row internals
/// directly; every cell access goes through this seam.
pub trait CellAccessor<R> {
    fn cell_value(&self, row: &R, column: &str) -> Value;
}

impl<R, F> CellAccessor<R> for F
where
    F: Fn(&R, &str) -> Value,
{
    fn cell_value(&self, row: &R, column: &str) -> Value {
        self(row, column)
    }
}

/// Cell access for the bundled named-field row type.
pub struct NamedFieldAccess;

impl CellAccessor<RowData> for NamedFieldAccess {
    fn cell_value(&self, row: &RowData, column: &str) -> Value {
        row.get_value(column)
    }
}

/// Collaborators required for hierarchical filtering, bundled so a caller
/// cannot select hierarchical mode with part of the set missing. Conversions
/// must be lossless inverses for any tree built from the same rows; the
/// grouping key semantics live entirely inside the adapter.
///
/// Adapters must be reentrant and must not mutate the rows they are handed;
/// the engine does not guard against collaborators that break this.
pub trait GroupingAdapter<R> {
    /// Classifies a row as a group/summary row rather than a data row.
    fn is_group_row(&self, row: &R) -> bool;

    /// Rows hidden beneath a collapsed group row, used for indirect matching
    /// when the group's descendants are not materialized in the tree.
    fn collapsed_rows<'a>(&self, row: &'a R) -> Option<&'a [R]>;

    fn rows_to_tree(&self, rows: &[R]) -> Vec<GroupNode<R>>;

    fn tree_to_rows(&self, tree: Vec<GroupNode<R>>) -> Vec<R>;
}

/// Reference adapter: level-keyed nesting over caller-supplied classifiers,
/// delegating the conversions to the model's tree helpers.
pub struct LevelKeyAdapter<R, L, G, C> {
    level_of: L,
    group_row: G,
    collapsed: C,
    _rows: PhantomData<fn(&R)>,
}

impl<R, L, G, C> LevelKeyAdapter<R, L, G, C> {
    pub fn new(level_of: L, group_row: G, collapsed: C) -> Self {
        Self {
            level_of,
            group_row,
            collapsed,
            _rows: PhantomData,
        }
    }
}

impl<R, L, G, C> GroupingAdapter<R> for LevelKeyAdapter<R, L, G, C>
where
    R: Clone,
    L: Fn(&R) -> Option<usize>,
    G: Fn(&R) -> bool,
    C: for<'a> Fn(&'a R) -> Option<&'a [R]>,
{
    fn is_group_row(&self, row: &R) -> bool {
        (self.group_row)(row)
    }

    fn collapsed_rows<'a>(&self, row: &'a R) -> Option<&'a [R]> {
        (self.collapsed)(row)
    }

    fn rows_to_tree(&self, rows: &[R]) -> Vec<GroupNode<R>> {
        tree::rows_to_tree(rows, &self.level_of)
    }

    fn tree_to_rows(&self, tree: Vec<GroupNode<R>>) -> Vec<R> {
        tree::tree_to_rows(tree)
    }
}
