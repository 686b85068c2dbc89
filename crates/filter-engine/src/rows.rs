use crate::{
    context::{CellAccessor, GroupingAdapter},
    error::Result,
    predicate::build_predicate,
    registry::PredicateRegistry,
    tree::filter_tree,
};
use model::filter::expr::FilterExpr;
use std::borrow::Cow;
use tracing::debug;

/// Filter rows with a compiled filter expression.
///
/// With no expression, or no rows, the input slice is returned as-is
/// (borrowed, no copy). When a grouping adapter is supplied the rows are
/// materialized into a tree, filtered hierarchically, and flattened back;
/// otherwise the flat subsequence of matching rows is returned in input
/// order. Inputs are never mutated; the intermediate tree lives and dies
/// inside this call.
pub fn filtered_rows<'a, R: Clone>(
    rows: &'a [R],
    filter: Option<&FilterExpr>,
    cells: &dyn CellAccessor<R>,
    registry: Option<&PredicateRegistry<R>>,
    grouping: Option<&dyn GroupingAdapter<R>>,
) -> Cow<'a, [R]> {
    let Some(expr) = filter else {
        return Cow::Borrowed(rows);
    };
    if rows.is_empty() {
        return Cow::Borrowed(rows);
    }

    let predicate = build_predicate(expr, cells, registry);

    match grouping {
        Some(adapter) => {
            debug!(rows = rows.len(), mode = "hierarchical", "filtering rows");
            Cow::Owned(filter_hierarchical(rows, predicate.as_ref(), adapter))
        }
        None => {
            debug!(rows = rows.len(), mode = "flat", "filtering rows");
            Cow::Owned(rows.iter().filter(|&row| predicate(row)).cloned().collect())
        }
    }
}

/// Parse a raw JSON filter expression and filter with it. This is the wire
/// shape of the expression tree: `{"operator": "or", "filters": [...]}` for
/// combinators and `{"columnName": ..., "value": ...}` for conditions. A
/// null or key-less expression means no filtering; a malformed one is a
/// configuration error, never a silently wrong predicate.
pub fn filtered_rows_json<'a, R: Clone>(
    rows: &'a [R],
    raw: &serde_json::Value,
    cells: &dyn CellAccessor<R>,
    registry: Option<&PredicateRegistry<R>>,
    grouping: Option<&dyn GroupingAdapter<R>>,
) -> Result<Cow<'a, [R]>> {
    let expr = FilterExpr::from_json(raw)?;
    Ok(filtered_rows(rows, expr.as_ref(), cells, registry, grouping))
}

fn filter_hierarchical<R: Clone>(
    rows: &[R],
    predicate: &dyn Fn(&R) -> bool,
    adapter: &dyn GroupingAdapter<R>,
) -> Vec<R> {
    let tree = adapter.rows_to_tree(rows);

    // Group rows are matched through the rows collapsed beneath them, not
    // through their own summary fields.
    let wrapped = |row: &R| {
        if adapter.is_group_row(row) {
            adapter
                .collapsed_rows(row)
                .is_some_and(|hidden| hidden.iter().any(|r| predicate(r)))
        } else {
            predicate(row)
        }
    };

    let filtered = filter_tree(&tree, &wrapped);
    adapter.tree_to_rows(filtered)
}
