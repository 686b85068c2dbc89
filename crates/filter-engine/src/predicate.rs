use crate::{compare::default_predicate, context::CellAccessor, registry::PredicateRegistry};
use model::filter::expr::{FilterExpr, FilterOperator};

/// Executable row predicate compiled from a filter expression. Pure: carries
/// no mutable state, built once per filtering call.
pub type RowPredicate<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;

/// Compile a filter expression into a single row predicate.
///
/// Simple nodes resolve a per-column override from the registry, falling back
/// to the default text comparison; the resolved comparison receives the cell
/// value, the full column filter, and the row, so overrides can inspect
/// passthrough fields or sibling cells. Operator nodes fold their children in
/// order: AND is vacuously true over an empty list, OR vacuously false.
pub fn build_predicate<'a, R>(
    expr: &'a FilterExpr,
    cells: &'a dyn CellAccessor<R>,
    registry: Option<&'a PredicateRegistry<R>>,
) -> RowPredicate<'a, R> {
    match expr {
        FilterExpr::Simple(filter) => match registry.and_then(|r| r.get(&filter.column)) {
            Some(custom) => Box::new(move |row| {
                custom(&cells.cell_value(row, &filter.column), filter, row)
            }),
            None => Box::new(move |row| {
                default_predicate(&cells.cell_value(row, &filter.column), filter)
            }),
        },
        FilterExpr::Operator { op, filters } => {
            let compiled: Vec<RowPredicate<'a, R>> = filters
                .iter()
                .map(|child| build_predicate(child, cells, registry))
                .collect();
            match op {
                FilterOperator::And => Box::new(move |row| compiled.iter().all(|p| p(row))),
                FilterOperator::Or => Box::new(move |row| compiled.iter().any(|p| p(row))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::Value;

    // Rows are plain strings; the accessor ignores the column name.
    fn text_cells(row: &String, _column: &str) -> Value {
        Value::String(row.clone())
    }

    fn contains(needle: &str) -> FilterExpr {
        FilterExpr::column("c", Value::String(needle.to_string()))
    }

    #[test]
    fn test_simple_predicate_uses_default_comparison() {
        let expr = contains("ell");
        let predicate = build_predicate(&expr, &text_cells, None);
        assert!(predicate(&"Hello".to_string()));
        assert!(!predicate(&"World".to_string()));
    }

    #[test]
    fn test_and_requires_every_child() {
        let expr = FilterExpr::and(vec![contains("a"), contains("b")]);
        let predicate = build_predicate(&expr, &text_cells, None);
        assert!(predicate(&"ab".to_string()));
        assert!(!predicate(&"a".to_string()));
    }

    #[test]
    fn test_or_requires_any_child() {
        let expr = FilterExpr::or(vec![contains("a"), contains("b")]);
        let predicate = build_predicate(&expr, &text_cells, None);
        assert!(predicate(&"b".to_string()));
        assert!(!predicate(&"c".to_string()));
    }

    #[test]
    fn test_vacuous_operator_folds() {
        let and_expr = FilterExpr::and(vec![]);
        let or_expr = FilterExpr::or(vec![]);
        let always = build_predicate(&and_expr, &text_cells, None);
        let never = build_predicate(&or_expr, &text_cells, None);
        assert!(always(&"anything".to_string()));
        assert!(!never(&"anything".to_string()));
    }

    #[test]
    fn test_registry_override_wins_for_its_column() {
        let mut registry: PredicateRegistry<String> = PredicateRegistry::new();
        registry.register("c", |_value, _filter, row: &String| row.len() > 3);

        let expr = contains("zzz");
        let predicate = build_predicate(&expr, &text_cells, Some(&registry));
        // Substring would reject both; the override only checks length
        assert!(predicate(&"long enough".to_string()));
        assert!(!predicate(&"no".to_string()));
    }

    #[test]
    fn test_nested_tree_composes() {
        let expr = FilterExpr::and(vec![
            contains("o"),
            FilterExpr::or(vec![contains("x"), contains("w")]),
        ]);
        let predicate = build_predicate(&expr, &text_cells, None);
        assert!(predicate(&"Hello World".to_string()));
        assert!(!predicate(&"Hello".to_string()));
    }
}
