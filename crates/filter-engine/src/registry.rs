use model::{core::value::Value, filter::expr::ColumnFilter};
use std::collections::HashMap;

/// Custom comparison for one column. Receives the cell value, the full
/// column filter (including passthrough fields), and the row it came from.
pub type ColumnPredicate<R> = Box<dyn Fn(&Value, &ColumnFilter, &R) -> bool + Send + Sync>;

/// Registry of per-column comparison overrides. Columns without an entry use
/// the default text comparison.
pub struct PredicateRegistry<R> {
    predicates: HashMap<String, ColumnPredicate<R>>,
}

impl<R> PredicateRegistry<R> {
    pub fn new() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, column: &str, predicate: F)
    where
        F: Fn(&Value, &ColumnFilter, &R) -> bool + Send + Sync + 'static,
    {
        self.predicates
            .insert(column.to_lowercase(), Box::new(predicate));
    }

    pub fn get(&self, column: &str) -> Option<&ColumnPredicate<R>> {
        self.predicates.get(&column.to_lowercase())
    }

    pub fn has_predicate(&self, column: &str) -> bool {
        self.predicates.contains_key(&column.to_lowercase())
    }
}

impl<R> Default for PredicateRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry: PredicateRegistry<()> = PredicateRegistry::new();
        assert!(registry.get("age").is_none());
        assert!(!registry.has_predicate("age"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry: PredicateRegistry<()> = PredicateRegistry::new();
        registry.register("Age", |value, filter, _row| {
            value.compare(&filter.value) == Some(std::cmp::Ordering::Greater)
        });
        assert!(registry.has_predicate("age"));
        assert!(registry.has_predicate("AGE"));
    }

    #[test]
    fn test_registered_predicate_is_invoked() {
        let mut registry: PredicateRegistry<()> = PredicateRegistry::new();
        registry.register("age", |value, filter, _row| {
            matches!(
                value.compare(&filter.value),
                Some(std::cmp::Ordering::Greater | std::cmp::Ordering::Equal)
            )
        });

        let filter = ColumnFilter {
            column: "age".to_string(),
            value: Value::Int(15),
            extra: serde_json::Map::new(),
        };
        let predicate = registry.get("age").unwrap();
        assert!(predicate(&Value::Int(20), &filter, &()));
        assert!(!predicate(&Value::Int(10), &filter, &()));
    }
}
