use model::{core::value::Value, filter::expr::ColumnFilter};

/// Default comparison used when no custom predicate is registered for a
/// column: case-insensitive "contains" over the textual form of both sides.
/// Absent values compare through their `null` text rather than failing.
pub fn default_predicate(value: &Value, filter: &ColumnFilter) -> bool {
    value
        .to_text()
        .to_lowercase()
        .contains(&filter.value.to_text().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn filter_for(value: Value) -> ColumnFilter {
        ColumnFilter {
            column: "c".to_string(),
            value,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_case_insensitive_substring() {
        let value = Value::String("Hello World".to_string());
        assert!(default_predicate(
            &value,
            &filter_for(Value::String("wor".to_string()))
        ));
        assert!(!default_predicate(
            &value,
            &filter_for(Value::String("xyz".to_string()))
        ));
    }

    #[test]
    fn test_numbers_compare_as_text() {
        assert!(default_predicate(
            &Value::Int(2024),
            &filter_for(Value::String("02".to_string()))
        ));
        assert!(default_predicate(
            &Value::Int(15),
            &filter_for(Value::Int(1))
        ));
    }

    #[test]
    fn test_null_value_matches_null_text() {
        // Absent cells stringify as "null" instead of blowing up
        assert!(default_predicate(
            &Value::Null,
            &filter_for(Value::String("nul".to_string()))
        ));
        assert!(!default_predicate(
            &Value::Null,
            &filter_for(Value::String("apple".to_string()))
        ));
    }

    #[test]
    fn test_empty_filter_text_matches_everything() {
        assert!(default_predicate(
            &Value::String("anything".to_string()),
            &filter_for(Value::String(String::new()))
        ));
    }
}
