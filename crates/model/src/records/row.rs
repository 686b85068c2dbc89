use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// A flat row of named cells, tagged with the entity it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    /// Cell value for a column; absent columns read as `Value::Null`.
    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> RowData {
        RowData::new(
            "products",
            vec![
                FieldValue::new("name", Some(Value::String("Apple".to_string()))),
                FieldValue::new("stock", Some(Value::Int(12))),
                FieldValue::new("discontinued", None),
            ],
        )
    }

    #[test]
    fn test_get_case_insensitive() {
        let row = sample_row();
        assert!(row.get("NAME").is_some());
        assert!(row.get("missing").is_none());
    }

    #[test]
    fn test_get_value_absent_is_null() {
        let row = sample_row();
        assert_eq!(row.get_value("discontinued"), Value::Null);
        assert_eq!(row.get_value("no_such_column"), Value::Null);
        assert_eq!(row.get_value("stock"), Value::Int(12));
    }
}
