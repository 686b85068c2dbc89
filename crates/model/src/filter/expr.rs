use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// Declarative filter expression, classified into a tagged tree at
/// construction time. Operator nodes combine children; simple nodes test one
/// column's value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FilterExpr {
    Operator {
        op: FilterOperator,
        filters: Vec<FilterExpr>,
    },
    Simple(ColumnFilter),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FilterOperator {
    And,
    Or,
}

/// Condition on a single column. `extra` carries any additional fields from
/// the raw expression so custom column predicates can inspect them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnFilter {
    pub column: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Error, PartialEq)]
pub enum FilterParseError {
    #[error("unrecognized filter operator: '{0}'")]
    UnknownOperator(String),

    #[error("filter expression is missing a column name")]
    MissingColumnName,

    #[error("invalid filter expression: {0}")]
    InvalidExpression(String),
}

impl FilterOperator {
    /// Case-insensitive operator lookup.
    pub fn parse(name: &str) -> Option<FilterOperator> {
        match name.to_lowercase().as_str() {
            "and" => Some(FilterOperator::And),
            "or" => Some(FilterOperator::Or),
            _ => None,
        }
    }
}

impl FilterExpr {
    pub fn and(filters: Vec<FilterExpr>) -> Self {
        FilterExpr::Operator {
            op: FilterOperator::And,
            filters,
        }
    }

    pub fn or(filters: Vec<FilterExpr>) -> Self {
        FilterExpr::Operator {
            op: FilterOperator::Or,
            filters,
        }
    }

    pub fn column(name: &str, value: Value) -> Self {
        FilterExpr::Simple(ColumnFilter {
            column: name.to_string(),
            value,
            extra: Map::new(),
        })
    }

    /// Classify a raw JSON expression. Operator resolution has priority: an
    /// object carrying a non-null `operator` key is never reinterpreted as a
    /// simple filter, and an operator name outside the known set is a
    /// configuration error rather than a silent fallthrough.
    ///
    /// `Ok(None)` means "no filtering": a null or an object with no
    /// recognized keys.
    pub fn from_json(raw: &JsonValue) -> Result<Option<FilterExpr>, FilterParseError> {
        let obj = match raw {
            JsonValue::Null => return Ok(None),
            JsonValue::Object(obj) => obj,
            other => {
                return Err(FilterParseError::InvalidExpression(format!(
                    "expected an object, got {other}"
                )));
            }
        };

        if let Some(op_raw) = obj.get("operator").filter(|v| !v.is_null()) {
            let name = op_raw.as_str().ok_or_else(|| {
                FilterParseError::InvalidExpression(format!(
                    "operator must be a string, got {op_raw}"
                ))
            })?;
            let op = FilterOperator::parse(name)
                .ok_or_else(|| FilterParseError::UnknownOperator(name.to_string()))?;

            let filters = match obj.get("filters") {
                None | Some(JsonValue::Null) => Vec::new(),
                Some(JsonValue::Array(entries)) => entries
                    .iter()
                    .map(|entry| {
                        Self::from_json(entry)?.ok_or_else(|| {
                            FilterParseError::InvalidExpression(
                                "empty expression inside an operator's filter list".to_string(),
                            )
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                Some(other) => {
                    return Err(FilterParseError::InvalidExpression(format!(
                        "filters must be an array, got {other}"
                    )));
                }
            };

            return Ok(Some(FilterExpr::Operator { op, filters }));
        }

        if let Some(column_raw) = obj.get("columnName") {
            let column = column_raw
                .as_str()
                .ok_or(FilterParseError::MissingColumnName)?;
            let value = obj.get("value").map(Value::from_json).unwrap_or(Value::Null);
            // Everything beyond the classification keys passes through
            // wholesale, null-valued fields included
            let extra: Map<String, JsonValue> = obj
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), "columnName" | "value" | "operator"))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();

            return Ok(Some(FilterExpr::Simple(ColumnFilter {
                column: column.to_string(),
                value,
                extra,
            })));
        }

        // No recognized keys: the caller asked for no filtering
        Ok(None)
    }
}
