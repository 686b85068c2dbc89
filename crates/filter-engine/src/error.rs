use model::filter::expr::FilterParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid filter expression: {0}")]
    InvalidExpression(#[from] FilterParseError),
}

pub type Result<T> = std::result::Result<T, FilterError>;
