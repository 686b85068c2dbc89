pub mod compare;
pub mod context;
pub mod error;
pub mod predicate;
pub mod registry;
pub mod rows;
pub mod tree;

pub use compare::default_predicate;
pub use context::{CellAccessor, GroupingAdapter, LevelKeyAdapter, NamedFieldAccess};
pub use error::{FilterError, Result};
pub use predicate::{build_predicate, RowPredicate};
pub use registry::{ColumnPredicate, PredicateRegistry};
pub use rows::{filtered_rows, filtered_rows_json};
pub use tree::filter_tree;
