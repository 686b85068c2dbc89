pub mod core;
pub mod filter;
pub mod hierarchy;
pub mod records;
