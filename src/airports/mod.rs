pub mod airport_table;
pub mod error;
