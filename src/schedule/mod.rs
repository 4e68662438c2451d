pub mod error;
pub mod parse_line;
