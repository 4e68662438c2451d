pub mod error;
mod fetch;
pub mod hourly_fetcher;
pub mod taf_fetcher;
pub mod taf_selector;
