// Core pipeline exports
pub mod filters;
pub mod search;

pub use filters::{filter_by_budget, parse_budget};
pub use search::SearchPipeline;
