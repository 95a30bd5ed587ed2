pub mod status_queries;

pub use status_queries::*;
