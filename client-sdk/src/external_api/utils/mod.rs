pub mod headers;
pub mod query;
pub mod time;
