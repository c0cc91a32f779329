pub mod query;

pub use query::StrictQuery;
