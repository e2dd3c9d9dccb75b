pub mod diagnostic;
pub mod query_build;
pub mod query_builder;
