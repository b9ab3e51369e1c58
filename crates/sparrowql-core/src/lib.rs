pub mod ast;
pub mod grammar;
pub mod query;
mod schema;
pub mod shape;
pub mod types;

pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaBuildError;

#[cfg(test)]
pub(crate) mod test_utils;
