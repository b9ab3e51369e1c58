mod operation_kind;
mod param_value;
mod query_node;
mod query_spec;
mod serialize_error;
mod serialized_document;
mod serializer;

pub use operation_kind::OperationKind;
pub use param_value::ParamValue;
pub use query_node::QueryNode;
pub use query_spec::QuerySpec;
pub use query_spec::WILDCARD;
pub use serialize_error::SerializeError;
pub use serialized_document::SerializedDocument;
pub use serializer::serialize;
pub use serializer::SerializeOptions;

#[cfg(test)]
mod tests;
