use indexmap::IndexSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectError {
    /// One or more query keys/aliases reference fields absent from the
    /// schema at some depth. The set covers every offending key in the whole
    /// query, in insertion order; a projection either succeeds fully or
    /// reports this complete set.
    #[error(
        "Query references fields that do not exist in the schema: {}",
        field_names.iter().cloned().collect::<Vec<_>>().join(", "),
    )]
    ExtraFields {
        field_names: IndexSet<String>,
    },

    #[error(
        "A sub-query was supplied for `{type_name}.{field_name}`, but that \
        field resolves to the leaf type `{leaf_type_name}`"
    )]
    IllegalNestedQuery {
        field_name: String,
        leaf_type_name: String,
        type_name: String,
    },

    #[error(
        "The `*` wildcard is not legal for the `{type_name}` type: every \
        field of a wildcard-eligible type must be requestable without \
        parameters, and the type must have at least one field"
    )]
    IllegalWildcard {
        type_name: String,
    },

    #[error(
        "The `{type_name}` type is referenced in the schema but never \
        declared"
    )]
    UndefinedType {
        type_name: String,
    },
}
