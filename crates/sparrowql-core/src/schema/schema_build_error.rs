use crate::ast;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("The `{type_name}` type is defined more than once in the schema")]
    DuplicateTypeName {
        type_name: String,
    },

    #[error(
        "The schema names `{type_name}` as its mutation root operation type, \
        but no object type with that name is defined"
    )]
    MutationTypeNotDefined {
        type_name: String,
    },

    #[error("Failure to parse schema source text: {0}")]
    ParseError(#[from] ast::schema::ParseError),

    #[error(
        "The schema defines no `{type_name}` object type to serve as its \
        query root operation type"
    )]
    QueryTypeNotDefined {
        type_name: String,
    },
}
