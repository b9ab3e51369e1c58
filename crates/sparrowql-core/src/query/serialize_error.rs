use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SerializeError {
    #[error(
        "The parameter name `{name}` is bound as a variable more than once \
        in this operation"
    )]
    DuplicateVariable {
        name: String,
    },

    #[error("Invalid key in params: {key:?}")]
    InvalidParamKey {
        key: String,
    },

    #[error("The root of a serialized operation must request at least one field")]
    MissingRootField,
}
